use super::complex::{expi, Direction, Sample};
use lazy_static::lazy_static;
use std::borrow::Cow;
use std::f64::consts::PI;
use std::sync::Arc;

/// Recursive roles one engine invocation can spawn below its own node.
pub const MAX_CHILDREN: usize = 2;

/// Default table size exponent: a `2^18` sine table and bit-reversal
/// permutations up to `2^18`.
pub const DEFAULT_TABLE_POWER: u32 = 18;

lazy_static! {
    static ref SHARED_TABLES: Arc<RotationTables> = Arc::new(RotationTables::new());
}

/// Immutable rotation tables shared read-only between plans.
///
/// Holds one high-resolution sine table and the bit-reversal permutation of
/// every power of two up to the table size. Built once, never mutated.
#[derive(Debug)]
pub struct RotationTables {
    sine: Vec<f64>,
    bit_reversal: Vec<Vec<u32>>,
}

impl RotationTables {
    pub fn new() -> Self {
        Self::with_power(DEFAULT_TABLE_POWER)
    }

    /// Builds tables of size `2^power`; `power` is clamped to `2..=24`.
    pub fn with_power(power: u32) -> Self {
        let power = power.clamp(2, 24);
        let size = 1usize << power;

        let sine = (0..size)
            .map(|k| (2.0 * PI * k as f64 / size as f64).sin())
            .collect();

        //
        // Slot p holds the permutation of length 2^p; slot 0 is unused.
        //
        let bit_reversal = (0..=power)
            .map(|p| {
                if p == 0 {
                    Vec::new()
                } else {
                    bit_reverse_indices(1 << p)
                }
            })
            .collect();

        log::debug!("Built rotation tables of size {size}");

        Self { sine, bit_reversal }
    }

    /// Process-wide instance, built on first use and immutable afterwards.
    pub fn shared() -> Arc<RotationTables> {
        SHARED_TABLES.clone()
    }

    pub fn size(&self) -> usize {
        self.sine.len()
    }

    /// Whether rotation factors of length `n` can be read from the sine table.
    pub fn covers(&self, n: usize) -> bool {
        n > 0 && self.size() % n == 0
    }

    /// Forward rotation factor `exp(-i*2*pi*k/n)` read from the sine table.
    /// The caller checks [`covers`](Self::covers) first.
    fn forward(&self, n: usize, k: usize) -> Sample {
        let size = self.size();
        let imag = size / n * k;
        let real = (imag + size / 4) % size;
        Sample::new(self.sine[real], -self.sine[imag])
    }

    fn bit_reversal(&self, n: usize) -> Option<&[u32]> {
        self.bit_reversal
            .get(n.trailing_zeros() as usize)
            .map(|v| v.as_slice())
    }
}

impl Default for RotationTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Bit-reversal permutation of `0..n` for a power of two `n >= 2`.
pub fn bit_reverse_indices(n: usize) -> Vec<u32> {
    let bits = n.trailing_zeros();
    (0..n)
        .map(|i| (i.reverse_bits() >> (usize::BITS - bits)) as u32)
        .collect()
}

/// Bit-reversal permutation for `n`, borrowed from `tables` when they hold it.
pub fn bit_reversal(n: usize, tables: Option<&RotationTables>) -> Cow<'_, [u32]> {
    match tables.and_then(|t| t.bit_reversal(n)) {
        Some(indices) => Cow::Borrowed(indices),
        None => {
            log::trace!("Create bit reversal array of length {n}");
            Cow::Owned(bit_reverse_indices(n))
        }
    }
}

/// Forward rotation factor `exp(-i*2*pi*k/n)`.
fn forward_twiddle(n: usize, k: usize, tables: Option<&RotationTables>) -> Sample {
    let k = k % n;
    match tables {
        Some(t) if t.covers(n) => t.forward(n, k),
        _ => expi(-2.0 * PI * k as f64 / n as f64),
    }
}

/// Rotation factor `exp(sign*i*2*pi*k/n)` for `direction`, without caching.
pub fn twiddle(
    n: usize,
    k: usize,
    direction: Direction,
    tables: Option<&RotationTables>,
) -> Sample {
    direction.orient(forward_twiddle(n, k, tables))
}

/// One node of the per-plan twiddle cache tree.
///
/// Stores forward rotation factors for a single length, filled lazily slot by
/// slot. The direction is applied when a value is read, so forward and
/// backward passes over the same length share a node.
#[derive(Debug, Clone)]
pub struct TwiddleCache {
    len: usize,
    slots: Vec<Option<Sample>>,
    children: [Option<Box<TwiddleCache>>; MAX_CHILDREN],
    computed: usize,
}

impl TwiddleCache {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            slots: vec![None; len],
            children: Default::default(),
            computed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn get(
        &mut self,
        k: usize,
        direction: Direction,
        tables: Option<&RotationTables>,
    ) -> Sample {
        let k = k % self.len;
        let value = match self.slots[k] {
            Some(v) => v,
            None => {
                let v = forward_twiddle(self.len, k, tables);
                self.slots[k] = Some(v);
                self.computed += 1;
                v
            }
        };
        direction.orient(value)
    }

    /// Child node for recursion role `slot`, created on first use. A child
    /// left over from a different length is replaced.
    pub fn child(&mut self, slot: usize, len: usize) -> &mut TwiddleCache {
        let node = &mut self.children[slot];
        if node.as_ref().is_some_and(|c| c.len != len) {
            *node = None;
        }
        node.get_or_insert_with(|| Box::new(TwiddleCache::new(len)))
    }

    /// Number of rotation factors computed in this node and all descendants.
    pub fn computed(&self) -> usize {
        self.computed
            + self
                .children
                .iter()
                .flatten()
                .map(|c| c.computed())
                .sum::<usize>()
    }

    /// Number of nodes in the tree rooted here.
    pub fn nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|c| c.nodes())
            .sum::<usize>()
    }
}

/// Child cache of an optional parent, for use at recursion sites.
pub(crate) fn child_of<'a>(
    cache: &'a mut Option<&mut TwiddleCache>,
    slot: usize,
    len: usize,
) -> Option<&'a mut TwiddleCache> {
    cache.as_deref_mut().map(|c| c.child(slot, len))
}
