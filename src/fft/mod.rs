mod butterfly;
pub mod classify;
pub mod complex;
mod mixed_radix;
pub mod prime_cache;
mod rader;
mod radix2;
pub mod reference;
pub mod shift;
pub mod twiddle;

use crate::error::FourierError;
use classify::{classify, Algorithm};
use complex::{Direction, Sample};
use twiddle::{RotationTables, TwiddleCache};

/// Memory layout of a batch of equal-length transforms.
///
/// Sample `k` of batch member `s` lives at `s * distance + k * stride`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Offset between successive samples of one transform.
    pub stride: usize,
    /// Offset between the first samples of successive batch members.
    pub distance: usize,
}

impl Layout {
    pub const fn new(stride: usize, distance: usize) -> Self {
        Self { stride, distance }
    }

    /// Back-to-back transforms of length `len`.
    pub const fn contiguous(len: usize) -> Self {
        Self::new(1, len)
    }

    #[inline(always)]
    pub fn at(&self, member: usize, k: usize) -> usize {
        member * self.distance + k * self.stride
    }

    /// Number of samples a buffer must hold for `batch` transforms of `len`.
    pub fn span(&self, len: usize, batch: usize) -> usize {
        if len == 0 || batch == 0 {
            return 0;
        }
        self.at(batch - 1, len - 1) + 1
    }

    /// [`span`](Self::span), or `None` when it does not fit in a `usize`.
    pub fn checked_span(&self, len: usize, batch: usize) -> Option<usize> {
        if len == 0 || batch == 0 {
            return Some(0);
        }
        (batch - 1)
            .checked_mul(self.distance)?
            .checked_add((len - 1).checked_mul(self.stride)?)?
            .checked_add(1)
    }
}

/// One batched 1-D transform as seen by an engine.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Pass {
    pub(crate) len: usize,
    pub(crate) batch: usize,
    pub(crate) input: Layout,
    pub(crate) output: Layout,
    pub(crate) direction: Direction,
}

impl Pass {
    pub(crate) fn contiguous(len: usize, batch: usize, direction: Direction) -> Self {
        Self {
            len,
            batch,
            input: Layout::contiguous(len),
            output: Layout::contiguous(len),
            direction,
        }
    }
}

/// Shared context of a recursive transform: the optional rotation tables.
///
/// The per-length twiddle cache is threaded through the calls separately,
/// since every recursion level works on its own node.
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct Engine<'t> {
    tables: Option<&'t RotationTables>,
}

impl<'t> Engine<'t> {
    pub(crate) fn new(tables: Option<&'t RotationTables>) -> Self {
        Self { tables }
    }

    pub(crate) fn tables(&self) -> Option<&'t RotationTables> {
        self.tables
    }

    /// Rotation factor `k` of length `n`, read through `cache` when the plan
    /// keeps one.
    #[inline]
    pub(crate) fn twiddle(
        &self,
        cache: Option<&mut TwiddleCache>,
        n: usize,
        k: usize,
        direction: Direction,
    ) -> Sample {
        match cache {
            Some(node) => {
                debug_assert_eq!(node.len(), n);
                node.get(k, direction, self.tables)
            }
            None => twiddle::twiddle(n, k, direction, self.tables),
        }
    }

    /// Runs `pass` with the algorithm the classifier picks for its length.
    ///
    /// `input` and `output` must not alias and must cover the pass layouts.
    /// Engines never normalise.
    pub(crate) fn transform(
        &self,
        pass: &Pass,
        input: &[Sample],
        output: &mut [Sample],
        cache: Option<&mut TwiddleCache>,
    ) -> Result<(), FourierError> {
        let algorithm = classify(pass.len);
        log::trace!(
            "{} n={} batch={} in={:?} out={:?} {:?}",
            algorithm,
            pass.len,
            pass.batch,
            pass.input,
            pass.output,
            pass.direction
        );

        match algorithm {
            Algorithm::Trivial => {
                for s in 0..pass.batch {
                    output[pass.output.at(s, 0)] = input[pass.input.at(s, 0)];
                }
            }
            Algorithm::Butterfly(_) => butterfly::transform(self, pass, input, output),
            Algorithm::PowerOfTwo => radix2::transform(self, pass, input, output, cache),
            Algorithm::Prime => rader::transform(self, pass, input, output, cache)?,
            Algorithm::MixedRadix { factor } => {
                mixed_radix::transform(self, pass, factor, input, output, cache)?
            }
        }

        Ok(())
    }
}
