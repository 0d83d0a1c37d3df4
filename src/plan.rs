use crate::error::FourierError;
use crate::fft::complex::{div_by, Direction, Sample};
use crate::fft::twiddle::{RotationTables, TwiddleCache};
use crate::fft::{Engine, Layout, Pass};
use bitflags::bitflags;
use num_traits::Zero;
use std::sync::Arc;

/// Largest number of samples one plan may address.
const MAX_TOTAL: usize = u32::MAX as usize;

/// Whether a plan reads and writes the same buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    InPlace,
    OutOfPlace,
}

bitflags! {
    /// Bitmask of plan behaviours.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct PlanFlags: u32 {
        /// Keep a twiddle cache tree for the lifetime of the plan.
        const USE_CACHE = 1;
        /// Read rotation factors and bit-reversal permutations from
        /// [`RotationTables`] wherever the length allows it.
        const USE_SHARED_TABLE = 1 << 1;
        /// Divide backward results by the number of samples per transform.
        const NORMALIZE_BACKWARD = 1 << 2;
    }
}

/// Configuration shared by all plan constructors.
#[derive(Debug, Clone, Default)]
pub struct PlanOptions {
    pub flags: PlanFlags,
    /// Tables used with [`PlanFlags::USE_SHARED_TABLE`]. When the flag is set
    /// without tables, the process-wide [`RotationTables::shared`] are used.
    pub tables: Option<Arc<RotationTables>>,
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(mut self, flags: PlanFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn cached(self) -> Self {
        self.flags(PlanFlags::USE_CACHE)
    }

    pub fn normalized(self) -> Self {
        self.flags(PlanFlags::NORMALIZE_BACKWARD)
    }

    pub fn tables(mut self, tables: Arc<RotationTables>) -> Self {
        self.tables = Some(tables);
        self.flags(PlanFlags::USE_SHARED_TABLE)
    }
}

/// A reusable transform: geometry, scratch space and twiddle caches.
///
/// Multi-dimensional data is stored with axis 0 varying fastest, so element
/// `(i0, i1, i2)` of `dims = [d0, d1, d2]` lives at `i0 + d0 * (i1 + d1 * i2)`.
/// Buffers are supplied to every execution; the geometry never changes.
pub struct Plan {
    dims: Vec<usize>,
    batch: usize,
    input: Layout,
    output: Layout,
    direction: Direction,
    placement: Placement,
    flags: PlanFlags,
    tables: Option<Arc<RotationTables>>,
    caches: Vec<Option<TwiddleCache>>,
    scratch: Vec<Sample>,
}

impl Plan {
    /// Single contiguous transform of `len` samples.
    pub fn new_1d(
        len: usize,
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        Self::new_many_1d(len, 1, placement, direction, options)
    }

    /// `batch` contiguous transforms of `len` samples, back to back.
    pub fn new_many_1d(
        len: usize,
        batch: usize,
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        let layout = Layout::contiguous(len);
        Self::new_strided_1d(len, batch, layout, layout, placement, direction, options)
    }

    /// `batch` transforms of `len` samples with arbitrary input and output
    /// layouts.
    pub fn new_strided_1d(
        len: usize,
        batch: usize,
        input: Layout,
        output: Layout,
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        if len == 0 {
            return Err(FourierError::ZeroLength);
        }
        if batch == 0 {
            return Err(FourierError::ZeroBatch);
        }
        for layout in [input, output] {
            if layout.stride == 0 && len > 1 {
                return Err(FourierError::InvalidLayout {
                    detail: "zero stride with more than one sample",
                });
            }
            if layout.distance == 0 && batch > 1 {
                return Err(FourierError::InvalidLayout {
                    detail: "zero distance with more than one batch member",
                });
            }
            if layout.checked_span(len, batch).is_none() {
                return Err(FourierError::TooLarge(usize::MAX));
            }
        }
        Self::build(vec![len], batch, input, output, placement, direction, options)
    }

    /// Contiguous 2-D transform of `rows` x `cols` samples, rows varying
    /// fastest.
    pub fn new_2d(
        rows: usize,
        cols: usize,
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        Self::new_nd(2, &[rows, cols], placement, direction, options)
    }

    /// Contiguous transform over `rank` axes of lengths `dims`.
    pub fn new_nd(
        rank: usize,
        dims: &[usize],
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        if rank != dims.len() {
            return Err(FourierError::RankMismatch {
                rank,
                dims: dims.len(),
            });
        }
        if dims.is_empty() || dims.contains(&0) {
            return Err(FourierError::ZeroLength);
        }
        let total = Self::checked_total(dims, 1)?;
        let layout = Layout::contiguous(total);
        Self::build(dims.to_vec(), 1, layout, layout, placement, direction, options)
    }

    fn checked_total(dims: &[usize], batch: usize) -> Result<usize, FourierError> {
        dims.iter()
            .try_fold(batch, |acc, &d| acc.checked_mul(d))
            .filter(|&total| total <= MAX_TOTAL)
            .ok_or(FourierError::TooLarge(
                dims.iter().fold(batch, |acc, &d| acc.saturating_mul(d)),
            ))
    }

    fn build(
        dims: Vec<usize>,
        batch: usize,
        input: Layout,
        output: Layout,
        placement: Placement,
        direction: Direction,
        options: PlanOptions,
    ) -> Result<Self, FourierError> {
        let total = Self::checked_total(&dims, batch)?;
        let flags = options.flags;

        let tables = if flags.contains(PlanFlags::USE_SHARED_TABLE) {
            Some(options.tables.unwrap_or_else(RotationTables::shared))
        } else {
            None
        };

        let caches = dims
            .iter()
            .map(|&d| flags.contains(PlanFlags::USE_CACHE).then(|| TwiddleCache::new(d)))
            .collect();

        let scratch_len = if placement == Placement::InPlace || dims.len() > 1 {
            total
        } else {
            0
        };

        log::debug!(
            "Create {:?} plan dims={:?} batch={} {:?} flags={:#x}",
            placement,
            dims,
            batch,
            direction,
            flags.bits()
        );

        Ok(Self {
            dims,
            batch,
            input,
            output,
            direction,
            placement,
            flags,
            tables,
            caches,
            scratch: vec![Sample::zero(); scratch_len],
        })
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Samples per transform: the product of all dimensions.
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn batch(&self) -> usize {
        self.batch
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_in_place(&self) -> bool {
        self.placement == Placement::InPlace
    }

    pub fn flags(&self) -> PlanFlags {
        self.flags
    }

    pub fn input_layout(&self) -> Layout {
        self.input
    }

    pub fn output_layout(&self) -> Layout {
        self.output
    }

    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Twiddle cache root of `axis`, present for plans with
    /// [`PlanFlags::USE_CACHE`].
    pub fn cache(&self, axis: usize) -> Option<&TwiddleCache> {
        self.caches.get(axis).and_then(Option::as_ref)
    }

    /// Rotation factors computed so far across all cache trees.
    pub fn computed_twiddles(&self) -> usize {
        self.caches.iter().flatten().map(TwiddleCache::computed).sum()
    }

    /// Transforms `input` into `output`. `input` is never written.
    pub fn execute(&mut self, input: &[Sample], output: &mut [Sample]) -> Result<(), FourierError> {
        if self.is_in_place() {
            return Err(FourierError::WrongPlacement {
                expected: Placement::InPlace,
            });
        }
        let len = self.len();
        check_buffer(input, self.input.span(len, self.batch))?;
        check_buffer(output, self.output.span(len, self.batch))?;

        let engine = Engine::new(self.tables.as_deref());
        let normalize = self.normalizes();

        if self.dims.len() == 1 {
            let pass = Pass {
                len,
                batch: self.batch,
                input: self.input,
                output: self.output,
                direction: self.direction,
            };
            engine.transform(&pass, input, output, self.caches[0].as_mut())?;
            if normalize {
                scale_layout(output, self.output, len, self.batch);
            }
        } else {
            let output = &mut output[..len];
            let scratch = &mut self.scratch[..];
            let rank = self.dims.len();

            let mut into_output = rank % 2 == 1;
            {
                let dst = if into_output { &mut *output } else { &mut *scratch };
                run_axis(&engine, &self.dims, 0, self.direction, input, dst, self.caches[0].as_mut())?;
            }
            for axis in 1..rank {
                into_output = !into_output;
                let cache = self.caches[axis].as_mut();
                if into_output {
                    run_axis(&engine, &self.dims, axis, self.direction, scratch, output, cache)?;
                } else {
                    run_axis(&engine, &self.dims, axis, self.direction, output, scratch, cache)?;
                }
            }
            if normalize {
                scale(output, len);
            }
        }

        self.log_execution();
        Ok(())
    }

    /// Transforms `buffer` in place, through the plan's scratch space.
    pub fn execute_in_place(&mut self, buffer: &mut [Sample]) -> Result<(), FourierError> {
        if !self.is_in_place() {
            return Err(FourierError::WrongPlacement {
                expected: Placement::OutOfPlace,
            });
        }
        let len = self.len();
        let required = self
            .input
            .span(len, self.batch)
            .max(self.output.span(len, self.batch));
        check_buffer(buffer, required)?;

        let engine = Engine::new(self.tables.as_deref());
        let normalize = self.normalizes();
        let scratch = &mut self.scratch[..];

        if self.dims.len() == 1 {
            let pass = Pass {
                len,
                batch: self.batch,
                input: self.input,
                output: Layout::contiguous(len),
                direction: self.direction,
            };
            engine.transform(&pass, buffer, scratch, self.caches[0].as_mut())?;
            if normalize {
                scale(scratch, len);
            }
            for (s, member) in scratch.chunks_exact(len).enumerate() {
                for (k, &v) in member.iter().enumerate() {
                    buffer[self.output.at(s, k)] = v;
                }
            }
        } else {
            let buffer = &mut buffer[..len];
            let rank = self.dims.len();

            //
            // Even axes land in scratch, odd axes back in the buffer.
            //
            for axis in 0..rank {
                let cache = self.caches[axis].as_mut();
                if axis % 2 == 0 {
                    run_axis(&engine, &self.dims, axis, self.direction, buffer, scratch, cache)?;
                } else {
                    run_axis(&engine, &self.dims, axis, self.direction, scratch, buffer, cache)?;
                }
            }
            if rank % 2 == 1 {
                buffer.copy_from_slice(scratch);
            }
            if normalize {
                scale(buffer, len);
            }
        }

        self.log_execution();
        Ok(())
    }

    fn normalizes(&self) -> bool {
        self.direction == Direction::Backward && self.flags.contains(PlanFlags::NORMALIZE_BACKWARD)
    }

    fn log_execution(&self) {
        log::debug!(
            "Executed plan dims={:?} batch={} ({} twiddles computed)",
            self.dims,
            self.batch,
            self.computed_twiddles()
        );
    }
}

impl Drop for Plan {
    fn drop(&mut self) {
        log::debug!(
            "Destroy plan dims={:?} batch={} ({} twiddles computed)",
            self.dims,
            self.batch,
            self.computed_twiddles()
        );
    }
}

fn check_buffer(buffer: &[Sample], required: usize) -> Result<(), FourierError> {
    if buffer.len() < required {
        return Err(FourierError::BufferTooSmall {
            required,
            actual: buffer.len(),
        });
    }
    Ok(())
}

/// Divides every sample by `len`.
fn scale(data: &mut [Sample], len: usize) {
    let len = len as f64;
    data.iter_mut().for_each(|v| div_by(v, len));
}

/// Divides the samples addressed by `layout` by `len`.
fn scale_layout(data: &mut [Sample], layout: Layout, len: usize, batch: usize) {
    let n = len as f64;
    for s in 0..batch {
        for k in 0..len {
            div_by(&mut data[layout.at(s, k)], n);
        }
    }
}

/// Transforms axis `axis` of the contiguous array `src` into `dst`.
///
/// Samples along the axis sit `inner` apart, where `inner` is the product of
/// the faster axes. Every slab of `inner * len` samples is one batch of
/// `inner` interleaved transforms.
fn run_axis(
    engine: &Engine<'_>,
    dims: &[usize],
    axis: usize,
    direction: Direction,
    src: &[Sample],
    dst: &mut [Sample],
    mut cache: Option<&mut TwiddleCache>,
) -> Result<(), FourierError> {
    let len = dims[axis];
    let inner: usize = dims[..axis].iter().product();
    let outer: usize = dims[axis + 1..].iter().product();

    if inner == 1 {
        return engine.transform(&Pass::contiguous(len, outer, direction), src, dst, cache);
    }

    let layout = Layout::new(inner, 1);
    let pass = Pass {
        len,
        batch: inner,
        input: layout,
        output: layout,
        direction,
    };
    let slab = inner * len;
    for o in 0..outer {
        engine.transform(
            &pass,
            &src[o * slab..],
            &mut dst[o * slab..],
            cache.as_deref_mut(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::fft::reference::reference_dft;

    fn signal(n: usize, seed: f64) -> Vec<Sample> {
        (0..n)
            .map(|k| Sample::new((k as f64 * seed).sin(), (k as f64 * 0.61 + seed).cos()))
            .collect()
    }

    fn assert_close(a: &[Sample], b: &[Sample], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (k, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).norm() < tol, "k={k}: {x} != {y}");
        }
    }

    /// Reference N-D transform: the direct 1-D transform along every axis.
    fn reference_nd(data: &[Sample], dims: &[usize], direction: Direction) -> Vec<Sample> {
        let mut out = data.to_vec();
        let mut inner = 1;
        for &len in dims {
            let outer = data.len() / (inner * len);
            for o in 0..outer {
                for i in 0..inner {
                    let at = |k: usize| o * inner * len + k * inner + i;
                    let line: Vec<Sample> = (0..len).map(|k| out[at(k)]).collect();
                    for (k, v) in reference_dft(&line, direction).into_iter().enumerate() {
                        out[at(k)] = v;
                    }
                }
            }
            inner *= len;
        }
        out
    }

    #[test]
    fn one_dimensional_batches() {
        let (n, batch) = (12, 3);
        let x = signal(n * batch, 0.4);
        let mut plan =
            Plan::new_many_1d(n, batch, Placement::OutOfPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let mut y = vec![Sample::zero(); n * batch];
        plan.execute(&x, &mut y).unwrap();

        for s in 0..batch {
            let expected = reference_dft(&x[s * n..(s + 1) * n], Direction::Forward);
            assert_close(&y[s * n..(s + 1) * n], &expected, 1e-10);
        }
        assert_eq!(plan.scratch_len(), 0);
    }

    #[test]
    fn strided_in_place_uses_output_layout() {
        // Two interleaved transforms of length 10, results written back to back.
        let (n, batch) = (10, 2);
        let x = signal(n * batch, 0.9);
        let mut plan = Plan::new_strided_1d(
            n,
            batch,
            Layout::new(batch, 1),
            Layout::contiguous(n),
            Placement::InPlace,
            Direction::Backward,
            PlanOptions::new().cached(),
        )
        .unwrap();
        assert_eq!(plan.scratch_len(), n * batch);

        let mut buffer = x.clone();
        plan.execute_in_place(&mut buffer).unwrap();
        for s in 0..batch {
            let member: Vec<Sample> = (0..n).map(|k| x[s + k * batch]).collect();
            let expected = reference_dft(&member, Direction::Backward);
            assert_close(&buffer[s * n..(s + 1) * n], &expected, 1e-10);
        }
    }

    #[test]
    fn two_dimensional_matches_reference() {
        let dims = [6, 5];
        let x = signal(30, 0.3);
        let expected = reference_nd(&x, &dims, Direction::Forward);

        let mut plan =
            Plan::new_2d(6, 5, Placement::OutOfPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let mut y = vec![Sample::zero(); 30];
        plan.execute(&x, &mut y).unwrap();
        assert_close(&y, &expected, 1e-9);

        let mut plan =
            Plan::new_2d(6, 5, Placement::InPlace, Direction::Forward, PlanOptions::new().cached())
                .unwrap();
        let mut buffer = x.clone();
        plan.execute_in_place(&mut buffer).unwrap();
        assert_close(&buffer, &expected, 1e-9);
    }

    #[test]
    fn three_dimensional_both_placements() {
        let dims = [4, 3, 7];
        let x = signal(84, 1.1);
        let expected = reference_nd(&x, &dims, Direction::Backward);

        let mut plan =
            Plan::new_nd(3, &dims, Placement::OutOfPlace, Direction::Backward, PlanOptions::new())
                .unwrap();
        let source = x.clone();
        let mut y = vec![Sample::zero(); 84];
        plan.execute(&source, &mut y).unwrap();
        assert_close(&y, &expected, 1e-9);
        assert_eq!(source, x);

        let mut plan =
            Plan::new_nd(3, &dims, Placement::InPlace, Direction::Backward, PlanOptions::new())
                .unwrap();
        let mut buffer = x.clone();
        plan.execute_in_place(&mut buffer).unwrap();
        assert_close(&buffer, &expected, 1e-9);
    }

    #[test]
    fn four_dimensional_matches_reference() {
        let dims = [2, 3, 2, 5];
        let x = signal(60, 0.7);
        let expected = reference_nd(&x, &dims, Direction::Forward);
        let mut plan =
            Plan::new_nd(4, &dims, Placement::OutOfPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let mut y = vec![Sample::zero(); 60];
        plan.execute(&x, &mut y).unwrap();
        assert_close(&y, &expected, 1e-9);
    }

    #[test]
    fn normalized_round_trip() {
        let dims = [9, 4];
        let x = signal(36, 0.2);
        let mut forward =
            Plan::new_nd(2, &dims, Placement::InPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let mut backward = Plan::new_nd(
            2,
            &dims,
            Placement::InPlace,
            Direction::Backward,
            PlanOptions::new().normalized(),
        )
        .unwrap();
        let mut buffer = x.clone();
        forward.execute_in_place(&mut buffer).unwrap();
        backward.execute_in_place(&mut buffer).unwrap();
        assert_close(&buffer, &x, 1e-12);
    }

    #[test]
    fn forward_plans_ignore_normalization() {
        let x = vec![Sample::new(1.0, 0.0); 8];
        let mut plan =
            Plan::new_1d(8, Placement::OutOfPlace, Direction::Forward, PlanOptions::new().normalized())
                .unwrap();
        let mut y = vec![Sample::zero(); 8];
        plan.execute(&x, &mut y).unwrap();
        assert!((y[0] - Sample::new(8.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn cache_is_reused_across_executions() {
        let x = signal(2 * 45, 0.5);
        let mut plan = Plan::new_many_1d(
            45,
            2,
            Placement::OutOfPlace,
            Direction::Forward,
            PlanOptions::new().cached(),
        )
        .unwrap();
        let mut first = vec![Sample::zero(); 90];
        plan.execute(&x, &mut first).unwrap();
        let computed = plan.computed_twiddles();
        assert!(computed > 0);
        assert!(plan.cache(0).is_some_and(|c| c.nodes() > 1));

        let mut second = vec![Sample::zero(); 90];
        plan.execute(&x, &mut second).unwrap();
        assert_eq!(plan.computed_twiddles(), computed);
        assert_eq!(first, second);
    }

    #[test]
    fn shared_tables_agree_with_closed_form() {
        let tables = Arc::new(RotationTables::with_power(10));
        let x = signal(256, 0.8);
        let mut with_tables = Plan::new_1d(
            256,
            Placement::OutOfPlace,
            Direction::Forward,
            PlanOptions::new().tables(tables),
        )
        .unwrap();
        let mut plain =
            Plan::new_1d(256, Placement::OutOfPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let (mut a, mut b) = (vec![Sample::zero(); 256], vec![Sample::zero(); 256]);
        with_tables.execute(&x, &mut a).unwrap();
        plain.execute(&x, &mut b).unwrap();
        assert_close(&a, &b, 1e-9);
        assert!(with_tables.flags().contains(PlanFlags::USE_SHARED_TABLE));
    }

    #[test]
    fn flags_combine_into_options() {
        let options = PlanOptions::new().cached().normalized();
        assert!(options.flags.contains(PlanFlags::USE_CACHE | PlanFlags::NORMALIZE_BACKWARD));
        assert!(!options.flags.contains(PlanFlags::USE_SHARED_TABLE));
        assert_eq!(options.flags.bits(), 0b101);
        assert!(PlanOptions::default().flags.is_empty());
    }

    #[test]
    fn shared_table_flag_falls_back_to_process_tables() {
        assert!(Arc::ptr_eq(&RotationTables::shared(), &RotationTables::shared()));

        // 257 is prime with 256 = 2^8 below it, so Rader runs on table twiddles.
        for n in [1024usize, 257] {
            let x = signal(n, 0.45);
            for direction in [Direction::Forward, Direction::Backward] {
                let mut plan = Plan::new_1d(
                    n,
                    Placement::OutOfPlace,
                    direction,
                    PlanOptions::new().flags(PlanFlags::USE_SHARED_TABLE),
                )
                .unwrap();
                assert!(plan
                    .tables
                    .as_ref()
                    .is_some_and(|t| Arc::ptr_eq(t, &RotationTables::shared())));

                let mut y = vec![Sample::zero(); n];
                plan.execute(&x, &mut y).unwrap();
                assert_close(&y, &reference_dft(&x, direction), 1e-9);
            }
        }
    }

    #[test]
    fn configuration_errors() {
        let opts = PlanOptions::new;
        let (ip, fw) = (Placement::InPlace, Direction::Forward);
        assert_eq!(Plan::new_1d(0, ip, fw, opts()).err(), Some(FourierError::ZeroLength));
        assert_eq!(Plan::new_many_1d(4, 0, ip, fw, opts()).err(), Some(FourierError::ZeroBatch));
        assert_eq!(
            Plan::new_nd(3, &[2, 2], ip, fw, opts()).err(),
            Some(FourierError::RankMismatch { rank: 3, dims: 2 })
        );
        assert_eq!(Plan::new_nd(2, &[4, 0], ip, fw, opts()).err(), Some(FourierError::ZeroLength));
        assert_eq!(Plan::new_nd(0, &[], ip, fw, opts()).err(), Some(FourierError::ZeroLength));

        let bad = Plan::new_strided_1d(4, 1, Layout::new(0, 4), Layout::contiguous(4), ip, fw, opts());
        assert_eq!(bad.err().map(|e| e.kind()), Some(ErrorKind::Configuration));

        let huge = Plan::new_nd(2, &[1 << 20, 1 << 13], ip, fw, opts());
        assert!(matches!(huge.err(), Some(FourierError::TooLarge(_))));

        let overflowing = Plan::new_strided_1d(
            4,
            1,
            Layout::new(usize::MAX / 2, 1),
            Layout::contiguous(4),
            Placement::OutOfPlace,
            fw,
            opts(),
        );
        assert_eq!(overflowing.err(), Some(FourierError::TooLarge(usize::MAX)));

        // A single sample needs neither stride nor distance.
        assert!(Plan::new_strided_1d(1, 1, Layout::new(0, 0), Layout::new(0, 0), ip, fw, opts()).is_ok());
    }

    #[test]
    fn buffer_errors() {
        let mut plan =
            Plan::new_many_1d(8, 2, Placement::OutOfPlace, Direction::Forward, PlanOptions::new())
                .unwrap();
        let x = vec![Sample::zero(); 16];
        let mut short = vec![Sample::zero(); 15];
        assert_eq!(
            plan.execute(&x, &mut short),
            Err(FourierError::BufferTooSmall {
                required: 16,
                actual: 15
            })
        );
        let mut buffer = vec![Sample::zero(); 16];
        assert_eq!(
            plan.execute_in_place(&mut buffer),
            Err(FourierError::WrongPlacement {
                expected: Placement::OutOfPlace
            })
        );

        let mut plan =
            Plan::new_1d(8, Placement::InPlace, Direction::Forward, PlanOptions::new()).unwrap();
        let mut out = vec![Sample::zero(); 8];
        let err = plan.execute(&x, &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Buffer);
    }
}
