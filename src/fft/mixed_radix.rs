use super::complex::Sample;
use super::twiddle::{child_of, TwiddleCache};
use super::{Engine, Layout, Pass};
use crate::error::FourierError;
use num_traits::Zero;

/// Cache slots used below a mixed-radix node.
const COLUMNS_SLOT: usize = 0;
const ROWS_SLOT: usize = 1;

/// Radix-P (Cooley-Tukey) step for a composite length `n = p * q`.
///
/// Sample `c + q * r` of one transform sits in row `r`, column `c` of a
/// `p x q` grid. The `q` columns are transformed with length `p`, the grid is
/// corrected by `w_n^(r * c)`, and the `p` rows are transformed with length
/// `q`. Row `r` result `k` lands in output slot `r + p * k`.
pub(crate) fn transform(
    engine: &Engine<'_>,
    pass: &Pass,
    p: usize,
    input: &[Sample],
    output: &mut [Sample],
    mut cache: Option<&mut TwiddleCache>,
) -> Result<(), FourierError> {
    let n = pass.len;
    let q = n / p;
    debug_assert_eq!(p * q, n);

    let (iv, ov) = (pass.input, pass.output);
    let mut grid = vec![Sample::zero(); n];

    //
    // Columns read straight from the caller's strides into the grid.
    //
    let columns = Pass {
        len: p,
        batch: q,
        input: Layout::new(q * iv.stride, iv.stride),
        output: Layout::new(q, 1),
        direction: pass.direction,
    };

    //
    // Rows scatter straight into the caller's strides.
    //
    let rows = Pass {
        len: q,
        batch: p,
        input: Layout::new(1, q),
        output: Layout::new(p * ov.stride, ov.stride),
        direction: pass.direction,
    };

    for s in 0..pass.batch {
        engine.transform(
            &columns,
            &input[s * iv.distance..],
            &mut grid,
            child_of(&mut cache, COLUMNS_SLOT, p),
        )?;

        //
        // Apply twiddle factors to the intermediate grid.
        //
        for r in 1..p {
            for c in 1..q {
                let w = engine.twiddle(cache.as_deref_mut(), n, r * c, pass.direction);
                grid[r * q + c] *= w;
            }
        }

        engine.transform(
            &rows,
            &grid,
            &mut output[s * ov.distance..],
            child_of(&mut cache, ROWS_SLOT, q),
        )?;
    }

    Ok(())
}
