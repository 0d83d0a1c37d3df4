use super::complex::Sample;
use super::twiddle::{bit_reversal, TwiddleCache};
use super::{Engine, Pass};

/// Iterative radix-2 Cooley-Tukey for a power-of-two length `n >= 2`.
///
/// Samples are gathered through the bit-reversal permutation while the first
/// stage of butterflies is computed, then `log2(n) - 1` further stages combine
/// them in the output buffer.
pub(crate) fn transform(
    engine: &Engine<'_>,
    pass: &Pass,
    input: &[Sample],
    output: &mut [Sample],
    mut cache: Option<&mut TwiddleCache>,
) {
    let n = pass.len;
    debug_assert!(n >= 2 && n.is_power_of_two());

    let bitrev = bit_reversal(n, engine.tables());
    let (iv, ov) = (pass.input, pass.output);

    for s in 0..pass.batch {
        for k in (0..n).step_by(2) {
            let a = input[iv.at(s, bitrev[k] as usize)];
            let b = input[iv.at(s, bitrev[k + 1] as usize)];
            output[ov.at(s, k)] = a + b;
            output[ov.at(s, k + 1)] = a - b;
        }

        let mut stage = 2;
        while stage < n {
            let jump = stage << 1;
            for group in 0..stage {
                let w =
                    engine.twiddle(cache.as_deref_mut(), n, n * group / jump, pass.direction);
                for pair in (group..n).step_by(jump) {
                    let matched = pair + stage;
                    let t = w * output[ov.at(s, matched)];
                    let p = output[ov.at(s, pair)];
                    output[ov.at(s, matched)] = p - t;
                    output[ov.at(s, pair)] = p + t;
                }
            }
            stage = jump;
        }
    }
}
