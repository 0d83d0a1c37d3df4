use super::complex::{Direction, Sample};
use super::prime_cache::{powermod, primitive_root};
use super::twiddle::{child_of, TwiddleCache};
use super::{Engine, Pass};
use crate::error::FourierError;
use num_traits::Zero;

/// Cache slots used below a prime-length node.
const KERNEL_SLOT: usize = 0;
const SAMPLES_SLOT: usize = 1;

/// Rader's algorithm for a prime length `n`.
///
/// With a generator `g` of the multiplicative group mod `n`, the non-DC part
/// of the transform becomes a cyclic convolution of length `m = n - 1`
/// between the inputs permuted by `g^-k` and the rotation factors permuted by
/// `g^k`. The convolution runs through two length-`m` transforms, so the
/// engine recurses into the classifier for `m`.
pub(crate) fn transform(
    engine: &Engine<'_>,
    pass: &Pass,
    input: &[Sample],
    output: &mut [Sample],
    mut cache: Option<&mut TwiddleCache>,
) -> Result<(), FourierError> {
    let n = pass.len;
    let m = n - 1;

    //
    // Find generator g and its inverse g^(n-2) for the group mod n.
    //
    let g = primitive_root(n).ok_or(FourierError::NoPrimitiveRoot(n))?;
    let g_inv = powermod(g, n - 2, n);

    let mut twiddle_index = Vec::with_capacity(m);
    let mut sample_index = Vec::with_capacity(m);
    let (mut gt, mut gs) = (1usize, 1usize);
    for _ in 0..m {
        twiddle_index.push(gt);
        sample_index.push(gs);
        gt = gt * g % n;
        gs = gs * g_inv % n;
    }

    //
    // Transformed, pre-scaled convolution kernel. The 1/m factor of the
    // inverse convolution transform is folded in here.
    //
    let sequence: Vec<Sample> = twiddle_index
        .iter()
        .map(|&k| engine.twiddle(cache.as_deref_mut(), n, k, pass.direction))
        .collect();
    let mut kernel = vec![Sample::zero(); m];
    engine.transform(
        &Pass::contiguous(m, 1, Direction::Forward),
        &sequence,
        &mut kernel,
        child_of(&mut cache, KERNEL_SLOT, m),
    )?;
    let scale = 1.0 / m as f64;
    kernel.iter_mut().for_each(|w| *w *= scale);

    //
    // Permuted samples of every batch member, side by side.
    //
    let mut buf = vec![Sample::zero(); 2 * m * pass.batch];
    let (samples, spectrum) = buf.split_at_mut(m * pass.batch);
    for (s, chunk) in samples.chunks_exact_mut(m).enumerate() {
        for (dst, &k) in chunk.iter_mut().zip(sample_index.iter()) {
            *dst = input[pass.input.at(s, k)];
        }
    }

    engine.transform(
        &Pass::contiguous(m, pass.batch, Direction::Forward),
        samples,
        spectrum,
        child_of(&mut cache, SAMPLES_SLOT, m),
    )?;

    for chunk in spectrum.chunks_exact_mut(m) {
        for (v, w) in chunk.iter_mut().zip(kernel.iter()) {
            *v *= w;
        }
    }

    engine.transform(
        &Pass::contiguous(m, pass.batch, Direction::Backward),
        spectrum,
        samples,
        child_of(&mut cache, SAMPLES_SLOT, m),
    )?;

    //
    // DC term is the plain sum; every other output is the convolution plus x[0].
    //
    for (s, conv) in samples.chunks_exact(m).enumerate() {
        let x0 = input[pass.input.at(s, 0)];
        let mut dc = x0;
        for (&k, &c) in twiddle_index.iter().zip(conv.iter()) {
            dc += input[pass.input.at(s, k)];
            output[pass.output.at(s, k)] = c + x0;
        }
        output[pass.output.at(s, 0)] = dc;
    }

    Ok(())
}
