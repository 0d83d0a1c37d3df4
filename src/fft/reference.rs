use super::complex::{expi, Direction, Sample};
use num_traits::Zero;
use std::f64::consts::PI;

/// Direct O(N^2) transform, `X[j] = sum_k x[k] * exp(sign * i * 2 * pi * j * k / N)`.
///
/// Slow, but has no algorithmic structure to get wrong, so the fast engines
/// are checked against it.
pub fn reference_dft(input: &[Sample], direction: Direction) -> Vec<Sample> {
    let n = input.len();
    let step = direction.sign() * 2.0 * PI / n as f64;
    (0..n)
        .map(|j| {
            input
                .iter()
                .enumerate()
                .fold(Sample::zero(), |acc, (k, &x)| {
                    acc + x * expi(step * ((j * k) % n) as f64)
                })
        })
        .collect()
}
