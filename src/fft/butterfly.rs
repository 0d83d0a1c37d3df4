use super::classify::BUTTERFLY_LENGTHS;
use super::complex::{rotate_j, Direction, Sample};
use super::twiddle::twiddle;
use super::{Engine, Pass};
use num_traits::Zero;
use std::f64::consts::PI;

const MAX_LENGTH: usize = BUTTERFLY_LENGTHS[BUTTERFLY_LENGTHS.len() - 1];

/// Computes sin(pi * a / b).
#[inline(always)]
fn sab(a: f64, b: f64) -> f64 {
    (PI * a / b).sin()
}

/// Computes cos(pi * a / b).
#[inline(always)]
fn cab(a: f64, b: f64) -> f64 {
    (PI * a / b).cos()
}

#[inline(always)]
fn kernel3(x: &[Sample; 3], direction: Direction) -> [Sample; 3] {
    let t0 = rotate_j((x[1] - x[2]) * sab(1.0, 3.0), direction);
    let u0 = x[1] + x[2];
    let u1 = x[0] - u0 * 0.5;
    [x[0] + u0, u1 + t0, u1 - t0]
}

#[inline(always)]
fn kernel5(x: &[Sample; 5], direction: Direction) -> [Sample; 5] {
    let a = 0.25;
    let b = sab(2.0, 5.0);
    let c = sab(1.0, 5.0);
    let d = cab(1.0, 5.0) - a;

    let t0 = x[1] + x[4];
    let t1 = x[2] + x[3];
    let t2 = (t0 - t1) * d;
    let u0 = x[1] - x[4];
    let u1 = x[2] - x[3];
    let u2 = t0 + t1;
    let u3 = x[0] - u2 * a;
    let t4 = u3 + t2;
    let u4 = u3 - t2;
    let t5 = rotate_j(u0 * b + u1 * c, direction);
    let u5 = rotate_j(u0 * c - u1 * b, direction);

    [x[0] + u2, t4 + t5, u4 + u5, u4 - u5, t4 - t5]
}

/// Direct transform of one registered length with a table of its rotation
/// factors: `X[j] = sum_k x[k] * w[(j * k) mod n]`.
#[inline(always)]
fn kernel_direct(x: &[Sample], w: &[Sample], out: &mut [Sample]) {
    let n = x.len();
    out[0] = x.iter().sum();
    for (j, o) in out.iter_mut().enumerate().skip(1) {
        let mut acc = x[0];
        let mut t = 0;
        for &v in &x[1..] {
            t += j;
            if t >= n {
                t -= n;
            }
            acc += v * w[t];
        }
        *o = acc;
    }
}

/// Small prime butterflies, gathered and scattered through the pass strides.
pub(crate) fn transform(
    engine: &Engine<'_>,
    pass: &Pass,
    input: &[Sample],
    output: &mut [Sample],
) {
    let n = pass.len;
    match n {
        3 => {
            for s in 0..pass.batch {
                let x = [0, 1, 2].map(|k| input[pass.input.at(s, k)]);
                for (k, v) in kernel3(&x, pass.direction).into_iter().enumerate() {
                    output[pass.output.at(s, k)] = v;
                }
            }
        }
        5 => {
            for s in 0..pass.batch {
                let x = [0, 1, 2, 3, 4].map(|k| input[pass.input.at(s, k)]);
                for (k, v) in kernel5(&x, pass.direction).into_iter().enumerate() {
                    output[pass.output.at(s, k)] = v;
                }
            }
        }
        _ => {
            debug_assert!(n <= MAX_LENGTH);
            let mut w = [Sample::zero(); MAX_LENGTH];
            for (k, v) in w.iter_mut().take(n).enumerate() {
                *v = twiddle(n, k, pass.direction, engine.tables());
            }

            let mut x = [Sample::zero(); MAX_LENGTH];
            let mut y = [Sample::zero(); MAX_LENGTH];
            for s in 0..pass.batch {
                for (k, v) in x.iter_mut().take(n).enumerate() {
                    *v = input[pass.input.at(s, k)];
                }
                kernel_direct(&x[..n], &w[..n], &mut y[..n]);
                for (k, v) in y.iter().take(n).enumerate() {
                    output[pass.output.at(s, k)] = *v;
                }
            }
        }
    }
}
