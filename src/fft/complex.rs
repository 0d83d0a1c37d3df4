use num_complex::Complex64;

/// One complex sample: a pair of IEEE-754 doubles.
pub type Sample = Complex64;

/// Sign convention of a transform.
///
/// Forward uses `exp(-i*2*pi*k*n/N)`, backward uses its conjugate. Backward
/// transforms are never normalised implicitly.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Sign of the exponent: -1 for forward, +1 for backward.
    #[inline(always)]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Backward => 1.0,
        }
    }

    #[inline(always)]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Orients a stored forward rotation factor for this direction.
    #[inline(always)]
    pub fn orient(self, forward: Sample) -> Sample {
        match self {
            Direction::Forward => forward,
            Direction::Backward => forward.conj(),
        }
    }
}

/// Returns `cos(angle) + i*sin(angle)`.
#[inline(always)]
pub fn expi(angle: f64) -> Sample {
    let (sin, cos) = angle.sin_cos();
    Sample::new(cos, sin)
}

/// Multiplies by `+i`.
#[inline(always)]
pub fn mul_pj(a: Sample) -> Sample {
    Sample::new(-a.im, a.re)
}

/// Multiplies by `-i`.
#[inline(always)]
pub fn mul_nj(a: Sample) -> Sample {
    Sample::new(a.im, -a.re)
}

/// Multiplies by the imaginary unit carrying the sign of `direction`:
/// `-i` for forward, `+i` for backward.
#[inline(always)]
pub fn rotate_j(a: Sample, direction: Direction) -> Sample {
    match direction {
        Direction::Forward => mul_nj(a),
        Direction::Backward => mul_pj(a),
    }
}

#[inline(always)]
pub fn div_by(a: &mut Sample, v: f64) {
    a.re /= v;
    a.im /= v;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imaginary_rotations() {
        let a = Sample::new(2.0, 3.0);
        assert_eq!(mul_pj(a), a * Sample::i());
        assert_eq!(mul_nj(a), a * -Sample::i());
        assert_eq!(rotate_j(a, Direction::Forward), mul_nj(a));
        assert_eq!(rotate_j(a, Direction::Backward), mul_pj(a));
    }

    #[test]
    fn orient_conjugates_backward() {
        let w = expi(-0.3);
        assert_eq!(Direction::Forward.orient(w), w);
        assert_eq!(Direction::Backward.orient(w), w.conj());
        assert_eq!(Direction::Forward.reverse(), Direction::Backward);
    }

    #[test]
    fn expi_lies_on_unit_circle() {
        for k in 0..16 {
            let w = expi(k as f64 * 0.7);
            assert!((w.norm() - 1.0).abs() < 1e-15);
        }
        let mut a = Sample::new(4.0, -8.0);
        div_by(&mut a, 4.0);
        assert_eq!(a, Sample::new(1.0, -2.0));
    }
}
