use super::prime_cache;
use std::fmt::{Display, Formatter};

/// Lengths with a dedicated butterfly, ascending.
pub const BUTTERFLY_LENGTHS: [usize; 7] = [3, 5, 7, 11, 13, 17, 19];

/// Base algorithm chosen for one transform length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Length one: the output is the input.
    Trivial,
    /// A registered small prime with its own butterfly.
    Butterfly(usize),
    /// Iterative radix-2 Cooley-Tukey.
    PowerOfTwo,
    /// Prime length reduced to a cyclic convolution of length `n - 1`.
    Prime,
    /// Composite length split into `factor` rows of `n / factor` columns.
    MixedRadix { factor: usize },
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Trivial => f.write_str("Copy"),
            Algorithm::Butterfly(n) => write!(f, "Butterfly<{n}>"),
            Algorithm::PowerOfTwo => f.write_str("Radix2"),
            Algorithm::Prime => f.write_str("Rader"),
            Algorithm::MixedRadix { factor } => write!(f, "MixedRadix<{factor}>"),
        }
    }
}

/// Picks the algorithm for length `n >= 1`.
pub fn classify(n: usize) -> Algorithm {
    debug_assert!(n > 0, "cannot classify a zero length");
    if n <= 1 {
        Algorithm::Trivial
    } else if BUTTERFLY_LENGTHS.contains(&n) {
        Algorithm::Butterfly(n)
    } else if n.is_power_of_two() {
        Algorithm::PowerOfTwo
    } else if prime_cache::is_prime(n) {
        Algorithm::Prime
    } else {
        Algorithm::MixedRadix {
            factor: radix_factor(n),
        }
    }
}

/// Row count for splitting the composite length `n`.
///
/// Prefers the largest registered butterfly length dividing `n`, then the
/// largest power of two dividing `n`, then the smallest odd factor.
pub fn radix_factor(n: usize) -> usize {
    if let Some(&p) = BUTTERFLY_LENGTHS.iter().rev().find(|&&p| n % p == 0) {
        return p;
    }

    if n % 2 == 0 {
        return 1 << n.trailing_zeros();
    }

    prime_cache::smallest_factor(n)
}
