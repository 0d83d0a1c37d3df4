use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::HashMap;

lazy_static! {
    //
    // Global PrimeLore instance protected by a mutex.
    //
    static ref PRIME_LORE: Mutex<PrimeLore> = Mutex::new(PrimeLore::new());
}

/// Every prime below this bound is known to the lore after warm-up.
const WARM_LIMIT: usize = 1024;

/// Numbers at or above this bound are factored afresh on every call.
const MEMO_LIMIT: usize = 1 << 16;

/// Memoised trial division. Remembers the smallest factor of every number
/// below `MEMO_LIMIT` it was asked about, and keeps the ordered primes below
/// `WARM_LIMIT` for the first round of trial divisions.
struct PrimeLore {
    smallest_factors: HashMap<usize, usize>,
    primes: Vec<usize>,
}

impl PrimeLore {
    fn new() -> Self {
        let mut s = Self {
            smallest_factors: HashMap::from([(0, 0), (1, 1), (2, 2)]),
            primes: vec![2],
        };

        //
        // Warm the cache in ascending order so `primes` stays sorted.
        //
        for i in 0..WARM_LIMIT {
            s.find(i);
        }
        s
    }

    fn find(&mut self, n: usize) -> usize {
        if let Some(&f) = self.smallest_factors.get(&n) {
            return f;
        }

        let mut solution = n;

        for &p in &self.primes {
            if p * p > n {
                break;
            }
            if n % p == 0 {
                solution = p;
                break;
            }
        }

        //
        // Known primes ran out before sqrt(n): continue with odd candidates.
        //
        if solution == n {
            let mut p = WARM_LIMIT + 1;
            while p * p <= n {
                if n % p == 0 {
                    solution = p;
                    break;
                }
                p += 2;
            }
        }

        if solution == n && n < WARM_LIMIT && n > 2 {
            self.primes.push(n);
        }

        if n < MEMO_LIMIT {
            self.smallest_factors.insert(n, solution);
        }
        solution
    }
}

/// Smallest prime factor of `n` (`n` itself when prime, 1 for 1).
pub fn smallest_factor(n: usize) -> usize {
    PRIME_LORE.lock().find(n)
}

/// Prime factors of `n` with multiplicity, ascending. Empty for 0 and 1.
pub fn factorize(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::with_capacity(16);
    if n <= 1 {
        return factors;
    }

    let mut lore = PRIME_LORE.lock();
    loop {
        let f = lore.find(n);
        factors.push(f);
        if f == n {
            break;
        }
        n /= f;
    }
    factors
}

/// Distinct prime factors of `n`, ascending.
pub fn distinct_factors(n: usize) -> Vec<usize> {
    let mut factors = factorize(n);
    factors.dedup();
    factors
}

pub fn is_prime(n: usize) -> bool {
    n >= 2 && smallest_factor(n) == n
}

/// `base^exp mod modulus`. Intermediates fit in `u64` for 32-bit moduli.
pub fn powermod(base: usize, mut exp: usize, modulus: usize) -> usize {
    let modulus = modulus as u64;
    let mut base = base as u64 % modulus;
    let mut result = 1 % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result as usize
}

/// Smallest generator of the multiplicative group modulo the prime `n`.
///
/// A candidate `g` is a generator when `g^((n-1)/q) != 1 (mod n)` for every
/// prime `q` dividing `n - 1`. Returns `None` when no candidate qualifies.
/// The answer is only meaningful for prime `n`.
pub fn primitive_root(n: usize) -> Option<usize> {
    match n {
        0 | 1 => return None,
        2 => return Some(1),
        _ => {}
    }

    let factors = distinct_factors(n - 1);
    (2..n).find(|&g| factors.iter().all(|&q| powermod(g, (n - 1) / q, n) != 1))
}
