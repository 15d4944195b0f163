//! Numeric kernel: sequence generation, primality and GCD/LCM reductions
//!
//! Everything here is pure. Input validation happens in the request classifier.

/// Primes used both for trial division and as Miller-Rabin witnesses.
/// This witness set is deterministic for every 64-bit integer.
const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Square of the first prime not in `SMALL_PRIMES`
const TRIAL_DIVISION_LIMIT: u64 = 41 * 41;

/// First `n` Fibonacci numbers, starting `0, 1, 1, 2, …`
///
/// Returns an empty sequence for `n <= 0`. Terms beyond `u64::MAX` are not
/// produced, so the sequence is truncated after the 94th term.
pub fn fibonacci(n: i64) -> Vec<u64> {
    let Ok(n) = usize::try_from(n) else {
        return Vec::new();
    };

    std::iter::successors(Some((0u64, Some(1u64))), |&(a, b)| {
        b.map(|b| (b, a.checked_add(b)))
    })
    .map(|(a, _)| a)
    .take(n)
    .collect()
}

/// Returns true iff `n > 1` and no integer in `[2, √n]` divides it
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let n = n as u64;

    for p in SMALL_PRIMES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    if n < TRIAL_DIVISION_LIMIT {
        return true;
    }

    miller_rabin(n)
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Deterministic Miller-Rabin for odd `n >= TRIAL_DIVISION_LIMIT`
fn miller_rabin(n: u64) -> bool {
    let mut d = n - 1;
    let s = d.trailing_zeros();
    d >>= s;

    'witness: for a in SMALL_PRIMES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn lcm_u64(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd_u64(a, b)).checked_mul(b)
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// Least common multiple of `|a|` and `|b|`
///
/// 0 if either operand is 0; `None` if the result does not fit in a `u64`.
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    lcm_u64(a.unsigned_abs(), b.unsigned_abs())
}

/// GCD of a sequence, folded left in input order
pub fn gcd_all(values: &[i64]) -> u64 {
    values
        .iter()
        .fold(0, |acc, &v| gcd_u64(acc, v.unsigned_abs()))
}

/// LCM of a sequence, folded left in input order
///
/// Any zero element makes the result 0. `None` on overflow.
pub fn lcm_all(values: &[i64]) -> Option<u64> {
    values
        .iter()
        .try_fold(1, |acc, &v| lcm_u64(acc, v.unsigned_abs()))
}
