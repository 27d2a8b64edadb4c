//! Pure numeric predicates over integer magnitudes.
//!
//! Digit-based predicates take `|n|`; primality and perfection are false for
//! everything below 2 and 1 respectively, so negative inputs never qualify.
//! Primality and perfection run in time bounded by the bit width of `u64`,
//! not by the size of `n`.

/// Witness set that makes Miller-Rabin exact for every `u64`.
const MILLER_RABIN_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    is_prime_magnitude(n as u64)
}

/// Deterministic Miller-Rabin over the first twelve primes.
pub(crate) fn is_prime_magnitude(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in MILLER_RABIN_WITNESSES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }

    // n - 1 = d * 2^s with d odd
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for &a in MILLER_RABIN_WITNESSES.iter() {
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

/// True iff the sum of each decimal digit raised to the digit count equals `|n|`.
pub fn is_armstrong(n: i64) -> bool {
    is_armstrong_magnitude(n.unsigned_abs())
}

pub(crate) fn is_armstrong_magnitude(n: u64) -> bool {
    let digits = decimal_digits(n);
    let power = digits.len() as u32;

    // u128 fits 20 * 9^20
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();
    sum == n as u128
}

/// True iff `n` equals the sum of its proper positive divisors.
pub fn is_perfect(n: i64) -> bool {
    if n < 1 {
        return false;
    }
    is_perfect_magnitude(n as u64)
}

/// Euclid-Euler: an even `n` is perfect iff `n = 2^k * (2^(k+1) - 1)` with
/// `2^(k+1) - 1` prime. No odd perfect number exists below 10^1500, so every
/// odd `u64` is rejected.
pub(crate) fn is_perfect_magnitude(n: u64) -> bool {
    if n < 2 || n % 2 == 1 {
        return false;
    }

    let k = n.trailing_zeros();
    let odd_part = n >> k;
    k < 63 && odd_part == (1u64 << (k + 1)) - 1 && is_prime_magnitude(odd_part)
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u64 {
    digit_sum_magnitude(n.unsigned_abs())
}

pub(crate) fn digit_sum_magnitude(n: u64) -> u64 {
    decimal_digits(n).iter().map(|&d| d as u64).sum()
}

fn decimal_digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }

    let mut digits = Vec::with_capacity(20);
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}
