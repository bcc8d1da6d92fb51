//! Integer formulas: gcd/lcm, primality, Fibonacci, binomial coefficients
//!
//! Results are exact. Values that do not fit the return type fail with
//! [`CalcError::Overflow`].

use crate::error::{CalcError, Result};

/// Largest n for which F(n) fits in a `u128`
pub const MAX_FIBONACCI_INPUT: i64 = 186;

/// Greatest common divisor (Euclid). `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple, 0 when either input is 0
pub fn lcm(a: i64, b: i64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    let divisor = gcd(a, b);
    (a.unsigned_abs() / divisor)
        .checked_mul(b.unsigned_abs())
        .ok_or_else(|| CalcError::Overflow(format!("lcm({}, {}) does not fit in 64 bits", a, b)))
}

/// Trial division by odd candidates up to √n
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let n = n as u64;
    let mut i = 3u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// The nth Fibonacci number, F(0) = 0, F(1) = 1
pub fn fibonacci(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(CalcError::InvalidDomain(
            "Fibonacci is only defined for non-negative integers".to_string(),
        ));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(CalcError::Overflow(format!(
            "F({}) does not fit in 128 bits",
            n
        )));
    }
    if n <= 1 {
        return Ok(n as u128);
    }

    let (mut a, mut b) = (0u128, 1u128);
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    Ok(b)
}

/// C(n, k), 0 when k < 0 or k > n.
///
/// Uses the multiplicative form so intermediate values stay close to the result:
/// after step i the accumulator holds C(n - k + i, i) exactly.
pub fn binomial_coefficient(n: i64, k: i64) -> Result<u128> {
    if k < 0 || k > n {
        return Ok(0);
    }

    let k = k.min(n - k) as u128;
    let n = n as u128;
    let overflow = || CalcError::Overflow(format!("C({}, {}) does not fit in 128 bits", n, k));

    let mut result: u128 = 1;
    for i in 1..=k {
        let factor = n - k + i;
        // result * factor is divisible by i; split out the gcd first to delay overflow
        let g = gcd_u128(result, i);
        let (reduced, divisor) = (result / g, i / g);
        result = reduced
            .checked_mul(factor / divisor)
            .ok_or_else(overflow)?;
    }
    Ok(result)
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
