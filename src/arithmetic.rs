//! Arithmetic primitives
//!
//! Scalar operations on `f64` plus aggregates over non-empty slices.
//! Domain violations are reported as [`CalcError`] instead of producing NaN/inf.

use crate::error::{CalcError, Result};
use num_traits::{Float, FromPrimitive};

/// Largest n for which n! fits in a `u128`
pub const MAX_FACTORIAL_INPUT: u32 = 34;

/// Fractional decimal digits of the smallest subnormal f64
const MAX_FRACTION_DIGITS: i32 = 1074;

/// Return the sum of a and b
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Return the difference of a and b
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Return the product of a and b
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Return the quotient of a and b
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero("Cannot divide by zero".to_string()));
    }
    Ok(a / b)
}

/// Return a raised to the power of b
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Floor-style remainder: the result takes the sign of the divisor.
///
/// ```
/// use rusty_calculator::arithmetic::modulus;
/// assert_eq!(modulus(-7.0, 4.0).unwrap(), 1.0);
/// assert_eq!(modulus(7.0, -4.0).unwrap(), -1.0);
/// ```
pub fn modulus(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero(
            "Cannot take modulus by zero".to_string(),
        ));
    }

    let rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

/// Return the non-negative square root of a
pub fn sqrt(a: f64) -> Result<f64> {
    if a < 0.0 {
        return Err(CalcError::InvalidDomain(
            "Cannot take square root of negative number".to_string(),
        ));
    }
    Ok(a.sqrt())
}

/// Return a! as an exact integer.
///
/// `a` must hold a non-negative integral value; anything above
/// [`MAX_FACTORIAL_INPUT`] overflows `u128`.
pub fn factorial(a: f64) -> Result<u128> {
    if !a.is_finite() || a < 0.0 || a.fract() != 0.0 {
        return Err(CalcError::InvalidDomain(
            "Factorial is only defined for non-negative integers".to_string(),
        ));
    }
    if a > MAX_FACTORIAL_INPUT as f64 {
        return Err(CalcError::Overflow(format!(
            "{}! does not fit in 128 bits",
            a
        )));
    }

    Ok((1..=a as u128).product())
}

/// Return 1/a
pub fn reciprocal(a: f64) -> Result<f64> {
    if a == 0.0 {
        return Err(CalcError::DivisionByZero(
            "Cannot take reciprocal of zero".to_string(),
        ));
    }
    Ok(1.0 / a)
}

/// Logarithm of a in the given base (natural log when `base` is `None`)
pub fn log(a: f64, base: Option<f64>) -> Result<f64> {
    if a <= 0.0 {
        return Err(CalcError::InvalidDomain(
            "Logarithm only defined for positive numbers".to_string(),
        ));
    }

    match base {
        None => Ok(a.ln()),
        Some(b) if b <= 0.0 || b == 1.0 => Err(CalcError::InvalidDomain(format!(
            "Invalid logarithm base: {}",
            b
        ))),
        Some(b) => Ok(a.ln() / b.ln()),
    }
}

/// Return e raised to the power of a
pub fn exp(a: f64) -> f64 {
    a.exp()
}

/// Round to `ndigits` decimal places, ties to even.
///
/// Ties are decided on the exact binary value, so `2.675` (stored as
/// 2.67499...) rounds to `2.67` and `251.305` (stored as 251.30500...07)
/// rounds to `251.31`. Negative `ndigits` rounds to the left of the decimal point.
///
/// ```
/// use rusty_calculator::arithmetic::round_number;
/// assert_eq!(round_number(2.5, 0), 2.0);
/// assert_eq!(round_number(3.5, 0), 4.0);
/// assert_eq!(round_number(251.305, 2), 251.31);
/// assert_eq!(round_number(1234.0, -2), 1200.0);
/// ```
pub fn round_number(a: f64, ndigits: i32) -> f64 {
    if !a.is_finite() {
        return a;
    }
    if ndigits == 0 {
        return a.round_ties_even();
    }

    if ndigits > 0 {
        // Every finite f64 is exact within this many fractional digits
        if ndigits > MAX_FRACTION_DIGITS {
            return a;
        }
        // Fixed-precision formatting is correctly rounded on the exact value
        return format!("{:.*}", ndigits as usize, a)
            .parse()
            .unwrap_or(a);
    }

    let scale = 10f64.powi(ndigits.saturating_neg());
    if !scale.is_finite() {
        return 0.0 * a.signum();
    }
    (a / scale).round_ties_even() * scale
}

/// Return |a|
pub fn abs_val(a: f64) -> f64 {
    a.abs()
}

fn require_values<T>(values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(CalcError::EmptyInput(
            "At least one number is required".to_string(),
        ));
    }
    Ok(())
}

/// Arithmetic mean of the values
pub fn average<T: Float + FromPrimitive>(values: &[T]) -> Result<T> {
    require_values(values)?;
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    let count = T::from_usize(values.len())
        .ok_or_else(|| CalcError::Overflow("Too many values to average".to_string()))?;
    Ok(sum / count)
}

/// Largest of the values
pub fn maximum<T: Float>(values: &[T]) -> Result<T> {
    require_values(values)?;
    Ok(values[1..].iter().fold(values[0], |acc, &v| acc.max(v)))
}

/// Smallest of the values
pub fn minimum<T: Float>(values: &[T]) -> Result<T> {
    require_values(values)?;
    Ok(values[1..].iter().fold(values[0], |acc, &v| acc.min(v)))
}

/// Product of the values
pub fn product<T: Float>(values: &[T]) -> Result<T> {
    require_values(values)?;
    Ok(values.iter().fold(T::one(), |acc, &v| acc * v))
}
