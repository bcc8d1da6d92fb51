//! Interest and loan formulas
//!
//! Rates are annual and expressed as decimals (0.05 for 5%); time is in years.

use crate::error::{CalcError, Result};

/// Default compounding frequency (annual)
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 1;

/// Default payment frequency (monthly)
pub const DEFAULT_PAYMENTS_PER_YEAR: u32 = 12;

/// Final amount after compound interest: `P * (1 + r/n)^(n*t)`
///
/// ```
/// use rusty_calculator::finance::calculate_compound_interest;
/// let amount = calculate_compound_interest(1000.0, 0.0, 5.0, 12).unwrap();
/// assert_eq!(amount, 1000.0);
/// ```
pub fn calculate_compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    compounds_per_year: u32,
) -> Result<f64> {
    if compounds_per_year == 0 {
        return Err(CalcError::DivisionByZero(
            "Compounds per year must be at least 1".to_string(),
        ));
    }

    let n = compounds_per_year as f64;
    Ok(principal * (1.0 + rate / n).powf(n * time))
}

/// Interest earned (not the final amount): `P * r * t`
pub fn calculate_simple_interest(principal: f64, rate: f64, time: f64) -> f64 {
    principal * rate * time
}

/// Fixed payment per period that fully amortizes a loan.
///
/// With a zero rate the principal is split evenly across all payments.
pub fn calculate_loan_payment(
    principal: f64,
    rate: f64,
    time: f64,
    payments_per_year: u32,
) -> Result<f64> {
    let n = time * payments_per_year as f64;
    if n == 0.0 {
        return Err(CalcError::DivisionByZero(
            "Loan must have at least one payment period".to_string(),
        ));
    }

    let r = rate / payments_per_year as f64;
    if r == 0.0 {
        return Ok(principal / n);
    }

    // (1 + r)^n - 1 without cancellation for rates close to zero
    let growth_minus_one = (n * r.ln_1p()).exp_m1();
    if growth_minus_one == 0.0 {
        return Err(CalcError::DivisionByZero(format!(
            "Rate {} is too small to amortize over {} payments",
            rate, n
        )));
    }
    let growth = 1.0 + growth_minus_one;
    Ok(principal * (r * growth) / growth_minus_one)
}
