//! EMI (equated monthly instalment) calculation for amortizing loans.

use serde::{Deserialize, Serialize};

use super::numeric::round_taka;

/// The result of an EMI calculation, in whole Taka.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmiResult {
    /// The fixed monthly instalment.
    pub emi: i64,
    /// The total amount repaid over the loan term.
    pub total_payment: i64,
    /// The total interest paid (total payment minus principal).
    pub total_interest: i64,
}

/// Calculates the equated monthly instalment for a loan.
///
/// Returns the all-zero result when any of the principal, rate, or term is
/// missing or not positive; a zero rate therefore always short-circuits
/// before the formula's division. Otherwise, with `n = 12t` instalments
/// and monthly rate `i = r / 1200`:
///
/// ```text
/// emi = P * i * (1 + i)^n / ((1 + i)^n - 1)
/// ```
///
/// Figures are rounded to the nearest whole Taka and floored at zero.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::calculate_emi;
///
/// let result = calculate_emi(100_000.0, 10.0, 1.0);
/// assert_eq!(result.emi, 8_792);
/// assert!(result.total_payment > 100_000);
/// ```
pub fn calculate_emi(principal: f64, annual_rate: f64, years: f64) -> EmiResult {
    if !(principal > 0.0) || !(annual_rate > 0.0) || !(years > 0.0) {
        return EmiResult::default();
    }

    let monthly_rate = annual_rate / 12.0 / 100.0;
    let n = years * 12.0;

    let growth = (1.0 + monthly_rate).powf(n);
    let emi = principal * monthly_rate * growth / (growth - 1.0);
    let total_payment = emi * n;
    let total_interest = total_payment - principal;

    EmiResult {
        emi: round_taka(emi),
        total_payment: round_taka(total_payment),
        total_interest: round_taka(total_interest),
    }
}
