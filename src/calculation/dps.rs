//! DPS (recurring monthly deposit) maturity calculation.
//!
//! A DPS is a savings instrument where a fixed amount is deposited every
//! month and interest compounds monthly until maturity.

use serde::{Deserialize, Serialize};

use super::numeric::round_taka;

/// The result of a DPS maturity calculation, in whole Taka.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DpsResult {
    /// The maturity value paid out at the end of the term.
    pub maturity: i64,
    /// The total amount deposited over the term.
    pub deposit: i64,
    /// The profit earned (maturity minus deposits).
    pub profit: i64,
}

/// Calculates the maturity of a recurring monthly deposit.
///
/// Returns the all-zero result when any of the deposit, rate, or term is
/// missing or not positive; a zero rate therefore always short-circuits
/// before the formula's division. Otherwise, with `n = 12t` monthly
/// instalments and monthly rate `i = r / 1200`:
///
/// ```text
/// maturity = P * ((1 + i)^n - 1) / i * (1 + i)
/// ```
///
/// All figures are rounded to the nearest whole Taka and floored at zero.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::calculate_dps;
///
/// let result = calculate_dps(5000.0, 8.0, 5.0);
/// assert_eq!(result.deposit, 300_000);
/// assert!(result.maturity > result.deposit);
/// assert_eq!(result.profit, result.maturity - result.deposit);
/// ```
pub fn calculate_dps(monthly_deposit: f64, annual_rate: f64, years: f64) -> DpsResult {
    if !(monthly_deposit > 0.0) || !(annual_rate > 0.0) || !(years > 0.0) {
        return DpsResult::default();
    }

    let n = years * 12.0;
    let monthly_rate = annual_rate / 12.0 / 100.0;

    let maturity =
        monthly_deposit * (((1.0 + monthly_rate).powf(n) - 1.0) / monthly_rate) * (1.0 + monthly_rate);
    let deposit = monthly_deposit * n;
    let profit = maturity - deposit;

    DpsResult {
        maturity: round_taka(maturity),
        deposit: round_taka(deposit),
        profit: round_taka(profit),
    }
}
