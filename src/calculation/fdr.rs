//! FDR (fixed deposit receipt) maturity calculation.
//!
//! An FDR is a lump-sum deposit held for a fixed term with annual
//! compounding.

use serde::{Deserialize, Serialize};

use super::numeric::round_taka;

/// The result of an FDR maturity calculation, in whole Taka.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdrResult {
    /// The maturity value paid out at the end of the term.
    pub maturity: i64,
    /// The profit earned (maturity minus principal).
    pub profit: i64,
    /// Whether the instrument was labelled Islamic (Mudaraba). The label
    /// has no effect on the arithmetic.
    pub is_islamic: bool,
}

/// Calculates the maturity of a fixed lump-sum deposit.
///
/// Returns the all-zero result when any of the principal, rate, or term is
/// missing or not positive. Otherwise:
///
/// ```text
/// maturity = P * (1 + r/100)^t
/// ```
///
/// Figures are rounded to the nearest whole Taka and floored at zero. The
/// `is_islamic` flag is carried through to the result unchanged; Islamic
/// (profit-rate) and conventional (interest-rate) instruments share the
/// same compounding arithmetic here.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::calculate_fdr;
///
/// let result = calculate_fdr(100_000.0, 8.0, 3.0, false);
/// assert_eq!(result.maturity, 125_971);
/// assert_eq!(result.profit, 25_971);
/// ```
pub fn calculate_fdr(principal: f64, annual_rate: f64, years: f64, is_islamic: bool) -> FdrResult {
    if !(principal > 0.0) || !(annual_rate > 0.0) || !(years > 0.0) {
        return FdrResult {
            is_islamic,
            ..FdrResult::default()
        };
    }

    let maturity = principal * (1.0 + annual_rate / 100.0).powf(years);
    let profit = maturity - principal;

    FdrResult {
        maturity: round_taka(maturity),
        profit: round_taka(profit),
        is_islamic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FD-001: zero principal short-circuits to the zero result
    #[test]
    fn test_zero_principal_returns_zero_result() {
        let result = calculate_fdr(0.0, 8.0, 3.0, false);
        assert_eq!(result.maturity, 0);
        assert_eq!(result.profit, 0);
    }

    /// FD-002: zero rate short-circuits
    #[test]
    fn test_zero_rate_returns_zero_result() {
        let result = calculate_fdr(100_000.0, 0.0, 3.0, false);
        assert_eq!(result.maturity, 0);
    }

    /// FD-003: known three-year maturity
    #[test]
    fn test_three_year_maturity() {
        // 100000 * 1.08^3 = 125971.2
        let result = calculate_fdr(100_000.0, 8.0, 3.0, false);
        assert_eq!(result.maturity, 125_971);
        assert_eq!(result.profit, 25_971);
    }

    /// FD-004: single year is simple growth
    #[test]
    fn test_single_year() {
        let result = calculate_fdr(50_000.0, 10.0, 1.0, false);
        assert_eq!(result.maturity, 55_000);
        assert_eq!(result.profit, 5_000);
    }

    /// FD-005: the Islamic label is a pass-through with no arithmetic effect
    #[test]
    fn test_islamic_label_does_not_change_arithmetic() {
        let conventional = calculate_fdr(100_000.0, 8.0, 3.0, false);
        let islamic = calculate_fdr(100_000.0, 8.0, 3.0, true);

        assert_eq!(conventional.maturity, islamic.maturity);
        assert_eq!(conventional.profit, islamic.profit);
        assert!(!conventional.is_islamic);
        assert!(islamic.is_islamic);
    }

    /// FD-006: the label survives the zero-guard
    #[test]
    fn test_islamic_label_preserved_on_zero_result() {
        let result = calculate_fdr(0.0, 8.0, 3.0, true);
        assert_eq!(result.maturity, 0);
        assert!(result.is_islamic);
    }

    /// FD-007: fractional term compounds fractionally
    #[test]
    fn test_fractional_years() {
        // 100000 * 1.21^0.5 = 110000
        let result = calculate_fdr(100_000.0, 21.0, 0.5, false);
        assert_eq!(result.maturity, 110_000);
    }
}
