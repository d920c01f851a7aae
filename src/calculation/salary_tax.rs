//! Progressive salary tax calculation.

use rust_decimal::Decimal;

use crate::config::TaxPolicy;

use super::numeric::round_taka_decimal;

/// Calculates the annual income tax for a monthly salary.
///
/// The salary is annualized (`monthly * 12`); income at or below the
/// policy's exemption is tax-free. Income above it is taxed by walking the
/// policy's slabs in order, each slab taxing at most its `limit` at its
/// rate, with the unbounded top slab absorbing the remainder. The result
/// is rounded to the nearest whole Taka.
///
/// A zero or negative salary always yields zero.
///
/// # Examples
///
/// ```no_run
/// use hishab_engine::calculation::calculate_salary_tax;
/// use hishab_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/bd").unwrap();
/// // 50,000/month -> 600,000/year; 250,000 taxable
/// // = 100,000 @ 5% + 150,000 @ 10% = 20,000
/// let tax = calculate_salary_tax(Decimal::from(50_000), loader.tax());
/// assert_eq!(tax, 20_000);
/// ```
pub fn calculate_salary_tax(monthly_salary: Decimal, policy: &TaxPolicy) -> i64 {
    let annual = monthly_salary * Decimal::from(12);
    if annual <= policy.exemption {
        return 0;
    }

    let mut taxable = annual - policy.exemption;
    let mut tax = Decimal::ZERO;

    for slab in &policy.slabs {
        if taxable <= Decimal::ZERO {
            break;
        }
        let amount_in_slab = match slab.limit {
            Some(limit) => taxable.min(limit),
            None => taxable,
        };
        tax += amount_in_slab * slab.rate;
        taxable -= amount_in_slab;
    }

    round_taka_decimal(tax)
}
