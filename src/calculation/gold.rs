//! Purity-adjusted gold valuation.

use rust_decimal::Decimal;

use super::numeric::round_taka_decimal;

/// Returns the purity factor for a karat rating.
///
/// Standard local fineness factors: 24k is pure, 22k is 0.916, 21k is
/// 0.875, 18k is 0.75. Any other karat value falls back to full purity;
/// this matches the original behaviour, though the fallback is likely
/// unintended for genuinely unrecognized karats.
pub fn purity_factor(karat: u32) -> Decimal {
    match karat {
        22 => Decimal::new(916, 3),
        21 => Decimal::new(875, 3),
        18 => Decimal::new(75, 2),
        _ => Decimal::ONE,
    }
}

/// Values a quantity of gold against a 24k reference price.
///
/// Returns 0 when the price or quantity is missing or not positive.
/// Otherwise the per-gram price is scaled by the karat's purity factor and
/// multiplied by the weight, rounded to the nearest whole Taka and floored
/// at zero.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::gold_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(gold_value(Decimal::from(7000), Decimal::from(10), 22), 64_120);
/// ```
pub fn gold_value(price_24k: Decimal, grams: Decimal, karat: u32) -> i64 {
    if price_24k <= Decimal::ZERO || grams <= Decimal::ZERO {
        return 0;
    }

    let adjusted_price = price_24k * purity_factor(karat);
    round_taka_decimal(adjusted_price * grams)
}
