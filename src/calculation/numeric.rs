//! Shared numeric formatting conventions.
//!
//! Several calculators return pre-formatted fixed-decimal strings rather
//! than numbers; downstream display logic renders them verbatim. The
//! helpers here are the single source of those conventions: half-away-from-
//! zero rounding, fixed decimal places, and currency figures rounded to
//! whole Taka with a floor of zero.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a decimal with exactly two decimal places.
pub(crate) fn fmt2(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Formats a decimal with exactly one decimal place.
pub(crate) fn fmt1(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}

/// Rounds a currency figure to the nearest whole Taka, floored at zero.
///
/// Non-finite input collapses to zero so that a malformed calculation can
/// never surface an unrenderable value.
pub(crate) fn round_taka(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.max(0.0).round() as i64
}

/// Rounds a decimal currency figure to the nearest whole Taka, floored at
/// zero.
pub(crate) fn round_taka_decimal(value: Decimal) -> i64 {
    value
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}
