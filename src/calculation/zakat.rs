//! Zakat assessment against the nisab threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AssetLedger;

/// Returns the Zakat rate (2.5% of net wealth).
pub fn zakat_rate() -> Decimal {
    Decimal::new(25, 3)
}

/// The result of a Zakat assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatAssessment {
    /// Whether net wealth meets or exceeds the nisab threshold.
    pub is_zakat_eligible: bool,
    /// The sum of all asset fields.
    pub total_assets: Decimal,
    /// Total assets minus liabilities.
    pub net_wealth: Decimal,
    /// The Zakat due: 2.5% of net wealth when eligible, otherwise zero.
    pub zakat_payable: Decimal,
}

/// Assesses a ledger of assets and liabilities for Zakat.
///
/// All ledger fields default to zero when absent. Net wealth below the
/// nisab threshold is not eligible: Zakat is zero and the totals are
/// reported exactly as computed, including a negative net wealth. When
/// eligible, Zakat is 2.5% of net wealth, and the reported net wealth,
/// payable, and total assets are floored at zero for display. The clamping
/// asymmetry between the two branches is a preserved contract.
///
/// # Examples
///
/// ```
/// use hishab_engine::calculation::assess_zakat;
/// use hishab_engine::models::AssetLedger;
/// use rust_decimal::Decimal;
///
/// let ledger = AssetLedger {
///     cash_hand: Some(Decimal::from(200_000)),
///     nisab_value: Some(Decimal::from(110_000)),
///     ..AssetLedger::default()
/// };
/// let assessment = assess_zakat(&ledger);
/// assert!(assessment.is_zakat_eligible);
/// assert_eq!(assessment.zakat_payable, Decimal::from(5_000));
/// ```
pub fn assess_zakat(ledger: &AssetLedger) -> ZakatAssessment {
    let field = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);

    let total_assets = field(ledger.cash_hand)
        + field(ledger.cash_bank)
        + field(ledger.gold_value)
        + field(ledger.silver_value)
        + field(ledger.investment_value)
        + field(ledger.business_goods)
        + field(ledger.debts_receivable);

    let net_wealth = total_assets - field(ledger.liabilities);
    let nisab = field(ledger.nisab_value);

    if net_wealth < nisab {
        return ZakatAssessment {
            is_zakat_eligible: false,
            total_assets,
            net_wealth,
            zakat_payable: Decimal::ZERO,
        };
    }

    let zakat_payable = net_wealth * zakat_rate();

    ZakatAssessment {
        is_zakat_eligible: true,
        total_assets: total_assets.max(Decimal::ZERO),
        net_wealth: net_wealth.max(Decimal::ZERO),
        zakat_payable: zakat_payable.max(Decimal::ZERO),
    }
}
