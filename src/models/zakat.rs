//! Asset ledger model for Zakat assessment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The asset and liability ledger supplied to a Zakat assessment.
///
/// Every field is optional; absent fields are treated as zero. The nisab
/// value is caller-supplied (typically derived from the current silver
/// price) rather than fetched.
///
/// # Example
///
/// ```
/// use hishab_engine::models::AssetLedger;
/// use rust_decimal::Decimal;
///
/// let ledger = AssetLedger {
///     cash_hand: Some(Decimal::from(200000)),
///     nisab_value: Some(Decimal::from(110000)),
///     ..AssetLedger::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLedger {
    /// Cash held in hand.
    #[serde(default)]
    pub cash_hand: Option<Decimal>,
    /// Cash held in bank accounts.
    #[serde(default)]
    pub cash_bank: Option<Decimal>,
    /// Market value of gold owned.
    #[serde(default)]
    pub gold_value: Option<Decimal>,
    /// Market value of silver owned.
    #[serde(default)]
    pub silver_value: Option<Decimal>,
    /// Value of shares, savings certificates, and other investments.
    #[serde(default)]
    pub investment_value: Option<Decimal>,
    /// Value of trade goods held for business.
    #[serde(default)]
    pub business_goods: Option<Decimal>,
    /// Money owed to the assessee that is expected to be recovered.
    #[serde(default)]
    pub debts_receivable: Option<Decimal>,
    /// Short-term debts and dues owed by the assessee.
    #[serde(default)]
    pub liabilities: Option<Decimal>,
    /// The nisab threshold to compare net wealth against.
    #[serde(default)]
    pub nisab_value: Option<Decimal>,
}
