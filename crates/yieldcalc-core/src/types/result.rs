//! Calculation output.

use serde::{Deserialize, Serialize};

use super::{CashFlowEntry, PriceClassification};

/// Full set of metrics for one bond calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondYieldResult {
    /// Annualized yield to maturity as a decimal, rounded to 6 places.
    pub yield_to_maturity: f64,
    /// Annual coupon over market price, rounded to 6 places.
    pub current_yield: f64,
    /// Undiscounted coupon interest over the bond's life.
    pub total_interest: f64,
    /// Price relative to face value.
    pub price_classification: PriceClassification,
    /// Per-period schedule, one entry per coupon period.
    pub cash_flows: Vec<CashFlowEntry>,
}
