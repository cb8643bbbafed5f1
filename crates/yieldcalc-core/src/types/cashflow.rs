//! Per-period cash flow record.

use serde::{Deserialize, Serialize};

use super::Date;

/// One coupon period of a bullet bond's cash-flow schedule.
///
/// `remaining_principal` equals the face value for every period except the
/// last, where the principal is repaid and it drops to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowEntry {
    /// 1-based period index.
    pub period_number: u32,
    /// Scheduled payment date.
    pub payment_date: Date,
    /// Coupon paid this period.
    pub coupon_payment: f64,
    /// Sum of coupons paid up to and including this period.
    pub cumulative_interest: f64,
    /// Principal still outstanding after this period.
    pub remaining_principal: f64,
}

impl CashFlowEntry {
    /// Returns true if this is the maturity period.
    #[must_use]
    pub fn is_final(&self) -> bool {
        self.remaining_principal == 0.0
    }
}
