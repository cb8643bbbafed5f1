//! Bond pricing and yield calculations.
//!
//! This module provides:
//! - [`present_value`]: Price implied by a per-period yield
//! - [`price_difference`]: Gap between that price and the market price
//! - [`YieldSolver`]: Yield-to-maturity solver
//! - [`approximate_yield_to_maturity`]: Closed-form YTM estimate

mod yield_solver;

pub use yield_solver::{
    approximate_yield_to_maturity, SolveMethod, YieldResult, YieldSolver, DEFAULT_LOWER_BOUND,
    DEFAULT_UPPER_BOUND,
};

use yieldcalc_core::types::BondInput;

use crate::periods::{coupon_per_period, number_of_periods};

/// Present value of the bond's cash flows at a per-period yield.
///
/// `Σ coupon / (1 + y)^t` for `t = 1..=N`, plus `face / (1 + y)^N`.
///
/// The result is finite for `y > -1`. At or below `-1` the discount factors
/// blow up and the value may be infinite or NaN.
///
/// # Example
///
/// ```rust
/// use yieldcalc_bonds::pricing::present_value;
/// use yieldcalc_core::types::BondInput;
///
/// let bond = BondInput::new(1000.0, 0.10, 1000.0, 5.0, 1);
/// assert!((present_value(0.10, &bond) - 1000.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn present_value(per_period_yield: f64, input: &BondInput) -> f64 {
    let periods = number_of_periods(input.years_to_maturity, input.frequency);
    let coupon = coupon_per_period(input.face_value, input.coupon_rate, input.frequency);
    let base = 1.0 + per_period_yield;

    let mut pv = 0.0;
    for t in 1..=periods {
        pv += coupon / base.powi(exponent(t));
    }
    pv + input.face_value / base.powi(exponent(periods))
}

/// Period count as a `powi` exponent, saturating instead of wrapping.
fn exponent(period: u32) -> i32 {
    i32::try_from(period).unwrap_or(i32::MAX)
}

/// `present_value(y) - market_price`.
///
/// Strictly decreasing in `y` on `(-1, ∞)` for any bond with positive cash
/// flows, which is what makes it bracketable.
#[must_use]
pub fn price_difference(per_period_yield: f64, input: &BondInput) -> f64 {
    present_value(per_period_yield, input) - input.market_price
}
