//! High-level bond metrics.
//!
//! [`BondCalculator`] combines the yield solver, the cash-flow schedule and a
//! handful of closed-form metrics into a single [`BondYieldResult`].

use yieldcalc_core::error::CoreResult;
use yieldcalc_core::types::{BondInput, BondYieldResult, Date, PriceClassification};

use crate::cashflows::generate_schedule;
use crate::pricing::YieldSolver;

/// Decimal places kept in reported yields.
const OUTPUT_SCALE: f64 = 1e6;

/// Rounds a reported yield to 6 decimal places (halves away from zero).
#[must_use]
pub fn round_output(value: f64) -> f64 {
    (value * OUTPUT_SCALE).round() / OUTPUT_SCALE
}

/// Classifies the market price against face value.
///
/// The comparison is exact: a price one cent away from face is not par.
#[must_use]
pub fn classify_price(face_value: f64, market_price: f64) -> PriceClassification {
    if market_price > face_value {
        PriceClassification::Premium
    } else if market_price < face_value {
        PriceClassification::Discount
    } else {
        PriceClassification::Par
    }
}

/// Current yield: annual coupon divided by market price.
///
/// Returns 0 for a non-positive price.
#[must_use]
pub fn current_yield(input: &BondInput) -> f64 {
    if input.market_price <= 0.0 {
        return 0.0;
    }
    input.annual_coupon() / input.market_price
}

/// Total coupon interest over the bond's life: `face * rate * years`.
///
/// This uses the exact term, so it can differ from the schedule's final
/// cumulative interest when `years * frequency` is not a whole number.
#[must_use]
pub fn total_interest(input: &BondInput) -> f64 {
    input.annual_coupon() * input.years_to_maturity
}

/// Computes the full set of metrics for a bond.
///
/// # Example
///
/// ```rust
/// use yieldcalc_bonds::BondCalculator;
/// use yieldcalc_core::types::{BondInput, Date, PriceClassification};
///
/// let bond = BondInput::new(1000.0, 0.10, 1000.0, 5.0, 1);
/// let start = Date::from_ymd(2025, 1, 15).unwrap();
///
/// let result = BondCalculator::new().calculate(&bond, start).unwrap();
/// assert_eq!(result.yield_to_maturity, 0.1);
/// assert_eq!(result.price_classification, PriceClassification::Par);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BondCalculator {
    solver: YieldSolver,
}

impl BondCalculator {
    /// Creates a calculator with the default yield solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom yield solver.
    #[must_use]
    pub fn with_solver(mut self, solver: YieldSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Returns the yield solver.
    #[must_use]
    pub fn solver(&self) -> &YieldSolver {
        &self.solver
    }

    /// Calculates yield metrics and the payment schedule starting at `start_date`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if a payment date overflows the calendar.
    pub fn calculate(&self, input: &BondInput, start_date: Date) -> CoreResult<BondYieldResult> {
        let solved = self.solver.solve(input);
        let cash_flows = generate_schedule(input, start_date)?;

        log::trace!(
            "calculated bond: ytm={} via {:?} after {} iterations, {} cash flows",
            solved.yield_value,
            solved.method,
            solved.iterations,
            cash_flows.len()
        );

        Ok(BondYieldResult {
            yield_to_maturity: round_output(solved.yield_value),
            current_yield: round_output(current_yield(input)),
            total_interest: total_interest(input),
            price_classification: classify_price(input.face_value, input.market_price),
            cash_flows,
        })
    }

    /// Calculates with today's local date as the start date.
    pub fn calculate_today(&self, input: &BondInput) -> CoreResult<BondYieldResult> {
        self.calculate(input, Date::today())
    }
}
