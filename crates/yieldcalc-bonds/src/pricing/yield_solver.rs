//! Yield-to-maturity solver.
//!
//! The per-period yield is found by bisecting [`price_difference`] over a
//! fixed bracket, then annualized by multiplying by the coupon frequency.
//! When the bracket does not contain a sign change (or the pricing function is
//! not a number at one of its ends) the solver answers with the closed-form
//! [`approximate_yield_to_maturity`] instead of failing.
//!
//! # Example
//!
//! ```rust
//! use yieldcalc_bonds::pricing::{SolveMethod, YieldSolver};
//! use yieldcalc_core::types::BondInput;
//!
//! let bond = BondInput::new(1000.0, 0.10, 1100.0, 5.0, 2);
//! let result = YieldSolver::new().solve(&bond);
//!
//! assert_eq!(result.method, SolveMethod::Bisection);
//! assert!(result.yield_value < 0.10);
//! ```

use yieldcalc_core::types::BondInput;
use yieldcalc_math::solvers::{bisection, SolverConfig};

use super::price_difference;

/// Lower end of the per-period yield bracket (-99.99%).
pub const DEFAULT_LOWER_BOUND: f64 = -0.9999;

/// Upper end of the per-period yield bracket (100%).
pub const DEFAULT_UPPER_BOUND: f64 = 1.0;

/// How a yield was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveMethod {
    /// Bisection on the pricing function.
    Bisection,
    /// Closed-form approximation used when bisection is not possible.
    Approximation,
}

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy)]
pub struct YieldResult {
    /// The annualized yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of bisection iterations (0 for the approximation).
    pub iterations: u32,
    /// Price difference at the returned per-period yield (NaN for the approximation).
    pub residual: f64,
    /// Whether bisection met its tolerance.
    pub converged: bool,
    /// Method that produced the yield.
    pub method: SolveMethod,
}

impl YieldResult {
    fn approximation(input: &BondInput) -> Self {
        Self {
            yield_value: approximate_yield_to_maturity(input),
            iterations: 0,
            residual: f64::NAN,
            converged: false,
            method: SolveMethod::Approximation,
        }
    }
}

/// Yield-to-maturity solver.
///
/// Stateless apart from its settings; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    /// Solver configuration.
    config: SolverConfig,
    /// Lowest per-period yield searched.
    lower_bound: f64,
    /// Highest per-period yield searched.
    upper_bound: f64,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    ///
    /// Default bracket: [-0.9999, 1.0] per period
    /// Default tolerance: 1e-7
    /// Default max iterations: 100
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Sets the per-period yield bracket.
    ///
    /// Discount factors are undefined at a per-period yield of -1, so a lower
    /// bound at or below -1 (or NaN) is replaced by [`DEFAULT_LOWER_BOUND`].
    #[must_use]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = if lower_bound > -1.0 {
            lower_bound
        } else {
            log::debug!("lower bound {lower_bound} is not above -1, using {DEFAULT_LOWER_BOUND}");
            DEFAULT_LOWER_BOUND
        };
        self.upper_bound = upper_bound;
        self
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Returns the per-period yield bracket as `(lower, upper)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.upper_bound)
    }

    /// Solves for the annualized yield to maturity.
    ///
    /// Never fails: if bisection cannot run, the approximation is returned and
    /// `method` is [`SolveMethod::Approximation`]. If bisection runs out of
    /// iterations, the last midpoint is used and `converged` is `false`.
    #[must_use]
    pub fn solve(&self, input: &BondInput) -> YieldResult {
        let objective = |y: f64| price_difference(y, input);

        let solved = match bisection(objective, self.lower_bound, self.upper_bound, &self.config) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("yield not bracketed, using approximation: {e}");
                return YieldResult::approximation(input);
            }
        };

        if !solved.root.is_finite() {
            log::debug!("bisection root {} is not finite, using approximation", solved.root);
            return YieldResult::approximation(input);
        }

        if !solved.converged {
            log::debug!(
                "yield solver stopped after {} iterations with residual {:.3e}",
                solved.iterations,
                solved.residual
            );
        }

        YieldResult {
            yield_value: solved.root * f64::from(input.frequency),
            iterations: solved.iterations,
            residual: solved.residual,
            converged: solved.converged,
            method: SolveMethod::Bisection,
        }
    }
}

/// Closed-form approximation of the annual yield to maturity.
///
/// `(C + (F - P) / T) / ((F + P) / 2)` where `C` is the annual coupon, `F` the
/// face value, `P` the market price and `T` the years to maturity. The result
/// is already annual. Returns 0 when the average of face and price is not
/// positive.
///
/// # Example
///
/// ```rust
/// use yieldcalc_bonds::pricing::approximate_yield_to_maturity;
/// use yieldcalc_core::types::BondInput;
///
/// let bond = BondInput::new(1000.0, 0.10, 900.0, 5.0, 1);
/// // (100 + 20) / 950
/// assert!((approximate_yield_to_maturity(&bond) - 0.126316).abs() < 1e-6);
/// ```
#[must_use]
pub fn approximate_yield_to_maturity(input: &BondInput) -> f64 {
    let average_price = (input.face_value + input.market_price) / 2.0;
    if average_price <= 0.0 {
        return 0.0;
    }

    let amortized_discount = (input.face_value - input.market_price) / input.years_to_maturity;
    (input.annual_coupon() + amortized_discount) / average_price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::present_value;
    use approx::assert_relative_eq;

    #[test]
    fn test_par_bond_yields_coupon() {
        let bond = BondInput::new(1000.0, 0.10, 1000.0, 5.0, 1);
        let result = YieldSolver::new().solve(&bond);

        assert_eq!(result.method, SolveMethod::Bisection);
        assert!(result.converged);
        assert_relative_eq!(result.yield_value, 0.10, epsilon = 1e-6);
    }

    #[test]
    fn test_semi_annual_result_is_annualized() {
        let bond = BondInput::new(1000.0, 0.08, 1000.0, 10.0, 2);
        let result = YieldSolver::new().solve(&bond);

        assert!(result.converged);
        assert_relative_eq!(result.yield_value, 0.08, epsilon = 1e-6);
    }

    #[test]
    fn test_discount_and_premium() {
        let solver = YieldSolver::new();

        let discount = solver.solve(&BondInput::new(1000.0, 0.10, 900.0, 5.0, 1));
        assert!(discount.yield_value > 0.10);

        let premium = solver.solve(&BondInput::new(1000.0, 0.10, 1100.0, 5.0, 2));
        assert!(premium.yield_value < 0.10);
    }

    #[test]
    fn test_residual_within_tolerance() {
        let bond = BondInput::new(1000.0, 0.045, 1023.5, 12.0, 4);
        let result = YieldSolver::new().solve(&bond);

        assert!(result.converged);
        assert!(result.residual.abs() < 1e-7);
        let repriced = present_value(result.yield_value / 4.0, &bond);
        assert_relative_eq!(repriced, 1023.5, epsilon = 1e-6);
    }

    #[test]
    fn test_no_sign_change_falls_back() {
        // Price so low that even a 100% per-period yield overprices the bond
        let bond = BondInput::new(1000.0, 0.0, 0.001, 1.0, 1);
        let result = YieldSolver::new().solve(&bond);

        assert_eq!(result.method, SolveMethod::Approximation);
        assert!(!result.converged);
        assert_eq!(result.iterations, 0);
        assert!(result.residual.is_nan());
        assert_relative_eq!(result.yield_value, 1.999_996, epsilon = 1e-6);
    }

    #[test]
    fn test_nan_at_lower_bound_falls_back() {
        // Zero coupons over many periods evaluate to 0/0 near y = -1
        let bond = BondInput::new(1000.0, 0.0, 500.0, 10.0, 12);
        let result = YieldSolver::new().solve(&bond);

        assert_eq!(result.method, SolveMethod::Approximation);
        assert_relative_eq!(result.yield_value, 50.0 / 750.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_approximation() {
        let bond = BondInput::new(100.0, 0.0, 1e9, 1.0, 1);
        let result = YieldSolver::new().solve(&bond);

        assert_eq!(result.method, SolveMethod::Approximation);
        assert!(result.yield_value < 0.0);
        assert_relative_eq!(result.yield_value, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_iteration_cap_returns_last_midpoint() {
        let bond = BondInput::new(1000.0, 0.10, 900.0, 5.0, 1);
        let result = YieldSolver::new().with_max_iterations(3).solve(&bond);

        assert_eq!(result.method, SolveMethod::Bisection);
        assert!(!result.converged);
        assert_eq!(result.iterations, 3);
        // Midpoints: 0.00005, 0.500025, 0.2500375
        assert_relative_eq!(result.yield_value, 0.250_037_5, epsilon = 1e-12);
    }

    #[test]
    fn test_narrow_bounds_without_root() {
        let bond = BondInput::new(1000.0, 0.10, 900.0, 5.0, 1);
        let result = YieldSolver::new().with_bounds(0.0, 0.05).solve(&bond);

        assert_eq!(result.method, SolveMethod::Approximation);
        assert_relative_eq!(result.yield_value, 120.0 / 950.0, epsilon = 1e-12);
    }

    #[test]
    fn test_builder_settings() {
        let solver = YieldSolver::new()
            .with_tolerance(1e-9)
            .with_max_iterations(200)
            .with_bounds(-0.5, 0.5);

        assert_eq!(solver.config(), SolverConfig::new(1e-9, 200));
        assert_eq!(solver.bounds(), (-0.5, 0.5));
        assert_eq!(YieldSolver::default(), YieldSolver::new());
    }

    #[test]
    fn test_lower_bound_kept_above_minus_one() {
        let bond = BondInput::new(1000.0, 0.10, 900.0, 4.0, 1);
        let expected = YieldSolver::new().solve(&bond);

        for lower in [-1.0, -1.5, -3.0, f64::NAN] {
            let solver = YieldSolver::new().with_bounds(lower, 1.0);
            assert_eq!(solver.bounds(), (DEFAULT_LOWER_BOUND, 1.0));

            let result = solver.solve(&bond);
            assert_eq!(result.method, SolveMethod::Bisection);
            assert_eq!(result.yield_value, expected.yield_value);
        }
    }

    #[test]
    fn test_approximation_non_positive_average() {
        let bond = BondInput::new(-100.0, 0.05, 50.0, 5.0, 1);
        assert_eq!(approximate_yield_to_maturity(&bond), 0.0);
    }
}
