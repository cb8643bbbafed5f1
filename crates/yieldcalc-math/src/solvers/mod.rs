//! Root-finding algorithms.
//!
//! - [`bisection`]: Simple and reliable bracketing method
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use yieldcalc_math::solvers::{bisection, SolverConfig};
//!
//! // Bond: 5% annual coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);  // Coupon
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);    // Principal
//!     pv - 95.0
//! };
//!
//! let result = bisection(price_fn, -0.9999, 1.0, &SolverConfig::default()).unwrap();
//! assert!(result.converged);
//! assert!(result.root > 0.05);  // YTM > coupon rate for discount bond
//! ```

mod bisection;

pub use bisection::bisection;

/// Default tolerance on `|f(x)|` for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Convergence threshold on the absolute function value.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found (or the last midpoint when not converged).
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
    /// Whether `|residual|` fell below the tolerance.
    pub converged: bool,
}
