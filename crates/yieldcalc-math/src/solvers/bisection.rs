//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the interval and keeps the half whose endpoints still
/// straddle a sign change. Iteration stops as soon as `|f(mid)|` drops below
/// `config.tolerance`.
///
/// Requires: `f(a)` and `f(b)` not of the same strict sign. An endpoint value of
/// exactly zero counts as a sign change.
///
/// If `config.max_iterations` is exhausted the last midpoint is returned with
/// `converged == false` rather than an error. For a continuous function on a
/// valid bracket the interval width is then `(b - a) / 2^max_iterations`.
///
/// # Errors
///
/// - [`MathError::NotANumber`] if either endpoint evaluates to NaN
/// - [`MathError::InvalidBracket`] if both endpoint values share a sign
///
/// # Example
///
/// ```rust
/// use yieldcalc_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-7);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo.is_nan() {
        return Err(MathError::not_a_number(lo));
    }
    if f_hi.is_nan() {
        return Err(MathError::not_a_number(hi));
    }

    // Check that root is bracketed
    if same_sign(f_lo, f_hi) {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut mid = (lo + hi) / 2.0;
    let mut f_mid = f64::NAN;

    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / 2.0;
        f_mid = f(mid);

        if f_mid.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
                converged: true,
            });
        }

        // Replace the bound that shares the midpoint's sign
        if same_sign(f_mid, f_lo) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    log::debug!(
        "bisection hit {} iterations without convergence (residual {:.3e})",
        config.max_iterations,
        f_mid
    );

    Ok(SolverResult {
        root: mid,
        iterations: config.max_iterations,
        residual: f_mid,
        converged: false,
    })
}

/// Strict sign agreement. Infinities carry their sign; zero matches nothing.
fn same_sign(x: f64, y: f64) -> bool {
    (x > 0.0 && y > 0.0) || (x < 0.0 && y < 0.0)
}
