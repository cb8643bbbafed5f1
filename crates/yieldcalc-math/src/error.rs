//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The objective evaluated to NaN.
    #[error("Function is not a number at x = {x}")]
    NotANumber {
        /// The point where evaluation failed.
        x: f64,
    },
}

impl MathError {
    /// Creates a not-a-number error.
    #[must_use]
    pub fn not_a_number(x: f64) -> Self {
        Self::NotANumber { x }
    }
}
