//! CLI error types.

use thiserror::Error;

use yieldcalc_core::error::CoreError;
use yieldcalc_core::validation::ValidationError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Inputs failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] CoreError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
