//! # yieldcalc Math
//!
//! Numerical utilities for the yieldcalc bond yield calculator.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketed bisection root finding with best-effort termination

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
