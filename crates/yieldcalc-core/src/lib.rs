//! # yieldcalc Core
//!
//! Core types and the input boundary for the yieldcalc bond yield calculator.
//!
//! This crate provides:
//!
//! - **Types**: `BondInput`, `CashFlowEntry`, `PriceClassification`, `BondYieldResult`
//! - **Dates**: A `Date` newtype with calendar-month arithmetic for payment schedules
//! - **Validation**: Conversion of raw requests (percentage coupons) into engine inputs
//!
//! ## Example
//!
//! ```rust
//! use yieldcalc_core::prelude::*;
//!
//! let request = BondCalculationRequest::new(1000.0, 5.0, 980.0, 10.0, 2);
//!
//! let (input, start) = request.validate(&ValidationRules::default()).unwrap();
//! assert!((input.coupon_rate - 0.05).abs() < 1e-12);
//! assert!(start.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BondInput, BondYieldResult, CashFlowEntry, Date, PriceClassification};
    pub use crate::validation::{
        BondCalculationRequest, ValidationError, ValidationRules, DEFAULT_ALLOWED_FREQUENCIES,
        DEFAULT_MAX_PERIODS,
    };
}

pub use error::{CoreError, CoreResult};
pub use types::{BondInput, BondYieldResult, CashFlowEntry, Date, PriceClassification};
