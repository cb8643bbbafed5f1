//! # yieldcalc Bonds
//!
//! The bond yield engine.
//!
//! This crate provides:
//!
//! - **Periods**: Coupon period count and per-period coupon amount
//! - **Cash Flows**: Dated per-period schedule with cumulative interest and principal
//! - **Pricing**: Present value at a per-period yield, and its gap to market price
//! - **Yield Solver**: Bisection on the pricing gap with a closed-form fallback
//! - **Calculator**: YTM, current yield, total interest, classification and schedule
//!
//! Everything here is a pure function of its inputs. The payment schedule's
//! start date is always passed in explicitly.
//!
//! ## Example
//!
//! ```rust
//! use yieldcalc_bonds::prelude::*;
//! use yieldcalc_core::types::{BondInput, Date, PriceClassification};
//!
//! let bond = BondInput::new(1000.0, 0.10, 900.0, 5.0, 1);
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//!
//! let result = BondCalculator::new().calculate(&bond, start).unwrap();
//!
//! assert!(result.yield_to_maturity > 0.10);
//! assert_eq!(result.price_classification, PriceClassification::Discount);
//! assert_eq!(result.cash_flows.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod cashflows;
pub mod periods;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::{
        classify_price, current_yield, round_output, total_interest, BondCalculator,
    };
    pub use crate::cashflows::{generate_schedule, payment_date};
    pub use crate::periods::{coupon_per_period, number_of_periods};
    pub use crate::pricing::{
        approximate_yield_to_maturity, present_value, price_difference, SolveMethod,
        YieldResult, YieldSolver,
    };
}

pub use calculator::BondCalculator;
pub use pricing::{YieldResult, YieldSolver};
