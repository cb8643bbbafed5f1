//! Cash flow schedule generation.
//!
//! - [`generate_schedule`]: One entry per coupon period for a bullet bond
//! - [`payment_date`]: Calendar date of a given period

mod schedule;

pub use schedule::{generate_schedule, payment_date};
