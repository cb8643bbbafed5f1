//! Domain types for yieldcalc.

mod bond;
mod cashflow;
mod date;
mod result;

pub use bond::{BondInput, PriceClassification};
pub use cashflow::CashFlowEntry;
pub use date::Date;
pub use result::BondYieldResult;
