//! CLI command implementations.

pub mod calculate;
pub mod schedule;

// Re-export submodules for convenience
pub use calculate::CalculateArgs;
pub use schedule::ScheduleArgs;

use clap::Args;

use yieldcalc_core::types::{BondInput, Date};
use yieldcalc_core::validation::{BondCalculationRequest, ValidationRules};

use crate::error::CliResult;

/// Bond terms shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Face value
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Market price
    #[arg(short, long)]
    pub price: f64,

    /// Years to maturity
    #[arg(short, long)]
    pub years: f64,

    /// Coupon frequency: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly
    #[arg(long, default_value = "2")]
    pub frequency: u32,

    /// First payment date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub start: Option<String>,
}

impl BondArgs {
    /// Builds the raw calculation request.
    pub fn to_request(&self) -> BondCalculationRequest {
        let request = BondCalculationRequest::new(
            self.face,
            self.coupon,
            self.price,
            self.years,
            self.frequency,
        );
        match &self.start {
            Some(start) => request.with_start_date(start.clone()),
            None => request,
        }
    }

    /// Validates the arguments and resolves the start date.
    pub fn resolve(&self) -> CliResult<(BondInput, Date)> {
        let (input, start) = self.to_request().validate(&ValidationRules::default())?;
        Ok((input, start.unwrap_or_else(Date::today)))
    }
}
