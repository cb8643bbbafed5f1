//! Schedule command implementation.
//!
//! Prints the coupon payment schedule for a bond.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use yieldcalc_bonds::cashflows::generate_schedule;
use yieldcalc_core::types::CashFlowEntry;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::error::CliError;
use crate::output::{format_amount, print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// One schedule row.
#[derive(Debug, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowRow {
    #[tabled(rename = "Period")]
    pub period_number: u32,
    #[tabled(rename = "Payment Date")]
    pub payment_date: String,
    #[tabled(rename = "Coupon", display_with = "format_amount")]
    pub coupon_payment: f64,
    #[tabled(rename = "Cumulative Interest", display_with = "format_amount")]
    pub cumulative_interest: f64,
    #[tabled(rename = "Remaining Principal", display_with = "format_amount")]
    pub remaining_principal: f64,
}

impl From<&CashFlowEntry> for CashFlowRow {
    fn from(entry: &CashFlowEntry) -> Self {
        Self {
            period_number: entry.period_number,
            payment_date: entry.payment_date.to_string(),
            coupon_payment: entry.coupon_payment,
            cumulative_interest: entry.cumulative_interest,
            remaining_principal: entry.remaining_principal,
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: &ScheduleArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let (input, start) = args.bond.resolve()?;
    let schedule = generate_schedule(&input, start).map_err(CliError::from)?;

    match format {
        OutputFormat::Minimal => {
            for entry in &schedule {
                println!("{}", entry.payment_date);
            }
        }
        _ => {
            if format == OutputFormat::Table && !quiet {
                print_header("Payment Schedule");
            }
            let rows: Vec<CashFlowRow> = schedule.iter().map(CashFlowRow::from).collect();
            print_output(&rows, format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldcalc_core::types::Date;

    #[test]
    fn test_row_from_entry() {
        let entry = CashFlowEntry {
            period_number: 3,
            payment_date: Date::from_ymd(2026, 1, 15).unwrap(),
            coupon_payment: 50.0,
            cumulative_interest: 150.0,
            remaining_principal: 1000.0,
        };

        let row = CashFlowRow::from(&entry);
        assert_eq!(row.period_number, 3);
        assert_eq!(row.payment_date, "2026-01-15");
        assert_eq!(row.cumulative_interest, 150.0);
    }
}
