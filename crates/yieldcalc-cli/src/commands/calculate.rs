//! Calculate command implementation.
//!
//! Computes yield to maturity, current yield, total interest and price
//! classification for a bond.

use anyhow::Result;
use clap::Args;

use yieldcalc_bonds::BondCalculator;
use yieldcalc_core::types::{BondInput, BondYieldResult, Date};

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::error::CliError;
use crate::output::{print_header, print_json_value, print_output, KeyValue};

/// Arguments for the calculate command.
#[derive(Args, Debug)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub bond: BondArgs,
}

/// Execute the calculate command.
pub fn execute(args: &CalculateArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let (input, start) = args.bond.resolve()?;

    let result = BondCalculator::new()
        .calculate(&input, start)
        .map_err(CliError::from)?;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Bond Yield Results");
            }
            print_output(&summary_rows(&input, start, &result), format)?;
        }
        OutputFormat::Json => print_json_value(&result)?,
        OutputFormat::Csv => print_output(&summary_rows(&input, start, &result), format)?,
        OutputFormat::Minimal => println!("{}", result.yield_to_maturity),
    }

    Ok(())
}

/// Metric rows for table and CSV output.
fn summary_rows(input: &BondInput, start: Date, result: &BondYieldResult) -> Vec<KeyValue> {
    vec![
        KeyValue::from_amount("Face Value", input.face_value),
        KeyValue::from_percent("Coupon Rate", input.coupon_rate),
        KeyValue::from_amount("Market Price", input.market_price),
        KeyValue::new("Years to Maturity", input.years_to_maturity.to_string()),
        KeyValue::new("Frequency", input.frequency.to_string()),
        KeyValue::new("Start Date", start.to_string()),
        KeyValue::from_percent("Yield to Maturity", result.yield_to_maturity),
        KeyValue::from_percent("Current Yield", result.current_yield),
        KeyValue::from_amount("Total Interest", result.total_interest),
        KeyValue::new("Classification", result.price_classification.to_string()),
        KeyValue::new("Payments", result.cash_flows.len().to_string()),
    ]
}
