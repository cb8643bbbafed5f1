//! yieldcalc CLI - Command-line interface for bond yield calculations.
//!
//! # Usage
//!
//! ```bash
//! # Yield metrics for a bond
//! yieldcalc calculate --face 1000 --coupon 10 --price 950 --years 5 --frequency 2
//!
//! # Payment schedule from a given start date
//! yieldcalc schedule --face 1000 --coupon 10 --price 950 --years 5 --start 2025-01-15
//!
//! # Machine-readable output
//! yieldcalc --format json calculate --coupon 5 --price 980 --years 10
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Calculate(args) => commands::calculate::execute(&args, format, cli.quiet)?,
        Commands::Schedule(args) => commands::schedule::execute(&args, format, cli.quiet)?,
    }

    Ok(())
}
