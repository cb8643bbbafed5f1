//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CalculateArgs, ScheduleArgs};

/// yieldcalc - Bond yield calculator
#[derive(Parser)]
#[command(name = "yieldcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "table",
        env = "YIELDCALC_FORMAT",
        global = true
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate yield to maturity, current yield and total interest
    Calculate(CalculateArgs),

    /// Print the coupon payment schedule
    Schedule(ScheduleArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "yieldcalc",
            "--format",
            "json",
            "calculate",
            "--coupon",
            "10",
            "--price",
            "950",
            "--years",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Calculate(args) => {
                assert_eq!(args.bond.face, 1000.0);
                assert_eq!(args.bond.frequency, 2);
                assert!(args.bond.start.is_none());
            }
            Commands::Schedule(_) => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result = Cli::try_parse_from(["yieldcalc", "schedule", "--coupon", "5", "--years", "2"]);
        assert!(result.is_err());
    }
}
