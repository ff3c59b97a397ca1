//! Command-line interface definitions.

pub mod commands;
pub mod repl;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::slip::SlipError;
use crate::types::{ArithmeticError, ParlayError};

/// Parlay - combine American odds into a single parlay price.
#[derive(Parser, Debug)]
#[command(name = "parlay")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Defaults to the interactive slip when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a parlay from the given American odds
    Calc(CalcArgs),

    /// Convert decimal odds to American odds
    Convert(ConvertArgs),

    /// Edit a bet slip interactively on stdin
    Slip,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// American odds for each leg, e.g. +150 -200
    #[arg(required = true, allow_negative_numbers = true)]
    pub odds: Vec<String>,

    /// Stake; prints the potential payout when given
    #[arg(short, long)]
    pub wager: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Decimal odds, e.g. 2.5
    #[arg(allow_negative_numbers = true)]
    pub decimal: f64,
}

/// One user-facing message per error kind. `rows` are shown 1-based.
pub fn describe(err: &ParlayError) -> String {
    match err {
        ParlayError::InvalidEntries { indices } => {
            let rows: Vec<String> = indices.iter().map(|i| (i + 1).to_string()).collect();
            format!("One or more odds inputs are invalid (row {}).", rows.join(", "))
        }
        ParlayError::NoValidEntries => "Please enter at least one valid odd.".into(),
        ParlayError::InvalidWager => "Wager must be a number.".into(),
        ParlayError::Arithmetic(e) => describe_arithmetic(e).into(),
    }
}

pub fn describe_arithmetic(err: &ArithmeticError) -> &'static str {
    match err {
        ArithmeticError::DegenerateOdds => {
            "Combined odds pay nothing and have no American equivalent."
        }
        ArithmeticError::UnboundedOdds => "Combined odds are too large to display.",
        ArithmeticError::PayoutOverflow => "Payout is too large to display.",
    }
}

/// Messages for converting a single decimal price given directly by the user.
pub fn describe_conversion(err: &ArithmeticError) -> &'static str {
    match err {
        ArithmeticError::DegenerateOdds => {
            "Decimal odds must be above 1.0 to have an American equivalent."
        }
        ArithmeticError::UnboundedOdds | ArithmeticError::PayoutOverflow => {
            "Decimal odds must be a finite number."
        }
    }
}

pub fn describe_slip(err: &SlipError) -> String {
    match err {
        SlipError::RowOutOfRange { index, len } => {
            format!("Row {} does not exist (slip has {len} rows).", index + 1)
        }
        SlipError::TooManyRows { max } => format!("Slip is full ({max} rows)."),
    }
}
