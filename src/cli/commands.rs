//! One-shot `calc` and `convert` commands.
//!
//! Each writes results to `out` and user-facing errors to `err`, and returns
//! whether the command succeeded so the binary can set its exit code.

use anyhow::Result;
use std::io::Write;

use super::{describe, describe_conversion, CalcArgs, ConvertArgs};
use crate::engine::{calculate_parlay, decimal_to_american};
use crate::types::DecimalOdds;

/// Price a parlay from command-line arguments.
///
/// With `--json`, both results and errors go to `out` as JSON
/// (`{"error": ...}` on failure).
pub fn calc<W: Write, E: Write>(
    args: &CalcArgs,
    currency: &str,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    match calculate_parlay(&args.odds, args.wager.as_deref()) {
        Ok(result) => {
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            } else {
                writeln!(out, "{}", result.render(currency))?;
            }
            Ok(true)
        }
        Err(e) => {
            if args.json {
                writeln!(out, "{}", serde_json::json!({ "error": describe(&e) }))?;
            } else {
                writeln!(err, "{}", describe(&e))?;
            }
            Ok(false)
        }
    }
}

/// Print the American quote for a decimal price.
pub fn convert<W: Write, E: Write>(args: &ConvertArgs, out: &mut W, err: &mut E) -> Result<bool> {
    match decimal_to_american(DecimalOdds(args.decimal)) {
        Ok(american) => {
            writeln!(out, "{american}")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(err, "{}", describe_conversion(&e))?;
            Ok(false)
        }
    }
}
