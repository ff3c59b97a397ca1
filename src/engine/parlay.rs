//! Parlay aggregation.
//!
//! Combines every filled row into one price: the parlay's decimal odds are
//! the product of each leg's decimal odds.

use tracing::{debug, warn};

use super::convert::{decimal_to_american, parse_american_to_decimal};
use crate::types::{ArithmeticError, DecimalOdds, ParlayError, ParlayResult};

/// Combine raw American odds rows into a parlay price, with an optional
/// payout for `raw_wager`.
///
/// Blank rows are skipped. Any row that fails to parse fails the whole call
/// with the indices of every bad row; there is no partial result. A blank or
/// missing wager means no payout, while a wager that is present but not a
/// finite number is an error.
pub fn calculate_parlay<S: AsRef<str>>(
    raw_odds: &[S],
    raw_wager: Option<&str>,
) -> Result<ParlayResult, ParlayError> {
    let mut legs: Vec<DecimalOdds> = Vec::with_capacity(raw_odds.len());
    let mut invalid = Vec::new();

    for (index, raw) in raw_odds.iter().enumerate() {
        match parse_american_to_decimal(raw.as_ref()) {
            Ok(Some(decimal)) => legs.push(decimal),
            Ok(None) => {}
            Err(e) => {
                warn!(row = index, input = raw.as_ref(), error = %e, "Rejected odds entry");
                invalid.push(index);
            }
        }
    }

    if !invalid.is_empty() {
        return Err(ParlayError::InvalidEntries { indices: invalid });
    }
    if legs.is_empty() {
        return Err(ParlayError::NoValidEntries);
    }

    let combined_decimal: f64 = legs.iter().map(DecimalOdds::value).product();
    let combined_american = decimal_to_american(DecimalOdds(combined_decimal))?;

    let payout = match parse_wager(raw_wager)? {
        Some(wager) => {
            let payout = combined_decimal * wager;
            if !payout.is_finite() {
                return Err(ArithmeticError::PayoutOverflow.into());
            }
            Some(payout)
        }
        None => None,
    };

    debug!(
        legs = legs.len(),
        decimal = format!("{combined_decimal:.4}"),
        american = %combined_american,
        payout = ?payout,
        "Parlay calculated"
    );

    Ok(ParlayResult {
        combined_american,
        combined_decimal,
        payout,
        legs: legs.len(),
    })
}

/// Read an optional wager. Blank or missing is `Ok(None)`; anything else
/// must parse as a finite number.
pub fn parse_wager(raw: Option<&str>) -> Result<Option<f64>, ParlayError> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => {
            warn!(input = trimmed, "Rejected wager");
            Err(ParlayError::InvalidWager)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
