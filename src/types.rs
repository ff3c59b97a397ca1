//! Shared types for the PARLAY calculator.
//!
//! These types form the data model used across the engine, the bet slip,
//! and the command-line front end.

use rust_decimal::prelude::*;
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Odds
// ---------------------------------------------------------------------------

/// Sign written in front of an American odds entry.
///
/// The sign is taken from the literal first character of the input, not from
/// the parsed value, so `"100"` is `Unspecified` and priced like `"+100"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OddsSign {
    Positive,
    Negative,
    Unspecified,
}

impl fmt::Display for OddsSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsSign::Positive => write!(f, "+"),
            OddsSign::Negative => write!(f, "-"),
            OddsSign::Unspecified => Ok(()),
        }
    }
}

/// A parsed American odds entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmericanOdds {
    pub sign: OddsSign,
    /// Absolute value of the entered number.
    pub magnitude: f64,
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.magnitude)
    }
}

/// Payout multiplier per unit staked, stake included.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DecimalOdds(pub f64);

impl DecimalOdds {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for DecimalOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Parlay result
// ---------------------------------------------------------------------------

/// Combined odds for every filled leg of a parlay, plus the payout when a
/// wager was supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParlayResult {
    /// Signed integer American odds, e.g. `+275` or `-120`.
    #[serde(rename = "american")]
    pub combined_american: String,
    #[serde(rename = "decimal")]
    pub combined_decimal: f64,
    /// Total return (stake included). `None` when no wager was entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout: Option<f64>,
    /// Number of non-empty legs that went into the product.
    pub legs: usize,
}

impl ParlayResult {
    /// Payout rounded to cents, half away from zero.
    ///
    /// Returns `None` when there is no payout or it exceeds `Decimal` range.
    pub fn payout_cents(&self) -> Option<Decimal> {
        self.payout
            .and_then(Decimal::from_f64)
            .map(|p| p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Human-readable summary using the given currency symbol.
    pub fn render(&self, currency: &str) -> String {
        let mut out = format!("Parlay Odds: {}", self.combined_american);
        if let Some(payout) = self.payout {
            let amount = match self.payout_cents() {
                Some(cents) => format!("{cents:.2}"),
                None => format!("{payout:.2}"),
            };
            out.push_str(&format!("\nPotential Payout: {currency}{amount}"));
        }
        out
    }
}

impl fmt::Display for ParlayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render("$"))
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Failure to read a single odds entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("odds entry is not a number")]
    NotNumeric,
}

/// Decimal odds that have no American equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// Decimal odds at or below 1.0 (no profit, or a loss, on a win).
    #[error("decimal odds at or below 1.0 have no American equivalent")]
    DegenerateOdds,

    /// Decimal odds overflowed to infinity (e.g. a `-0` leg).
    #[error("decimal odds are unbounded")]
    UnboundedOdds,

    /// Wager times combined odds overflowed.
    #[error("payout overflowed")]
    PayoutOverflow,
}

/// Terminal outcome of a parlay calculation. No partial result accompanies
/// any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParlayError {
    /// Zero-based indices of the rows that failed to parse.
    #[error("invalid odds entries at rows {indices:?}")]
    InvalidEntries { indices: Vec<usize> },

    #[error("no odds entries to combine")]
    NoValidEntries,

    #[error("wager is not a finite number")]
    InvalidWager,

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
