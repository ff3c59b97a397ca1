//! American ⇄ decimal odds conversion.
//!
//! American odds quote profit against a 100 unit reference: `+150` wins 150
//! on a 100 stake, `-200` needs a 200 stake to win 100. Decimal odds are the
//! total return per unit staked.

use tracing::debug;

use crate::types::{AmericanOdds, ArithmeticError, DecimalOdds, OddsSign, ParseError};

/// Decimal odds at which the American quote flips from negative to positive.
const EVEN_MONEY: f64 = 2.0;

impl AmericanOdds {
    /// Parse a raw entry. Whitespace is trimmed; a blank entry is `Ok(None)`.
    ///
    /// The whole trimmed string must parse as a finite number. The sign is
    /// read from the first character rather than from the parsed value.
    pub fn parse(raw: &str) -> Result<Option<Self>, ParseError> {
        let trimmed = raw.trim();
        let Some(first) = trimmed.chars().next() else {
            return Ok(None);
        };

        let value: f64 = trimmed.parse().map_err(|_| ParseError::NotNumeric)?;
        if !value.is_finite() {
            return Err(ParseError::NotNumeric);
        }

        let sign = match first {
            '+' => OddsSign::Positive,
            '-' => OddsSign::Negative,
            _ => OddsSign::Unspecified,
        };

        Ok(Some(Self {
            sign,
            magnitude: value.abs(),
        }))
    }

    /// Decimal multiplier for this quote. Unsigned quotes price as positive.
    ///
    /// A negative quote with zero magnitude yields infinity.
    pub fn to_decimal(&self) -> DecimalOdds {
        match self.sign {
            OddsSign::Positive | OddsSign::Unspecified => DecimalOdds(self.magnitude / 100.0 + 1.0),
            OddsSign::Negative => DecimalOdds(100.0 / self.magnitude + 1.0),
        }
    }
}

/// Parse a raw American entry straight to decimal odds.
///
/// `Ok(None)` means the entry was blank and should be skipped.
pub fn parse_american_to_decimal(raw: &str) -> Result<Option<DecimalOdds>, ParseError> {
    let Some(american) = AmericanOdds::parse(raw)? else {
        return Ok(None);
    };
    let decimal = american.to_decimal();
    debug!(input = raw.trim(), sign = ?american.sign, decimal = decimal.value(), "Parsed odds");
    Ok(Some(decimal))
}

/// Format decimal odds as a signed American quote (`+150`, `-200`).
///
/// Rounds half away from zero. Odds of 1.0 or less and non-finite odds have
/// no American form.
pub fn decimal_to_american(decimal: DecimalOdds) -> Result<String, ArithmeticError> {
    let d = decimal.value();
    if !d.is_finite() {
        return Err(ArithmeticError::UnboundedOdds);
    }
    if d <= 1.0 {
        return Err(ArithmeticError::DegenerateOdds);
    }

    if d >= EVEN_MONEY {
        Ok(format!("+{:.0}", ((d - 1.0) * 100.0).round()))
    } else {
        Ok(format!("{:.0}", (-100.0 / (d - 1.0)).round()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
