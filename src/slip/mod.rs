//! Bet slip — the editable list of odds rows behind the calculator.
//!
//! The slip owns the rows, the wager text, and the last successful result.
//! Calculation hands a snapshot of the rows to the engine; the engine never
//! sees or mutates the slip itself.

use tracing::debug;

use crate::config::SlipConfig;
use crate::engine::calculate_parlay;
use crate::types::{ParlayError, ParlayResult};

/// Errors from editing the slip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlipError {
    #[error("row {index} does not exist (slip has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("slip is full ({max} rows)")]
    TooManyRows { max: usize },
}

#[derive(Debug, Clone)]
pub struct BetSlip {
    rows: Vec<String>,
    wager: Option<String>,
    result: Option<ParlayResult>,
    initial_rows: usize,
    max_rows: usize,
}

impl BetSlip {
    /// Create a slip with `config.initial_rows` blank rows (at least one).
    pub fn new(config: &SlipConfig) -> Self {
        let max_rows = config.max_rows.max(1);
        let initial_rows = config.initial_rows.clamp(1, max_rows);
        Self {
            rows: vec![String::new(); initial_rows],
            wager: None,
            result: None,
            initial_rows,
            max_rows,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn wager(&self) -> Option<&str> {
        self.wager.as_deref()
    }

    /// Last successful calculation, if the most recent one succeeded.
    pub fn result(&self) -> Option<&ParlayResult> {
        self.result.as_ref()
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Append a blank row and return its index.
    pub fn add_row(&mut self) -> Result<usize, SlipError> {
        self.add_row_with(String::new())
    }

    /// Append a row holding `value` and return its index.
    pub fn add_row_with(&mut self, value: impl Into<String>) -> Result<usize, SlipError> {
        if self.rows.len() >= self.max_rows {
            return Err(SlipError::TooManyRows { max: self.max_rows });
        }
        self.rows.push(value.into());
        debug!(rows = self.rows.len(), "Row added");
        Ok(self.rows.len() - 1)
    }

    /// Replace the text of row `index`.
    pub fn set_row(&mut self, index: usize, value: impl Into<String>) -> Result<(), SlipError> {
        let len = self.rows.len();
        let row = self
            .rows
            .get_mut(index)
            .ok_or(SlipError::RowOutOfRange { index, len })?;
        *row = value.into();
        Ok(())
    }

    /// Remove row `index`. The slip may end up with no rows at all.
    pub fn remove_row(&mut self, index: usize) -> Result<String, SlipError> {
        if index >= self.rows.len() {
            return Err(SlipError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let removed = self.rows.remove(index);
        debug!(index, rows = self.rows.len(), "Row removed");
        Ok(removed)
    }

    pub fn set_wager(&mut self, value: impl Into<String>) {
        self.wager = Some(value.into());
    }

    pub fn clear_wager(&mut self) {
        self.wager = None;
    }

    /// Back to a fresh slip: blank rows, no wager, no result.
    pub fn reset(&mut self) {
        self.rows = vec![String::new(); self.initial_rows];
        self.wager = None;
        self.result = None;
        debug!("Slip reset");
    }

    /// Price the current rows and wager.
    ///
    /// On success the result is stored; on any error the stored result is
    /// cleared so a stale price is never shown next to an error.
    pub fn calculate(&mut self) -> Result<&ParlayResult, ParlayError> {
        match calculate_parlay(&self.rows, self.wager.as_deref()) {
            Ok(result) => {
                debug!(
                    legs = result.legs,
                    american = %result.combined_american,
                    "Slip priced"
                );
                let stored = self.result.insert(result);
                Ok(&*stored)
            }
            Err(e) => {
                self.result = None;
                Err(e)
            }
        }
    }
}

impl Default for BetSlip {
    fn default() -> Self {
        Self::new(&SlipConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
