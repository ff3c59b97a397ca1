//! Odds engine — American/decimal conversion and parlay aggregation.
//!
//! Every function here is pure: no shared state, safe to call from any
//! number of threads.

pub mod convert;
pub mod parlay;

pub use convert::{decimal_to_american, parse_american_to_decimal};
pub use parlay::{calculate_parlay, parse_wager};
