//! Bet slip and interactive front end, driven the way a user would.

use std::io::Cursor;

use parlay::cli::repl;
use parlay::config::{AppConfig, SlipConfig};
use parlay::slip::{BetSlip, SlipError};
use parlay::types::ParlayError;

#[test]
fn test_build_price_and_edit() {
    let mut slip = BetSlip::default();
    slip.set_row(0, "+150").unwrap();
    let second = slip.add_row().unwrap();
    slip.set_row(second, "-200").unwrap();
    slip.set_wager("100");

    assert_eq!(slip.calculate().unwrap().combined_american, "+275");

    slip.remove_row(second).unwrap();
    let r = slip.calculate().unwrap();
    assert_eq!(r.combined_american, "+150");
    assert_eq!(r.payout, Some(250.0));
}

#[test]
fn test_error_after_success_clears_result() {
    let mut slip = BetSlip::default();
    slip.set_row(0, "+150").unwrap();
    slip.calculate().unwrap();

    slip.set_wager("not money");
    assert_eq!(slip.calculate(), Err(ParlayError::InvalidWager));
    assert!(slip.result().is_none());
}

#[test]
fn test_configured_slip_limits() {
    let cfg = AppConfig::from_toml("[slip]\ninitial_rows = 2\nmax_rows = 3").unwrap();
    let mut slip = BetSlip::new(&cfg.slip);
    assert_eq!(slip.rows().len(), 2);
    slip.add_row().unwrap();
    assert_eq!(slip.add_row(), Err(SlipError::TooManyRows { max: 3 }));

    slip.reset();
    assert_eq!(slip.rows().len(), 2);
}

#[test]
fn test_interactive_session_with_currency() {
    let mut slip = BetSlip::new(&SlipConfig::default());
    let script = "set 1 -110\nadd -110\nwager 50\nlist\ncalc\nwager\ncalc\nquit\n";
    let mut out = Vec::new();
    repl::run(&mut slip, Cursor::new(script), &mut out, "€").unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("  Wager: €50"));
    // 1.909090..² = 3.6446 → +264, payout 182.23
    assert!(out.contains("Parlay Odds: +264\nPotential Payout: €182.23"));
    assert!(out.contains("Wager cleared."));
    assert!(out.ends_with("Parlay Odds: +264\n> "));
}
