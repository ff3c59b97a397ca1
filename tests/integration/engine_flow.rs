//! Engine behaviour through the public API: conversion, aggregation,
//! validation, and thread safety.

use std::thread;

use parlay::engine::{calculate_parlay, decimal_to_american, parse_american_to_decimal};
use parlay::types::{ArithmeticError, DecimalOdds, ParlayError};
use rust_decimal_macros::dec;

#[test]
fn test_documented_examples() {
    assert_eq!(parse_american_to_decimal("+150").unwrap().unwrap().value(), 2.5);
    assert_eq!(parse_american_to_decimal("-200").unwrap().unwrap().value(), 1.5);
    assert_eq!(parse_american_to_decimal("100").unwrap().unwrap().value(), 2.0);
    assert_eq!(decimal_to_american(DecimalOdds(2.5)).unwrap(), "+150");
    assert_eq!(decimal_to_american(DecimalOdds(1.5)).unwrap(), "-200");
}

#[test]
fn test_parlay_without_wager() {
    let r = calculate_parlay(&["+150", "-200"], Some("")).unwrap();
    assert_eq!(r.combined_decimal, 3.75);
    assert_eq!(r.combined_american, "+275");
    assert!(r.payout.is_none());
    assert_eq!(r.to_string(), "Parlay Odds: +275");
}

#[test]
fn test_parlay_with_wager() {
    let r = calculate_parlay(&["+150", "-200"], Some("100")).unwrap();
    assert_eq!(r.payout_cents(), Some(dec!(375.00)));
    assert_eq!(r.to_string(), "Parlay Odds: +275\nPotential Payout: $375.00");
}

#[test]
fn test_fractional_wager_rounds_to_cents() {
    // 3.75 * 33.33 = 124.9875
    let r = calculate_parlay(&["+150", "-200"], Some("33.33")).unwrap();
    assert_eq!(r.payout_cents(), Some(dec!(124.99)));
}

#[test]
fn test_three_leg_parlay() {
    // 1.909090.. * 1.909090.. * 2.2 = 8.0182 → +702
    let r = calculate_parlay(&["-110", "-110", "+120"], None).unwrap();
    assert_eq!(r.combined_american, "+702");
    assert_eq!(r.legs, 3);
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        calculate_parlay(&["abc"], Some("")),
        Err(ParlayError::InvalidEntries { indices: vec![0] })
    );
    assert_eq!(calculate_parlay(&["", ""], Some("")), Err(ParlayError::NoValidEntries));
    assert_eq!(calculate_parlay(&["+150"], Some("lots")), Err(ParlayError::InvalidWager));
    assert_eq!(
        calculate_parlay(&["-0"], None),
        Err(ParlayError::Arithmetic(ArithmeticError::UnboundedOdds))
    );
}

#[test]
fn test_json_shape() {
    let r = calculate_parlay(&["+150", "-200"], Some("100")).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["american"], "+275");
    assert_eq!(json["decimal"], 3.75);
    assert_eq!(json["payout"], 375.0);
}

#[test]
fn test_concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| calculate_parlay(&["+150", "-200", "+300"], Some("20"))))
        .collect();

    let expected = calculate_parlay(&["+150", "-200", "+300"], Some("20")).unwrap();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), expected);
    }
}
