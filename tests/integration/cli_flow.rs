//! Runs the `parlay` binary and checks output streams and exit codes.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn parlay() -> Command {
    let mut cmd = cargo_bin_cmd!("parlay");
    // A config path that never exists keeps the defaults in force.
    cmd.args(["--config", "no-such-parlay-config.toml"])
        .env_remove("RUST_LOG")
        .env_remove("PARLAY_LOG_JSON");
    cmd
}

#[test]
fn test_calc_prints_odds_and_payout() {
    parlay()
        .args(["calc", "+150", "-200", "--wager", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parlay Odds: +275"))
        .stdout(predicate::str::contains("Potential Payout: $375.00"));
}

#[test]
fn test_calc_json_result() {
    let output = parlay()
        .args(["calc", "+150", "-200", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["american"], "+275");
    assert_eq!(json["legs"], 2);
}

#[test]
fn test_calc_invalid_row_exits_one() {
    parlay()
        .args(["calc", "+150", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid (row 2)"));
}

#[test]
fn test_calc_json_error_object() {
    let output = parlay()
        .args(["calc", "abc", "--json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["error"], "One or more odds inputs are invalid (row 1).");
}

#[test]
fn test_convert() {
    parlay()
        .args(["convert", "2.5"])
        .assert()
        .success()
        .stdout("+150\n");
}

#[test]
fn test_convert_low_odds_exits_one() {
    parlay()
        .args(["convert", "-3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Decimal odds must be above 1.0"))
        .stderr(predicate::str::contains("Combined").not());
}

#[test]
fn test_slip_session_on_stdin() {
    parlay()
        .arg("slip")
        .write_stdin(b"set 1 +150\n\xff\ncalc\nquit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Input is not valid text; line ignored."))
        .stdout(predicate::str::contains("Parlay Odds: +150"));
}
