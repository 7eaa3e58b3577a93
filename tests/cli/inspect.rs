//! Inspect subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_inspect_table() {
    cargo_bin_cmd!("textwork")
        .arg("inspect")
        .write_stdin("Intro\nh. eight\ni. nine\n    i. sub\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("   2: letter  h."))
        .stdout(predicate::str::contains("   3: letter  i."))
        .stdout(predicate::str::contains("   4: roman   i."))
        .stdout(predicate::str::contains("Intro").not());
}

#[test]
fn test_inspect_json() {
    let output = cargo_bin_cmd!("textwork")
        .args(["inspect", "--json"])
        .write_stdin("- one\n2. two\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(reports[0]["kind"], "bullet");
    assert_eq!(reports[1]["marker"], "2.");
    assert_eq!(reports[1]["line"], 2);
}

#[test]
fn test_inspect_empty_input() {
    cargo_bin_cmd!("textwork")
        .arg("inspect")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
