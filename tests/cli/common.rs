//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("textwork")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("continues, indents, and outdents"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("textwork")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("textwork")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("textwork")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_line_is_required() {
    cargo_bin_cmd!("textwork")
        .arg("enter")
        .write_stdin("1. one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--line"));
}

#[test]
fn test_tab_help() {
    cargo_bin_cmd!("textwork")
        .args(["tab", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Indent the list item"));
}

#[test]
fn test_invalid_config_is_reported() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "tab-size = \"wide\"").unwrap();

    cargo_bin_cmd!("textwork")
        .args(["--config", config_file.to_str().unwrap()])
        .args(["tab", "--line", "1"])
        .write_stdin("1. one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
