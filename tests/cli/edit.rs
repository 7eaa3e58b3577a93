//! Keypress subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_enter_stdin_to_stdout() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "2"])
        .write_stdin("1. one\n2. two\n")
        .assert()
        .success()
        .stdout("1. one\n2. two\n3. \n");
}

#[test]
fn test_enter_at_column_splits_item() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "1", "--column", "8"])
        .write_stdin("- milk eggs")
        .assert()
        .success()
        .stdout("- milk \n- eggs");
}

#[test]
fn test_enter_on_empty_item_ends_list() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "2"])
        .write_stdin("a. one\nb. \n")
        .assert()
        .success()
        .stdout("a. one\n\n\n");
}

#[test]
fn test_tab_resolves_letter_context() {
    cargo_bin_cmd!("textwork")
        .args(["tab", "--line", "2"])
        .write_stdin("h. eight\ni. nine\n")
        .assert()
        .success()
        .stdout("h. eight\n    i. nine\n");
}

#[test]
fn test_tab_size_flag() {
    cargo_bin_cmd!("textwork")
        .args(["tab", "--line", "1", "--tab-size", "2"])
        .write_stdin("1. item")
        .assert()
        .success()
        .stdout("  a. item");
}

#[test]
fn test_tab_size_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.txt");
    fs::write(&test_file, "1. item\n").unwrap();
    fs::write(temp_dir.path().join(".textwork.toml"), "tab-size = 3\n").unwrap();

    cargo_bin_cmd!("textwork")
        .args(["tab", "--line", "1", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("   a. item\n");
}

#[test]
fn test_shift_tab_continues_parent() {
    cargo_bin_cmd!("textwork")
        .args(["shift-tab", "--line", "3"])
        .write_stdin("1. one\n    a. sub\n    b. up\n")
        .assert()
        .success()
        .stdout("1. one\n    a. sub\n2. up\n");
}

#[test]
fn test_plain_line_gets_native_behavior() {
    cargo_bin_cmd!("textwork")
        .args(["tab", "--line", "1", "--column", "1"])
        .write_stdin("text")
        .assert()
        .success()
        .stdout("    text");
}

#[test]
fn test_write_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.txt");
    fs::write(&test_file, "* milk\n").unwrap();

    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "1", "--write", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let content = fs::read_to_string(&test_file).unwrap();
    assert_eq!(content, "• milk\n• \n");
}

#[test]
fn test_write_needs_file() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "1", "--write"])
        .write_stdin("1. one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--write needs a file"));
}

#[test]
fn test_check_reports_diff() {
    cargo_bin_cmd!("textwork")
        .args(["tab", "--line", "1", "--check"])
        .write_stdin("1. one\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Diff in <stdin>"))
        .stdout(predicate::str::contains("+    a. one"));
}

#[test]
fn test_check_passes_when_nothing_changes() {
    cargo_bin_cmd!("textwork")
        .args(["shift-tab", "--line", "1", "--check"])
        .write_stdin("no indent\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_line_out_of_range() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "5"])
        .write_stdin("1. one\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_column_out_of_range() {
    cargo_bin_cmd!("textwork")
        .args(["enter", "--line", "1", "--column", "20"])
        .write_stdin("1. one")
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn test_stamp_after() {
    cargo_bin_cmd!("textwork")
        .args(["stamp", "--line", "1", "--column", "1"])
        .write_stdin("notes\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^--- ✄ --------- \d{4}\.\d{2}\.\d{2} \d{2}:\d{2} -------------------\nnotes\n$").unwrap());
}

#[test]
fn test_stamp_before() {
    cargo_bin_cmd!("textwork")
        .args(["stamp", "--line", "1", "--before"])
        .write_stdin("notes")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^notes\n--- ✄ --------- [0-9.: ]+ -------------------\n$").unwrap());
}
