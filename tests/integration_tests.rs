use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    cargo_bin_cmd!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LeetCode"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_cli_version_flag() {
    cargo_bin_cmd!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("leetstat"));
}

#[test]
fn test_cli_rejects_invalid_username() {
    cargo_bin_cmd!()
        .arg("not a user")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Username: not a user"));
}

#[test]
fn test_cli_rejects_too_long_username() {
    cargo_bin_cmd!()
        .arg("abcdefghijklmnop")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Username"));
}

#[test]
fn test_cli_rejects_blank_username() {
    cargo_bin_cmd!()
        .arg("   ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username should not be empty"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    cargo_bin_cmd!().arg("--bogus").assert().failure();
}
