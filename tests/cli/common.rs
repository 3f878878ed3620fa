//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("tagdown")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagdown turns text"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("tagdown")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("tagdown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("tagdown")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("tagdown")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a text file"));
}

#[test]
fn test_scan_help() {
    cargo_bin_cmd!("tagdown")
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delimiter candidate"));
}
