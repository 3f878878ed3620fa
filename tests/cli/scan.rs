//! Scan subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_scan_stdin() {
    cargo_bin_cmd!("tagdown")
        .arg("scan")
        .write_stdin("_a_")
        .assert()
        .success()
        .stdout(
            "0..1\t\"_\"\tforward\topener\n\
             0..1\t\"_\"\tbackward\tliteral\n\
             2..3\t\"_\"\tforward\tliteral\n\
             2..3\t\"_\"\tbackward\tcloser\n",
        );
}

#[test]
fn test_scan_triple_run() {
    cargo_bin_cmd!("tagdown")
        .arg("scan")
        .write_stdin("___a___")
        .assert()
        .success()
        .stdout(predicate::str::contains("0..2\t\"__\"\tforward\topener"))
        .stdout(predicate::str::contains("5..7\t\"__\"\tbackward\tcloser"));
}

#[test]
fn test_scan_plain_text() {
    cargo_bin_cmd!("tagdown")
        .arg("scan")
        .write_stdin("nothing here")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
