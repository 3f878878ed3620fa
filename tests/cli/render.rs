//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("tagdown")
        .args(["render", "--fragment"])
        .write_stdin("_a __b__ c_")
        .assert()
        .success()
        .stdout("<em>a <strong>b</strong> c</em>");
}

#[test]
fn test_render_document_by_default() {
    cargo_bin_cmd!("tagdown")
        .arg("render")
        .write_stdin("__hello__")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<strong>hello</strong>"))
        .stdout(predicate::str::ends_with("</html>\n"));
}

#[test]
fn test_render_file_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.html");
    fs::write(&input, "_a_\n\n`b`").unwrap();

    cargo_bin_cmd!("tagdown")
        .args([
            "render",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("<em>a</em>\n</p>\n<p>\n    <code>b</code>"));
}

#[test]
fn test_render_no_paragraphs() {
    cargo_bin_cmd!("tagdown")
        .args(["render", "--fragment", "--no-paragraphs"])
        .write_stdin("_a_\n\n_b_")
        .assert()
        .success()
        .stdout("<em>a</em>\n\n<em>b</em>");
}

#[test]
fn test_render_unmatched_passthrough() {
    cargo_bin_cmd!("tagdown")
        .args(["render", "--fragment"])
        .write_stdin("`a` b`")
        .assert()
        .success()
        .stdout("<code>a</code> b`");
}

#[test]
fn test_render_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    cargo_bin_cmd!("tagdown")
        .args(["render", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn test_render_invalid_utf8_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("latin1.txt");
    fs::write(&input, [0xff, 0xfe]).unwrap();

    cargo_bin_cmd!("tagdown")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("latin1.txt"));
}

#[test]
fn test_render_unwritable_output_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("no_such_dir").join("out.html");
    fs::write(&input, "_a_").unwrap();

    cargo_bin_cmd!("tagdown")
        .args([
            "render",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out.html"));

    assert!(!output.exists());
}

#[test]
fn test_render_with_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(
        &config_file,
        "document = false\n\n[delimiters]\n\"*\" = \"em\"\n\"~~\" = \"del\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("tagdown")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("*a* ~~b~~ _c_")
        .assert()
        .success()
        .stdout("<em>a</em> <del>b</del> _c_");
}

#[test]
fn test_render_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.txt");
    fs::write(&input, "_a_").unwrap();
    fs::write(
        temp_dir.path().join("tagdown.toml"),
        "document = false\n[delimiters]\n\"_\" = \"i\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("tagdown")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<i>a</i>");
}

#[test]
fn test_render_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "max_depth = 0").unwrap();

    cargo_bin_cmd!("tagdown")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("_a_")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_depth"));
}

#[test]
fn test_render_title_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tagdown.toml");
    fs::write(&config_file, "title = \"Notes\"").unwrap();

    cargo_bin_cmd!("tagdown")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Notes</title>"));
}
