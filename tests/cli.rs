//! End-to-end runs of the `simplot` binary in headless mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn simplot() -> Command {
    Command::cargo_bin("simplot").unwrap()
}

#[test]
fn prints_sequence_from_file() {
    let file = data_file("# samples\n1.0 2.5 3.0\n");
    simplot()
        .arg(file.path())
        .args(["--headless", "50x14", "--title", "Samples"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}Samples", " ".repeat(21))))
        .stdout(predicate::str::contains("o"));
}

#[test]
fn reads_standard_input() {
    simplot()
        .args(["--headless", "40x12", "--mode", "points", "--hlabel", "time"])
        .write_stdin("0\n1\n4\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("time"));
}

#[test]
fn grid_input_draws_pixels_with_color_bar() {
    let file = data_file("1, 2\n3, 4\n");
    simplot()
        .arg(file.path())
        .args(["--headless", "60x16", "--colorbar", "amplitude", "--palette", "jet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amplitude"))
        .stdout(predicate::str::contains("█"));
}

#[test]
fn ragged_grid_is_reported() {
    let file = data_file("1 2\n3\n");
    simplot()
        .arg(file.path())
        .args(["--headless", "40x12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Shape mismatch"));
}

#[test]
fn bad_number_names_line() {
    simplot()
        .args(["--headless", "40x12"])
        .write_stdin("1 2\n3 oops\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'oops' on line 2"));
}

#[test]
fn pixels_mode_needs_grid() {
    simplot()
        .args(["--headless", "40x12", "--mode", "pixels"])
        .write_stdin("1 2 3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported input"));
}

#[test]
fn palette_is_rejected_for_series() {
    simplot()
        .args(["--headless", "40x12", "--palette", "jet"])
        .write_stdin("1 2 3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--palette applies to pixels only"));
}

#[test]
fn malformed_grid_parameters_fail() {
    simplot()
        .args(["--headless", "40x12", "--grid", "Q"])
        .write_stdin("1 2 3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse 'Q'"));
}

#[test]
fn bad_headless_size_is_rejected() {
    simplot()
        .args(["--headless", "wide"])
        .write_stdin("1\n")
        .assert()
        .failure();
}

#[test]
fn writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("simplot.log");
    simplot()
        .args(["--headless", "40x12", "--log"])
        .arg(&log)
        .write_stdin("1 2 3\n")
        .assert()
        .success();
    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("Starting simplot"));
}
