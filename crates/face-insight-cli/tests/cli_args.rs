//! CLI argument validation tests.
//!
//! Tests command-line argument parsing, validation, and error handling.

#![allow(clippy::unwrap_used, deprecated)]

use assert_cmd::Command;
use face_insight_test_support::FaceObservationBuilder;
use predicates::prelude::*;

fn record_file(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("frame.json");
    std::fs::write(&path, FaceObservationBuilder::smiling().record_json()).unwrap();
    path
}

// === Missing/Invalid Path Tests ===

#[test]
fn test_missing_path_shows_error() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    // No path argument at all - error goes to stderr
    cmd.assert().code(2).stderr(
        predicate::str::contains("No paths specified").or(predicate::str::contains("PATHS")),
    );
}

#[test]
fn test_nonexistent_path_warns_but_continues() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("/nonexistent/path/to/record.json");

    // No records processed = nothing needing attention
    cmd.assert()
        .code(0)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_empty_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg(temp_dir.path());

    cmd.assert().code(0);
}

// === Format Validation Tests ===

#[test]
fn test_invalid_format_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--format").arg("xml").arg(path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("json").or(predicate::str::contains("jsonl")));
}

#[test]
fn test_valid_formats_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--format").arg("json").arg(&path);
    cmd.assert().code(predicate::in_iter([0, 1]));

    let mut cmd2 = Command::cargo_bin("face-insight").unwrap();
    cmd2.arg("--format").arg("jsonl").arg(&path);
    cmd2.assert().code(predicate::in_iter([0, 1]));
}

// === Threshold Validation Tests ===

#[test]
fn test_smile_threshold_above_one_rejected() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--smile-threshold").arg("1.5").arg("frame.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("0.0").or(predicate::str::contains("invalid")));
}

#[test]
fn test_smile_threshold_negative_rejected() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--smile-threshold").arg("-0.1").arg("frame.json");

    cmd.assert().failure();
}

#[test]
fn test_smile_threshold_non_numeric_rejected() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--smile-threshold").arg("abc").arg("frame.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_symmetry_threshold_above_100_rejected() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--symmetry-threshold").arg("101").arg("frame.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_valid_threshold_boundaries() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--smile-threshold").arg("0.0").arg(&path);
    cmd.assert().code(predicate::in_iter([0, 1]));

    let mut cmd2 = Command::cargo_bin("face-insight").unwrap();
    cmd2.arg("--smile-threshold").arg("1.0").arg(&path);
    cmd2.assert().code(predicate::in_iter([0, 1]));
}

// === Verbosity Level Tests ===

#[test]
fn test_verbosity_levels_accepted() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    for flag in ["-v", "-vv", "-vvv"] {
        let mut cmd = Command::cargo_bin("face-insight").unwrap();
        cmd.arg(flag).arg(&path);
        cmd.assert().code(predicate::in_iter([0, 1]));
    }
}

#[test]
fn test_quiet_suppresses_result_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--quiet").arg(&path);

    cmd.assert().code(0).stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_still_sets_exit_code() {
    use face_insight_core::{LandmarkType, Point};

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("bad.json");
    let json = FaceObservationBuilder::frontal()
        .with_smile(0.0)
        .with_eyes(0.0, 0.0)
        .with_landmark(LandmarkType::NoseBase, Point::new(270.0, 200.0))
        .with_landmark(LandmarkType::MouthBottom, Point::new(270.0, 201.0))
        .record_json();
    std::fs::write(&path, json).unwrap();

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--quiet").arg(&path);

    cmd.assert().code(1).stdout(predicate::str::is_empty());
}

// === Multiple Paths ===

#[test]
fn test_multiple_paths() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg(&path).arg(&path); // Same file twice

    let output = cmd.output().unwrap();
    let lines = String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .count();
    assert_eq!(lines, 2);
}

// === Help and Version ===

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--smile-threshold"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("face-insight"));
}

// === Analyze Subcommand ===

#[test]
fn test_analyze_subcommand() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("analyze").arg(&path);

    cmd.assert().code(predicate::in_iter([0, 1]));
}

#[test]
fn test_analyze_subcommand_with_options() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = record_file(&temp_dir);

    let mut cmd = Command::cargo_bin("face-insight").unwrap();
    cmd.arg("analyze")
        .arg("--eye-health-threshold")
        .arg("80")
        .arg(&path);

    cmd.assert().code(predicate::in_iter([0, 1]));
}
