//! Integration tests for the CLI interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn listfold() -> Command {
    let mut cmd = Command::cargo_bin("listfold").unwrap();
    cmd.env_remove("LISTFOLD_LOG_LEVEL");
    cmd
}

#[test]
fn test_cli_help_flag() {
    listfold()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--divisor"));
}

#[test]
fn test_default_run_prints_halved_series() {
    listfold()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Steps in the iteration of halved quantities: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]",
        ))
        .stdout(predicate::str::contains("0.9765625]"));
}

#[test]
fn test_csv_output() {
    listfold()
        .args(["--steps", "2", "--format", "csv"])
        .assert()
        .success()
        .stdout("step,quantity\n0,1000\n1,500\n2,250\n");
}

#[test]
fn test_json_output_with_overrides() {
    let output = listfold()
        .args(["--initial", "81", "--divisor", "3", "-n", "4", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["quantities"], serde_json::json!([81.0, 27.0, 9.0, 3.0, 1.0]));
}

#[test]
fn test_config_file_is_used() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("listfold.toml");
    fs::write(&config_path, "[halving]\ninitial_quantity = 8.0\nsteps = 3\n").unwrap();

    listfold()
        .arg("--config")
        .arg(&config_path)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("3,1\n"));
}

#[test]
fn test_missing_config_file_fails() {
    listfold()
        .args(["--config", "/nonexistent/listfold.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("E1001"));
}

#[test]
fn test_zero_divisor_is_rejected() {
    listfold()
        .args(["--divisor", "0"])
        .assert()
        .failure()
        .code(8)
        .stderr(predicate::str::contains("divisor must be finite and non-zero"));
}

#[test]
fn test_invalid_format() {
    listfold()
        .args(["--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
