//! End-to-end tests for the `elizasign` binary.
//!
//! Each test runs in its own temp directory so no stray `.elizasign.yaml`
//! is picked up, and with colors off so output can be matched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn elizasign(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("elizasign").unwrap();
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env("HOME", dir.path())
        .env_remove("ELIZASIGN_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn test_simulate_low_risk_json() {
    let dir = TempDir::new().unwrap();
    let output = elizasign(&dir)
        .args(["simulate", "--to", "0xABC", "--amount", "0.5", "--risk", "low", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type"], "success");
    assert_eq!(json["decision"], "Auto-Signed");
    assert!(json["chainlinkServicesUsed"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_simulate_high_risk_blocked() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args(["simulate", "--to", "0xABC", "--amount", "0.5", "--risk", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction Blocked"));
}

#[test]
fn test_simulate_zero_amount_fails() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args(["simulate", "--to", "0xABC", "--amount", "0", "--risk", "low"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid request"));
}

#[test]
fn test_simulate_offline_shows_error_decision() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args([
            "simulate", "--to", "0xABC", "--amount", "1", "--risk", "low", "--offline",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to get a decision"))
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn test_rust_log_enables_debug_tracing() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .env("RUST_LOG", "elizasign=debug")
        .args(["simulate", "--to", "0xABC", "--amount", "0.5", "--risk", "low"])
        .assert()
        .success()
        .stderr(predicate::str::contains("evaluating transaction"));
}

#[test]
fn test_quiet_without_rust_log() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args(["simulate", "--to", "0xABC", "--amount", "0.5", "--risk", "low"])
        .assert()
        .success()
        .stderr(predicate::str::contains("evaluating transaction").not());
}

#[test]
fn test_simulate_over_precise_amount_fails() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args([
            "simulate",
            "--to",
            "0xABC",
            "--amount",
            "0.00000000000000000000000000001",
            "--risk",
            "low",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimal places"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config = fixture("cautious.yaml");
    elizasign(&dir)
        .args([
            "simulate",
            "--to",
            "0xABC",
            "--amount",
            "1",
            "--risk",
            "medium",
            "--config",
            config.as_str(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual Signature Required"));

    elizasign(&dir)
        .args([
            "simulate",
            "--to",
            "0xABC",
            "--amount",
            "1",
            "--risk",
            "medium",
            "--config",
            config.as_str(),
            "--threshold",
            "medium",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto-Signed"));
}

#[test]
fn test_batch_reports_each_outcome() {
    let dir = TempDir::new().unwrap();
    let batch = fixture("batch.yaml");
    elizasign(&dir)
        .args(["batch", batch.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto-Signed"))
        .stdout(predicate::str::contains("Delegated for Review"))
        .stdout(predicate::str::contains("Transaction Blocked"))
        .stdout(predicate::str::contains(
            "3 transactions | 1 signed | 1 delegated | 1 blocked",
        ))
        .stdout(predicate::str::contains("1 of 4 transactions could not be decided"));
}

#[test]
fn test_interactive_session() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .arg("session")
        .write_stdin("simulate 0xABC 0.5 low\nauto off\nsim 0xDEF 1 low\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Auto-Signed"))
        .stdout(predicate::str::contains("Auto-approve disabled"))
        .stdout(predicate::str::contains("Delegated for Review"))
        .stdout(predicate::str::contains("2 transactions | 1 signed | 1 delegated"));
}

#[test]
fn test_init_then_check() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .args(["init", "--template", "cautious"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(dir.path().join(".elizasign.yaml").is_file());

    elizasign(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"))
        .stdout(predicate::str::contains("cautious"));
}

#[test]
fn test_check_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "agent: bad\nrisk_threshold: extreme\n").unwrap();

    elizasign(&dir)
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("risk_threshold"));
}

#[test]
fn test_status_without_config() {
    let dir = TempDir::new().unwrap();
    elizasign(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"));
}
