//! CLI drift integration tests
//!
//! These tests verify that the CLI commands correctly load recorded snapshot
//! files, delegate to the core engine, and honor output and exit-code
//! contracts.

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::Duration;

use driftwatch_core::model::Response;
use tempfile::TempDir;

fn write_snapshot(temp_dir: &TempDir, name: &str, snapshot: &Response) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(snapshot).unwrap()).unwrap();
    path
}

fn write_history(temp_dir: &TempDir, name: &str, snapshots: &[Response]) -> PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(snapshots).unwrap()).unwrap();
    path
}

#[test]
fn test_cli_compare_reports_drift() {
    // Scenario: a field disappears between two snapshots
    // When: `driftwatch compare --previous <a> --current <b>`
    // Then: exit 0, summary on stdout names the missing field

    let temp_dir = TempDir::new().unwrap();
    let previous = write_snapshot(
        &temp_dir,
        "previous.json",
        &Response::new(200, br#"{"id":"123","name":"John"}"#.to_vec()),
    );
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{"name":"John"}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Drift Report"), "summary header expected");
    assert!(stdout.contains("$.id"), "missing field should be named");
    assert!(stdout.contains("Breaking Changes"));
}

#[test]
fn test_cli_compare_identical_snapshots() {
    // Scenario: nothing changed between checks
    // When: comparing a snapshot file against a copy of itself
    // Then: exit 0 and a no-drift summary

    let temp_dir = TempDir::new().unwrap();
    let snapshot = Response::new(200, br#"{"a":1}"#.to_vec());
    let previous = write_snapshot(&temp_dir, "previous.json", &snapshot);
    let current = write_snapshot(&temp_dir, "current.json", &snapshot);

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No drift detected"));
}

#[test]
fn test_cli_compare_fail_on_breaking_exit_code() {
    // Scenario: gating a deploy pipeline on breaking drift
    // When: `driftwatch compare ... --fail-on-breaking` and a field was removed
    // Then: exit code 2

    let temp_dir = TempDir::new().unwrap();
    let previous = write_snapshot(
        &temp_dir,
        "previous.json",
        &Response::new(200, br#"{"id":"123"}"#.to_vec()),
    );
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
            "--fail-on-breaking",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(
        output.status.code(),
        Some(2),
        "breaking drift should exit 2. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_compare_fail_on_breaking_passes_clean() {
    // Scenario: the gate must not trip on additive drift
    // When: `--fail-on-breaking` and the only change is an added field
    // Then: exit 0

    let temp_dir = TempDir::new().unwrap();
    let previous = write_snapshot(
        &temp_dir,
        "previous.json",
        &Response::new(200, br#"{"name":"John"}"#.to_vec()),
    );
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{"name":"John","nickname":"J"}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
            "--fail-on-breaking",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "additive drift should not trip the gate. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_compare_json_output() {
    // Scenario: piping structured results to another tool
    // When: `driftwatch compare ... --format json`
    // Then: stdout is the serialized DiffResult

    let temp_dir = TempDir::new().unwrap();
    let previous = write_snapshot(
        &temp_dir,
        "previous.json",
        &Response::new(200, br#"{"id":"123"}"#.to_vec()),
    );
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout must be JSON");
    assert_eq!(parsed["has_changes"], serde_json::json!(true));
    assert_eq!(parsed["summary"]["total_changes"], serde_json::json!(1));
    assert_eq!(parsed["summary"]["breaking_changes"], serde_json::json!(1));
}

#[test]
fn test_cli_compare_missing_file_fails() {
    // Scenario: a snapshot file path is wrong
    // When: `driftwatch compare` with a nonexistent previous file
    // Then: exit 1 with an error naming the file

    let temp_dir = TempDir::new().unwrap();
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            "does-not-exist.json",
            "--current",
            current.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("does-not-exist.json"));
}

#[test]
fn test_cli_compare_unparseable_body_fails() {
    // Scenario: a recorded body is not valid JSON
    // When: comparing snapshots where one body fails to parse
    // Then: exit 1, no partial report on stdout

    let temp_dir = TempDir::new().unwrap();
    let previous = write_snapshot(
        &temp_dir,
        "previous.json",
        &Response::new(200, b"not json at all".to_vec()),
    );
    let current = write_snapshot(
        &temp_dir,
        "current.json",
        &Response::new(200, br#"{}"#.to_vec()),
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "compare",
            "--previous",
            previous.to_str().unwrap(),
            "--current",
            current.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("ERR_UNPARSEABLE_BODY"));
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}

#[test]
fn test_cli_trend_text_output() {
    // Scenario: reviewing endpoint stability from recorded history
    // When: `driftwatch trend --history <file>` over three snapshots
    // Then: exit 0 with frequency and stability lines

    let temp_dir = TempDir::new().unwrap();
    let history = write_history(
        &temp_dir,
        "history.json",
        &[
            Response::new(200, br#"{"a":1}"#.to_vec()).with_latency(Duration::from_millis(100)),
            Response::new(200, br#"{"a":2}"#.to_vec()).with_latency(Duration::from_millis(110)),
            Response::new(200, br#"{"a":2}"#.to_vec()).with_latency(Duration::from_millis(105)),
        ],
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(["trend", "--history", history.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trend analysis:"));
    assert!(stdout.contains("snapshots: 3"));
    assert!(stdout.contains("change_frequency: 0.50"));
    assert!(stdout.contains("stability_score: 0.50"));
}

#[test]
fn test_cli_trend_json_output() {
    // Scenario: exporting trend data for dashboards
    // When: `driftwatch trend --history <file> --format json`
    // Then: stdout is the serialized TrendAnalysis

    let temp_dir = TempDir::new().unwrap();
    let history = write_history(
        &temp_dir,
        "history.json",
        &[
            Response::new(200, br#"{"a":1}"#.to_vec()),
            Response::new(200, br#"{"a":1}"#.to_vec()),
        ],
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "trend",
            "--history",
            history.to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout must be JSON");
    assert_eq!(parsed["total_responses"], serde_json::json!(2));
    assert_eq!(parsed["change_frequency"], serde_json::json!(0.0));
    assert_eq!(parsed["stability_score"], serde_json::json!(1.0));
}

#[test]
fn test_cli_trend_insufficient_history_fails() {
    // Scenario: trend requested before enough checks have run
    // When: `driftwatch trend` over a single-snapshot history
    // Then: exit 1 with a descriptive error

    let temp_dir = TempDir::new().unwrap();
    let history = write_history(
        &temp_dir,
        "history.json",
        &[Response::new(200, br#"{"a":1}"#.to_vec())],
    );

    let cli_bin = env!("CARGO_BIN_EXE_driftwatch");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(["trend", "--history", history.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("need at least 2 snapshots"));
}
