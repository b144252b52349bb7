//! CLI tests for the `artifact-io` binary.
//!
//! Spawns the binary in a temporary project and checks stdout and exit codes.

use std::fs;
use std::process::Command;

use artifact_io::exit_codes;
use artifact_io::io::save_json;
use artifact_io::test_support::{sample_project, write_fixture};
use serde_json::{Value, json};

fn artifact_io() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_artifact-io"));
    cmd.env("RUST_LOG", "info");
    cmd
}

#[test]
fn config_prints_document_from_default_path() {
    let (temp, _paths) = sample_project();

    let output = artifact_io()
        .current_dir(temp.path())
        .arg("config")
        .output()
        .expect("artifact-io config");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let printed: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(printed["model_trainer"]["model_name"], json!("model.bin"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(": INFO: config: YAML file loaded successfully"), "{stderr}");
}

#[test]
fn config_key_prints_single_value() {
    let (temp, _paths) = sample_project();

    let output = artifact_io()
        .current_dir(temp.path())
        .args(["config", "params.yaml", "--key", "ElasticNet.l1_ratio"])
        .output()
        .expect("artifact-io config --key");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0.1");
}

#[test]
fn missing_and_empty_configs_have_distinct_exit_codes() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_fixture(temp.path(), "empty.yaml", "");
    write_fixture(temp.path(), "broken.yaml", "a: [1, 2\n");

    let missing = artifact_io()
        .current_dir(temp.path())
        .args(["config", "nope.yaml"])
        .output()
        .expect("missing");
    assert_eq!(missing.status.code(), Some(exit_codes::NOT_FOUND));
    let stderr = String::from_utf8_lossy(&missing.stderr);
    assert!(stderr.contains(": ERROR: config: error reading YAML file"), "{stderr}");

    let empty = artifact_io()
        .current_dir(temp.path())
        .args(["config", "empty.yaml"])
        .status()
        .expect("empty");
    assert_eq!(empty.code(), Some(exit_codes::INVALID_DOCUMENT));

    let broken = artifact_io()
        .current_dir(temp.path())
        .args(["config", "broken.yaml"])
        .status()
        .expect("broken");
    assert_eq!(broken.code(), Some(exit_codes::PARSE_FAILURE));
}

#[test]
fn show_prints_saved_artifact() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("metrics.json");
    save_json(&path, &json!({"rmse": 0.68, "r2": 0.29})).expect("save");

    let output = artifact_io().arg("show").arg(&path).output().expect("show");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let printed: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(printed, json!({"rmse": 0.68, "r2": 0.29}));
}

#[test]
fn size_reports_kilobytes_and_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("data.zip");
    fs::write(&path, vec![7u8; 1536]).expect("write");

    let output = artifact_io().arg("size").arg(&path).output().expect("size");
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "~ 2 KB");

    let status = artifact_io()
        .arg("size")
        .arg(temp.path().join("missing.zip"))
        .status()
        .expect("size missing");
    assert_eq!(status.code(), Some(exit_codes::NOT_FOUND));
}

#[test]
fn mkdirs_and_log_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let log_file = temp.path().join("logs/stage.log");

    let status = artifact_io()
        .current_dir(temp.path())
        .args(["mkdirs", "artifacts/data_ingestion", "artifacts/model_trainer"])
        .arg(format!("--log-file={}", log_file.display()))
        .status()
        .expect("mkdirs");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(temp.path().join("artifacts/data_ingestion").is_dir());
    assert!(temp.path().join("artifacts/model_trainer").is_dir());
    let logged = fs::read_to_string(&log_file).expect("log file");
    assert_eq!(logged.matches(": INFO: dirs: created directory").count(), 2);
    assert!(!temp.path().join("logs/running_log.log").exists());
}

#[test]
fn bare_log_file_defaults_to_project_log() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = artifact_io()
        .current_dir(temp.path())
        .args(["--log-file", "mkdirs", "artifacts"])
        .status()
        .expect("mkdirs");

    assert_eq!(status.code(), Some(exit_codes::OK));
    let log_file = temp.path().join("logs/running_log.log");
    let logged = fs::read_to_string(&log_file).expect("default log file");
    assert!(logged.contains(": INFO: dirs: created directory"), "{logged}");
}
