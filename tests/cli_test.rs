//! Integration tests for the lintlayer binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".lintlayer");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.yml"), config).unwrap();
    temp
}

const SIMPLE_CONFIG: &str = r#"
fragments:
  - files: ["**/*.js"]
    rules:
      x:
        mode: { edit: off, commit: error, release: error }
      sort: [error, { type: alphabetical }]
"#;

fn lintlayer(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("lintlayer"));
    cmd.current_dir(temp.path())
        .env_remove("LINTLAYER_MODE")
        .env_remove("LINTLAYER_DISABLE");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lintlayer"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("layered rule-set composition"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lintlayer"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn compose_defaults_to_release() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = lintlayer(&temp).arg("compose").output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["x"], "error");
    Ok(())
}

#[test]
fn compose_reads_mode_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = lintlayer(&temp)
        .env("LINTLAYER_MODE", "edit")
        .arg("compose")
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["x"], "off");
    assert_eq!(json[0]["rules"]["sort"][0], "error");
    Ok(())
}

#[test]
fn mode_flag_overrides_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    lintlayer(&temp)
        .env("LINTLAYER_MODE", "edit")
        .args(["mode", "--mode", "commit"])
        .assert()
        .success()
        .stdout("commit (--mode flag)\n");
    Ok(())
}

#[test]
fn invalid_mode_fails_with_valid_set() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    lintlayer(&temp)
        .env("LINTLAYER_MODE", "bogus")
        .arg("compose")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\"bogus\""))
        .stderr(predicate::str::contains("\"silence\""))
        .stderr(predicate::str::contains("\"release\""));
    Ok(())
}

#[test]
fn disable_flag_keeps_options() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = lintlayer(&temp).args(["compose", "--disable"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["x"], "off");
    assert_eq!(
        json[0]["rules"]["sort"],
        serde_json::json!(["off", { "type": "alphabetical" }])
    );
    Ok(())
}

#[test]
fn disable_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = lintlayer(&temp)
        .env("LINTLAYER_DISABLE", "true")
        .arg("compose")
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["sort"][0], "off");
    Ok(())
}

#[test]
fn compose_yaml_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    lintlayer(&temp)
        .args(["compose", "--format", "yaml", "--mode", "commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x: error"));
    Ok(())
}

#[test]
fn missing_config_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    lintlayer(&temp)
        .arg("compose")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn config_override_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let custom = temp.path().join("lint.yml");
    fs::write(&custom, "fragments:\n  - rules:\n      eqeqeq: warn\n")?;

    let output = lintlayer(&temp)
        .args(["compose", "--config"])
        .arg(&custom)
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["eqeqeq"], "warn");
    Ok(())
}

#[test]
fn schema_prints_json_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    lintlayer(&temp)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("draft-07"));
    Ok(())
}

#[test]
fn silence_mode_turns_table_rules_off() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(SIMPLE_CONFIG);
    let output = lintlayer(&temp).args(["compose", "--mode", "silence"]).output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["rules"]["x"], "off");
    assert_eq!(json[0]["rules"]["sort"][0], "error");
    Ok(())
}
