//! Binary argument handling. Only paths that exit before the terminal is
//! taken over are exercised here.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rag-console").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_help_lists_options() {
    Command::cargo_bin("rag-console")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rag-console"))
        .stdout(predicate::str::contains("--response-delay-ms"))
        .stdout(predicate::str::contains("--case-sensitive"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("rag-console")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_screen_is_rejected() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("settings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--response-timeout-ms", "0"])
        .assert()
        .failure();
}

#[test]
fn test_malformed_config_fails_before_ui() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "default_screen = [").unwrap();

    cmd(&dir)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("rag-console: Invalid config file"));
}

#[test]
fn test_bad_config_value_names_the_key() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[admin]\ndefault_section = \"billing\"\n",
    )
    .unwrap();

    cmd(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin.default_section"))
        .stderr(predicate::str::contains("billing"));
}
