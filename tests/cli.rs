//! End-to-end tests for the `plainlog` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn plainlog() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plainlog"))
}

fn config_file(tmp: &TempDir, body: &str) -> String {
    let path = tmp.path().join("plainlog.toml");
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn writes_line_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let config = config_file(&tmp, "output = \"stdout\"\ntemplate = \"${level}|${message}\"\n");

    let out = plainlog()
        .args(["--config", &config, "error", "disk", "full"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "ERROR     |disk full\n");
}

#[test]
fn gated_line_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = config_file(&tmp, "level = \"error\"\noutput = \"stdout\"\n");

    let out = plainlog()
        .args(["--config", &config, "warning", "ignored"])
        .output()
        .unwrap();

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn fatal_exits_with_status_one() {
    let tmp = TempDir::new().unwrap();
    let config = config_file(&tmp, "output = \"stdout\"\ntemplate = \"${message}\"\n");

    let out = plainlog()
        .args(["--config", &config, "fatal", "bye"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "bye\n");
}

#[test]
fn fatal_exits_even_when_gated() {
    let tmp = TempDir::new().unwrap();
    let config = config_file(&tmp, "output = \"discard\"\n");

    let out = plainlog()
        .args(["--config", &config, "fatal", "bye"])
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn invalid_config_level_fails() {
    let tmp = TempDir::new().unwrap();
    let config = config_file(&tmp, "level = \"loud\"\n");

    let out = plainlog()
        .args(["--config", &config, "info", "x"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid level: loud"));
}
