//! Config file behaviour through the CLI

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{alia_in, stdout_of};

fn config_file(home: &TempDir) -> std::path::PathBuf {
    home.path().join(".config").join("alia").join("config.toml")
}

#[test]
fn config_path_is_under_home() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(alia_in(&home).args(["config", "path"]));
    assert_eq!(out.trim_end(), config_file(&home).display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    alia_in(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"))
        .stdout(predicate::str::contains("timestamp = true"))
        .stdout(predicate::str::contains("color = \"auto\""));
}

#[test]
fn set_color_creates_usable_alias() {
    let home = TempDir::new().unwrap();
    alia_in(&home)
        .args(["--color", "never", "config", "set-color", "brand", "99"])
        .assert()
        .success()
        .stdout("Added 'brand' = 99\n");

    assert!(config_file(&home).exists());

    let out = stdout_of(alia_in(&home).args(["--color", "always", "say", "brand", "hi", "-T"]));
    assert_eq!(out, "\x1b[38;5;99mhi\x1b[0m\n");
}

#[test]
fn set_color_reports_previous_code() {
    let home = TempDir::new().unwrap();
    alia_in(&home)
        .args(["config", "set-color", "brand", "99"])
        .assert()
        .success();
    alia_in(&home)
        .args(["--color", "never", "config", "set-color", "brand", "100"])
        .assert()
        .success()
        .stdout("Updated 'brand': 99 -> 100\n");
}

#[test]
fn remove_color_deletes_alias() {
    let home = TempDir::new().unwrap();
    alia_in(&home)
        .args(["config", "set-color", "brand", "99"])
        .assert()
        .success();
    alia_in(&home)
        .args(["config", "remove-color", "brand"])
        .assert()
        .success()
        .stdout("Removed 'brand'\n");
    alia_in(&home)
        .args(["say", "brand", "hi"])
        .assert()
        .failure();
}

#[test]
fn config_controls_timestamp_and_color() {
    let home = TempDir::new().unwrap();
    let path = config_file(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[output]\ntimestamp = false\ncolor = \"always\"\n").unwrap();

    let out = stdout_of(alia_in(&home).args(["say", "red", "x"]));
    assert_eq!(out, "\x1b[38;5;196mx\x1b[0m\n");

    let out = stdout_of(alia_in(&home).args(["--color", "never", "say", "red", "x", "-t"]));
    assert!(out.starts_with("x ["), "unexpected output {:?}", out);
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = config_file(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[palette]\nbrand = 999\n").unwrap();

    alia_in(&home)
        .args(["say", "red", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
