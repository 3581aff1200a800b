//! Integration tests for the config command and config file

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::quicknote_cmd;

#[test]
fn test_config_list_defaults() {
    let temp = TempDir::new().unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("store_path = notes.json"))
        .stdout(predicate::str::contains("export_path = notes.csv"));
}

#[test]
fn test_config_set_then_get() {
    let temp = TempDir::new().unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["config", "store_path", "journal.json"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join("quicknote.toml")).unwrap();
    assert!(content.contains("store_path = \"journal.json\""));

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["config", "store_path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal.json"));
}

#[test]
fn test_config_file_redirects_store() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("quicknote.toml"),
        "store_path = \"journal.json\"\nexport_path = \"journal.csv\"\n",
    )
    .unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["add", "1", "A", "B"])
        .assert()
        .success();
    quicknote_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success();

    assert!(temp.path().join("journal.json").exists());
    assert!(temp.path().join("journal.csv").exists());
    assert!(!temp.path().join("notes.json").exists());
}

#[test]
fn test_flag_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("quicknote.toml"),
        "store_path = \"journal.json\"\n",
    )
    .unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["--store", "flag.json", "add", "1", "A", "B"])
        .assert()
        .success();

    assert!(temp.path().join("flag.json").exists());
    assert!(!temp.path().join("journal.json").exists());
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["config", "editor", "vim"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_config_command_does_not_open_store() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.json"), "{broken").unwrap();

    quicknote_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("store_path = notes.json"));

    quicknote_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .code(2);
}
