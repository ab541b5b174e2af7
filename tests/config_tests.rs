//! Integration tests for config command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::takara_cmd;

fn init_journal(temp: &TempDir) {
    takara_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_config_list_shows_defaults() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("name = Guest"))
        .stdout(predicate::str::contains("morning_hour = 6"))
        .stdout(predicate::str::contains("evening_hour = 18"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_get_and_set_name() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("name")
        .arg("Aki")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set name = Aki"));

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("name")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aki"));
}

#[test]
fn test_config_set_evening_hour() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("evening_hour")
        .arg("20")
        .assert()
        .success();

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("evening_hour")
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn test_config_rejects_out_of_range_hour() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("morning_hour")
        .arg("25")
        .assert()
        .failure()
        .stderr(predicate::str::contains("0-23"));
}

#[test]
fn test_config_rejects_morning_after_evening() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("morning_hour")
        .arg("19")
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be before"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_created_is_read_only() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .arg("2020-01-01T00:00:00Z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));
}

#[test]
fn test_config_without_key_shows_usage() {
    let temp = TempDir::new().unwrap();
    init_journal(&temp);

    takara_cmd()
        .current_dir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: takara config"));
}
