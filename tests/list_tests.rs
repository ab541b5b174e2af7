//! Integration tests for list and show commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::takara_cmd;

fn journal_with_entries(texts: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    takara_cmd().arg("init").arg(temp.path()).assert().success();

    for text in texts {
        takara_cmd()
            .current_dir(temp.path())
            .arg("add")
            .arg(text)
            .assert()
            .success();
    }

    temp
}

#[test]
fn test_list_empty_journal() {
    let temp = journal_with_entries(&[]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_shows_all_entries() {
    let temp = journal_with_entries(&["first moment", "second moment", "third moment"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("first moment"))
        .stdout(predicate::str::contains("second moment"))
        .stdout(predicate::str::contains("third moment"));
}

#[test]
fn test_list_newest_first() {
    let temp = journal_with_entries(&["earlier", "later"]);

    let output = takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let later_pos = stdout.find("later").unwrap();
    let earlier_pos = stdout.find("earlier").unwrap();
    assert!(later_pos < earlier_pos);
}

#[test]
fn test_list_with_limit() {
    let temp = journal_with_entries(&["one", "two", "three"]);

    let output = takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--limit")
        .arg("2")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(stdout.trim().lines().count(), 2);
}

#[test]
fn test_list_with_search() {
    let temp = journal_with_entries(&["Ramen with my sister", "Morning run"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--search")
        .arg("ramen")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ramen with my sister"))
        .stdout(predicate::str::contains("Morning run").not());
}

#[test]
fn test_list_invalid_search_pattern() {
    let temp = journal_with_entries(&["anything"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--search")
        .arg("(unclosed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid search pattern"));
}

#[test]
fn test_list_range_excluding_today_is_empty() {
    let temp = journal_with_entries(&["today's moment"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--to")
        .arg("yesterday")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_range_including_today() {
    let temp = journal_with_entries(&["today's moment"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--from")
        .arg("yesterday")
        .arg("--to")
        .arg("tomorrow")
        .assert()
        .success()
        .stdout(predicate::str::contains("today's moment"));
}

#[test]
fn test_list_full_shows_cards() {
    let temp = journal_with_entries(&["a full card"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--full")
        .assert()
        .success()
        .stdout(predicate::str::contains("id: "))
        .stdout(predicate::str::contains("[50%]"));
}

#[test]
fn test_show_today() {
    let temp = journal_with_entries(&["what a day"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("what a day"))
        .stdout(predicate::str::contains("id: "));
}

#[test]
fn test_show_day_without_entries() {
    let temp = journal_with_entries(&["what a day"]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("2020-01-01")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries on 2020-01-01"));
}

#[test]
fn test_show_invalid_day_reference() {
    let temp = journal_with_entries(&[]);

    takara_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("whenever")
        .assert()
        .failure()
        .code(3);
}
