//! Integration tests for the wellness binary.
//!
//! These tests verify end-to-end behavior including:
//! - Recording entries and the printed diagnosis
//! - Last-write-wins per date
//! - Trailing-window trends and averages
//! - Clearing all data
//! - Resource listing

use assert_cmd::Command;
use chrono::{Duration, Local, NaiveDate};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI command isolated from the user's real config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wellness").expect("Failed to find wellness binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.env("HOME", temp_dir.path());
    cmd.arg("--data-dir").arg(temp_dir.path().join("data"));
    cmd
}

fn read_entries(data_dir: &Path) -> Vec<Value> {
    let content =
        fs::read_to_string(data_dir.join("wellness_entries.json")).expect("Failed to read entries");
    let value: Value = serde_json::from_str(&content).expect("entries are JSON");
    value.as_array().expect("entries are an array").clone()
}

fn days_before(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format("%Y-%m-%d").to_string()
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal wellness journal"));
}

#[test]
fn test_check_saves_entry_and_prints_diagnosis() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--mood", "6", "--energy", "8", "--sleep", "8", "--stress", "2"])
        .args(["--date", "2024-05-01", "--notes", "quiet day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry saved for 2024-05-01"))
        .stdout(predicate::str::contains("WELLNESS DIAGNOSIS"))
        .stdout(predicate::str::contains("Set aside time for hobbies"))
        .stdout(predicate::str::contains("20 minutes of physical activity"));

    let entries = read_entries(&temp_dir.path().join("data"));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "2024-05-01");
    assert_eq!(entries[0]["date"], "2024-05-01");
    assert_eq!(entries[0]["mood"], 6);
    assert_eq!(entries[0]["exercise"], false);
    assert_eq!(entries[0]["notes"], "quiet day");
}

#[test]
fn test_same_date_is_replaced() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01", "--mood", "2"])
        .assert()
        .success();
    cli(&temp_dir)
        .args(["check", "--date", "2024-05-02", "--mood", "4"])
        .assert()
        .success();
    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01", "--mood", "9"])
        .assert()
        .success();

    let entries = read_entries(&temp_dir.path().join("data"));
    assert_eq!(entries.len(), 2);

    cli(&temp_dir)
        .args(["show", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood:     9/10"));
}

#[test]
fn test_check_keeps_unspecified_values_of_existing_entry() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01", "--mood", "3", "--sleep", "9"])
        .args(["--exercise", "--notes", "ran"])
        .assert()
        .success();
    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01", "--mood", "7"])
        .assert()
        .success();

    let entries = read_entries(&temp_dir.path().join("data"));
    assert_eq!(entries[0]["mood"], 7);
    assert_eq!(entries[0]["sleep"], 9);
    assert_eq!(entries[0]["energy"], 5);
    assert_eq!(entries[0]["exercise"], true);
    assert_eq!(entries[0]["notes"], "ran");

    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01", "--exercise", "false"])
        .assert()
        .success();
    let entries = read_entries(&temp_dir.path().join("data"));
    assert_eq!(entries[0]["exercise"], false);
}

#[test]
fn test_critical_entry_shows_urgent_contacts() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--mood", "2", "--energy", "3", "--sleep", "2", "--stress", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("needs attention"))
        .stdout(predicate::str::contains("Ambulance"))
        .stdout(predicate::str::contains("Practice a daily gratitude exercise"))
        // Capped at four, the sleep recommendations never appear
        .stdout(predicate::str::contains("Avoid screens").not());
}

#[test]
fn test_good_day_with_exercise() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--mood", "8", "--energy", "8", "--sleep", "8", "--stress", "2"])
        .arg("--exercise")
        .assert()
        .success()
        .stdout(predicate::str::contains("Great job exercising today!"))
        .stdout(predicate::str::contains("Recommendations").not())
        .stdout(predicate::str::contains("Ambulance").not());
}

#[test]
fn test_out_of_range_score_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["check", "--mood", "11"])
        .assert()
        .failure();
    cli(&temp_dir)
        .args(["check", "--stress", "0"])
        .assert()
        .failure();

    assert!(!temp_dir.path().join("data/wellness_entries.json").exists());
}

#[test]
fn test_show_missing_date() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["show", "--date", "2020-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry for 2020-01-01"));
}

#[test]
fn test_trends_window_filters_and_averages() {
    let temp_dir = setup_test_dir();

    // One clock reading for every date; the windows leave a day of slack
    // if the binary's own clock has moved past midnight
    let now = Local::now().date_naive();
    let today = days_before(now, 0);
    let recent = days_before(now, 3);
    let old = days_before(now, 12);

    cli(&temp_dir)
        .args(["check", "--date", &today, "--mood", "8", "--exercise"])
        .assert()
        .success();
    cli(&temp_dir)
        .args(["check", "--date", &recent, "--mood", "5"])
        .assert()
        .success();
    cli(&temp_dir)
        .args(["check", "--date", &old, "--mood", "1"])
        .assert()
        .success();

    let output = cli(&temp_dir)
        .args(["trends", "--window", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("last 7 days"))
        .stdout(predicate::str::contains("Average mood:   6.5/10"))
        .stdout(predicate::str::contains("Exercise days:  1 of 2"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8_lossy(&output);
    assert!(!stdout.contains(&old));
    // Oldest first
    let recent_pos = stdout.find(&recent).expect("recent entry listed");
    let today_pos = stdout.find(&today).expect("today's entry listed");
    assert!(recent_pos < today_pos);

    cli(&temp_dir)
        .args(["trends", "--window", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average mood:   4.7/10"));
}

#[test]
fn test_trends_empty() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["trends"])
        .assert()
        .success()
        .stdout(predicate::str::contains("last 30 days"))
        .stdout(predicate::str::contains("No entries recorded"))
        .stdout(predicate::str::contains("Average mood:   0.0/10"));
}

#[test]
fn test_trends_default_window_from_config() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config/wellness");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[dashboard]\ndefault_window = 365\n",
    )
    .unwrap();

    cli(&temp_dir)
        .arg("trends")
        .assert()
        .success()
        .stdout(predicate::str::contains("last 365 days"));
}

#[test]
fn test_clear_requires_confirmation() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("data");

    cli(&temp_dir)
        .args(["check", "--date", "2024-05-01"])
        .assert()
        .success();

    cli(&temp_dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert_eq!(read_entries(&data_dir).len(), 1);

    cli(&temp_dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries deleted"));

    cli(&temp_dir)
        .args(["show", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry"));
}

#[test]
fn test_resources_by_mood_and_category() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["resources", "--mood", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24/7 Helplines"))
        .stdout(predicate::str::contains("Sleep Hygiene").not());

    cli(&temp_dir)
        .args(["resources", "--category", "sleep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sleep Hygiene"))
        .stdout(predicate::str::contains("Breathing Exercises").not());

    cli(&temp_dir)
        .args(["resources", "--category", "astrology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidInput"));
}

#[test]
fn test_unknown_window_rejected() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["trends", "--window", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown window"));
}

#[test]
fn test_help_and_resources_survive_broken_config() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config/wellness");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[dashboard\n").unwrap();

    cli(&temp_dir)
        .arg("help-now")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ambulance"));

    cli(&temp_dir)
        .args(["resources", "--mood", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("24/7 Helplines"));

    // Commands that need the config still report it
    cli(&temp_dir)
        .arg("trends")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

#[test]
fn test_help_now_lists_contacts() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .arg("help-now")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health helpline"))
        .stdout(predicate::str::contains("tel:131"));
}
