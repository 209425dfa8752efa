//! Integration tests for the lamp binary.
//!
//! These tests verify end-to-end behavior including:
//! - Plan editing through the reading/memorize subcommands
//! - Today's devotion output
//! - Verse lookup from the built-in table and the cache
//! - Data persistence across runs
//!
//! Every run uses `--offline` so no test touches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// CLI pointed at `data_dir`, offline, with no user config file in scope
fn lamp(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lamp").expect("Failed to find lamp binary");
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .arg("--offline")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn read_plan(data_dir: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(data_dir.join("study_plan.json")).expect("Failed to read plan");
    serde_json::from_str(&raw).expect("Plan is not valid JSON")
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lamp").expect("Failed to find lamp binary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Daily Bible reading and memorization tracker",
        ));
}

#[test]
fn test_default_command_shows_starter_plan() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("诗篇 1"))
        .stdout(predicate::str::contains("约翰福音 3:16-16"))
        .stdout(predicate::str::contains("神爱世人"));

    // Starter plan is written on first start
    assert!(data_dir.join("study_plan.json").exists());
}

#[test]
fn test_verse_from_builtin_table_is_cached() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["verse", "诗篇", "23", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("诗篇 23:1"))
        .stdout(predicate::str::contains("耶和华是我的牧者，我必不至缺乏。"));

    let raw = fs::read_to_string(data_dir.join("verse_cache.json")).unwrap();
    let cache: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        cache["诗篇_23_1"].as_str(),
        Some("耶和华是我的牧者，我必不至缺乏。")
    );
}

#[test]
fn test_cached_verse_is_served_from_cache() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();
    fs::write(
        data_dir.join("verse_cache.json"),
        r#"{"创世记_1_1": "起初，神创造天地。"}"#,
    )
    .unwrap();

    lamp(data_dir)
        .args(["verse", "创世记", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("起初，神创造天地。"));
}

#[test]
fn test_offline_unknown_verse_placeholder() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["verse", "创世记", "1", "1", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("创世记 1:1-3"))
        .stdout(predicate::str::contains("暂时无法获取"));

    // Offline placeholders are not cached
    let cache = data_dir.join("verse_cache.json");
    if cache.exists() {
        let raw = fs::read_to_string(&cache).unwrap();
        assert!(!raw.contains("创世记_1_1_3"));
    }
}

#[test]
fn test_verse_unknown_book_fails() {
    let temp_dir = setup_test_dir();

    lamp(temp_dir.path())
        .args(["verse", "Genesis", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown book"));
}

#[test]
fn test_books_and_chapters() {
    let temp_dir = setup_test_dir();

    lamp(temp_dir.path())
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("创世记 (50)"))
        .stdout(predicate::str::contains("启示录 (22)"));

    lamp(temp_dir.path())
        .args(["chapters", "诗篇"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150"));
}

#[test]
fn test_reading_add_and_duplicate() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["reading", "add", "马太福音", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 马太福音 5"));

    lamp(data_dir)
        .args(["reading", "add", "马太福音", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("无法添加阅读章节"));

    let plan = read_plan(data_dir);
    assert_eq!(plan["reading_passages"].as_array().unwrap().len(), 2);

    lamp(data_dir)
        .args(["reading", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. 马太福音 5"));
}

#[test]
fn test_reading_invalid_chapter_rejected() {
    let temp_dir = setup_test_dir();

    lamp(temp_dir.path())
        .args(["reading", "add", "犹大书", "2"])
        .assert()
        .failure();
}

#[test]
fn test_reading_remove_out_of_range() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["reading", "remove", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("无法删除所选章节"));

    lamp(data_dir)
        .args(["reading", "remove", "0"])
        .assert()
        .failure();

    lamp(data_dir)
        .args(["reading", "remove", "1"])
        .assert()
        .success();

    let plan = read_plan(data_dir);
    assert!(plan["reading_passages"].as_array().unwrap().is_empty());
}

#[test]
fn test_memorize_add_set_text_and_remove() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["memorize", "add", "箴言", "3", "5", "--end", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("箴言 3:5-6"));

    lamp(data_dir)
        .args(["memorize", "set-text", "2", "我的抄录"])
        .assert()
        .success();

    let plan = read_plan(data_dir);
    let verses = plan["memorization_verses"].as_array().unwrap();
    assert_eq!(verses.len(), 2);
    assert_eq!(verses[1]["custom_text"].as_str(), Some("我的抄录"));
    assert_eq!(verses[1]["verse_end"].as_u64(), Some(6));

    lamp(data_dir)
        .args(["memorize", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. 箴言 3:5-6 *"));

    lamp(data_dir)
        .args(["memorize", "remove", "1"])
        .assert()
        .success();

    let plan = read_plan(data_dir);
    assert_eq!(plan["memorization_verses"].as_array().unwrap().len(), 1);
}

#[test]
fn test_memorize_invalid_range_rejected() {
    let temp_dir = setup_test_dir();

    lamp(temp_dir.path())
        .args(["memorize", "add", "诗篇", "23", "4", "--end", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("无法添加背诵经文"));
}

#[test]
fn test_today_with_empty_rotation() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["memorize", "remove", "1"])
        .assert()
        .success();

    lamp(data_dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("未设置背诵经文"));
}

#[test]
fn test_today_prefers_custom_text() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    lamp(data_dir)
        .args(["memorize", "set-text", "1", "自己背的版本"])
        .assert()
        .success();

    lamp(data_dir)
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("自己背的版本"))
        .stdout(predicate::str::contains("(custom text)"));
}
