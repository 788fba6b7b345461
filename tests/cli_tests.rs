//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn workspace(source: Option<&str>, text: Option<&str>) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    if let Some(source) = source {
        fs::write(dir.path().join("words.json"), source).expect("write words.json");
    }
    if let Some(text) = text {
        fs::write(dir.path().join("words.txt"), text).expect("write words.txt");
    }
    dir
}

fn update_words(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("update-words"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn read_text(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("words.txt")).expect("read words.txt")
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("update-words"));
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("update-words"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("update-words"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("words.json"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_merge_reports_count() {
    let dir = workspace(Some(r#"{"words": ["Apple", "banana"]}"#), Some("banana\nCherry\n"));

    update_words(&dir)
        .assert()
        .success()
        .stdout("updated all words. current word count: 3\n");
    assert_eq!(read_text(&dir), "apple\nbanana\ncherry\n");
}

#[test]
fn test_merge_twice_is_stable() {
    let dir = workspace(
        Some(r#"{"words": ["Zulu", "alpha", "Mike"], "language": "en"}"#),
        Some("mike\n\nBravo\r\nalpha  \n"),
    );

    update_words(&dir).assert().success();
    let first = read_text(&dir);
    assert_eq!(first, "alpha\nbravo\nmike\nzulu\n");

    update_words(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("current word count: 4"));
    similar_asserts::assert_eq!(read_text(&dir), first);
}

#[test]
fn test_malformed_source_fails_without_touching_text() {
    let original = "Banana\napple\n";
    let dir = workspace(Some(r#"{"words": ["oops""#), Some(original));

    update_words(&dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse word source"));
    assert_eq!(read_text(&dir), original);
}

#[test]
fn test_source_without_words_field_fails() {
    let original = "kiwi\n";
    let dir = workspace(Some(r#"{"entries": ["kiwi"]}"#), Some(original));

    update_words(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no \"words\" list"));
    assert_eq!(read_text(&dir), original);
}

#[test]
fn test_missing_source_fails() {
    let dir = workspace(None, Some("kiwi\n"));

    update_words(&dir)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("File not found").and(predicate::str::contains("words.json")),
        );
    assert_eq!(read_text(&dir), "kiwi\n");
}

#[test]
fn test_missing_text_fails_and_is_not_created() {
    let dir = workspace(Some(r#"{"words": ["kiwi"]}"#), None);

    update_words(&dir)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("File not found").and(predicate::str::contains("words.txt")),
        );
    assert!(!dir.path().join("words.txt").exists());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = workspace(Some(r#"{"words": ["a"]}"#), Some("b\n"));

    update_words(&dir)
        .arg("--verbose")
        .assert()
        .success()
        .stdout("updated all words. current word count: 2\n")
        .stderr(predicate::str::contains("canonical words"));
}
