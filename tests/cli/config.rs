use crate::support::{stdout_json, TestVault};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("days_threshold = 5"))
        .stdout(predicate::str::contains("todo_note = Todo.md"))
        .stdout(predicate::str::contains("insert_position = prepend"))
        .stdout(predicate::str::contains("auto_move_checked = false"));
}

#[test]
fn test_config_set_then_get() {
    let vault = TestVault::new();
    vault.set("days_threshold", "7");

    vault
        .tickoff()
        .args(["config", "get", "days_threshold"])
        .assert()
        .success()
        .stdout("7\n");
    assert!(vault.settings_file().exists());
}

#[test]
fn test_config_rejects_negative_threshold() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["config", "set", "days_threshold", "-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-negative integer"));

    assert!(!vault.settings_file().exists());
}

#[test]
fn test_config_rejected_value_keeps_previous() {
    let vault = TestVault::new();
    vault.set("days_threshold", "9");

    vault
        .tickoff()
        .args(["config", "set", "days_threshold", "soon"])
        .assert()
        .code(2);

    vault
        .tickoff()
        .args(["config", "get", "days_threshold"])
        .assert()
        .stdout("9\n");
}

#[test]
fn test_config_unknown_key() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown setting: colour"));
}

#[test]
fn test_config_accepts_camel_case_file() {
    let vault = TestVault::with_todo("- [x] a ✅ 2020-01-08\n- [ ] b\n");
    fs::write(
        vault.settings_file(),
        "daysThreshold = 1\ntodoNoteFilename = \"Todo.md\"\n",
    )
    .unwrap();

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "clean"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "- [ ] b\n");
}

#[test]
fn test_config_path_points_into_config_dir() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_explicit_config_flag() {
    let vault = TestVault::with_todo("- [ ] a\n");
    let custom = vault.root().join("custom.toml");
    fs::write(&custom, "insert_position = \"append\"\n").unwrap();

    vault
        .tickoff()
        .arg("--config")
        .arg(&custom)
        .args(["add", "b"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "- [ ] a\n\n- [ ] b\n");
}

#[test]
fn test_config_show_json() {
    let vault = TestVault::new();
    vault.set("auto_move_checked", "true");

    let output = vault
        .tickoff()
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["settings"]["auto_move_checked"], true);
    assert_eq!(json["settings"]["days_threshold"], 5);
    assert_eq!(json["exists"], true);
}
