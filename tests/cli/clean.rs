use crate::support::{stdout_json, TestVault};
use predicates::prelude::*;

// ============================================================================
// Clean command tests
// ============================================================================

#[test]
fn test_clean_removes_expired_task() {
    let vault = TestVault::with_todo("- [x] buy milk ✅ 2020-01-01\n- [ ] call mom\n");

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed 1 task(s) completed more than 5 day(s) ago.",
        ));

    assert_eq!(vault.read("Todo.md"), "- [ ] call mom\n");
}

#[test]
fn test_clean_keeps_recent_and_dateless_tasks() {
    let text = "# Week\n- [x] shipped ✅ 2020-01-08\n- [X] no date\n- [ ] open\n";
    let vault = TestVault::with_todo(text);

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));

    assert_eq!(vault.read("Todo.md"), text);
}

#[test]
fn test_clean_cutoff_day_is_inclusive() {
    let vault = TestVault::with_todo("- [x] edge ✅ 2020-01-05\n- [x] inside ✅ 2020-01-06\n");

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "clean"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "- [x] inside ✅ 2020-01-06\n");
}

#[test]
fn test_clean_zero_threshold_removes_every_checked_line() {
    let vault = TestVault::with_todo("- [x] task a\n- [ ] task b\n");
    vault.set("days_threshold", "0");

    vault.tickoff().arg("clean").assert().success();

    assert_eq!(vault.read("Todo.md"), "- [ ] task b\n");
}

#[test]
fn test_clean_named_note_in_subfolder() {
    let vault = TestVault::new();
    vault.write("areas/Home.md", "- [x] fix tap ✅ 2019-12-01\n- [ ] paint\n");

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "clean", "Home"])
        .assert()
        .success();

    assert_eq!(vault.read("areas/Home.md"), "- [ ] paint\n");
}

#[test]
fn test_clean_json_output() {
    let vault = TestVault::with_todo("- [x] buy milk ✅ 2020-01-01\n- [ ] call mom\n");

    let output = vault
        .tickoff()
        .args(["--format", "json", "--today", "2020-01-10", "clean"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "cleaned");
    assert_eq!(json["note"], "Todo.md");
    assert_eq!(json["removed"], 1);
    assert_eq!(json["reordered"], false);
    assert_eq!(json["notices"][0]["level"], "success");
}

#[test]
fn test_clean_missing_note_exit_code() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["clean", "Missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note not found: Missing"));

    assert!(!vault.root().join("Missing.md").exists());
}

#[test]
fn test_clean_missing_note_json_error() {
    let vault = TestVault::new();

    let output = vault
        .tickoff()
        .args(["--format", "json", "clean"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "document_not_found");
    assert_eq!(err["error"]["code"], 3);
}

#[test]
fn test_clean_quiet_prints_nothing() {
    let vault = TestVault::with_todo("- [x] old ✅ 2019-01-01\n");

    vault
        .tickoff()
        .args(["--quiet", "--today", "2020-01-10", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(vault.read("Todo.md"), "");
}
