use crate::support::{stdout_json, TestVault};
use predicates::prelude::*;

// ============================================================================
// Add command tests
// ============================================================================

#[test]
fn test_add_prepends_by_default() {
    let vault = TestVault::with_todo("- [ ] first\n");

    vault
        .tickoff()
        .args(["add", "buy", "bread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo to Todo.md."));

    assert_eq!(vault.read("Todo.md"), "- [ ] buy bread\n- [ ] first\n");
}

#[test]
fn test_add_prepends_after_front_matter() {
    let vault = TestVault::with_todo("---\ntags: [todo]\n---\n- [ ] first\n");

    vault.tickoff().args(["add", "zeroth"]).assert().success();

    assert_eq!(
        vault.read("Todo.md"),
        "---\ntags: [todo]\n---\n- [ ] zeroth\n- [ ] first\n"
    );
}

#[test]
fn test_add_append_flag() {
    let vault = TestVault::with_todo("- [ ] a\n");

    vault
        .tickoff()
        .args(["add", "--position", "append", "b"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "- [ ] a\n\n- [ ] b\n");
}

#[test]
fn test_add_append_after_unterminated_line() {
    let vault = TestVault::with_todo("# List");

    vault
        .tickoff()
        .args(["add", "--position", "append", "new"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "# List\n\n- [ ] new\n");
}

#[test]
fn test_add_after_front_matter_closing_at_end_of_file() {
    let vault = TestVault::with_todo("---\na: 1\n---");

    vault.tickoff().args(["add", "one"]).assert().success();
    vault.tickoff().args(["add", "two"]).assert().success();

    assert_eq!(vault.read("Todo.md"), "---\na: 1\n---\n- [ ] two\n- [ ] one\n");
}

#[test]
fn test_add_append_from_settings() {
    let vault = TestVault::with_todo("");
    vault.set("insert_position", "append");

    vault.tickoff().args(["add", "only"]).assert().success();

    assert_eq!(vault.read("Todo.md"), "- [ ] only\n");
}

#[test]
fn test_add_to_other_note() {
    let vault = TestVault::with_todo("");
    vault.write("Inbox.md", "# Inbox\n");

    vault
        .tickoff()
        .args(["add", "--note", "Inbox", "triage"])
        .assert()
        .success();

    assert_eq!(vault.read("Inbox.md"), "- [ ] triage\n# Inbox\n");
    assert_eq!(vault.read("Todo.md"), "");
}

#[test]
fn test_add_empty_body_is_informational() {
    let vault = TestVault::with_todo("- [ ] keep\n");

    vault
        .tickoff()
        .args(["add", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to add"));

    assert_eq!(vault.read("Todo.md"), "- [ ] keep\n");
}

#[test]
fn test_add_invalid_position_is_usage_error() {
    let vault = TestVault::with_todo("");

    vault
        .tickoff()
        .args(["add", "--position", "middle", "x"])
        .assert()
        .code(2);

    assert_eq!(vault.read("Todo.md"), "");
}

#[test]
fn test_add_missing_todo_note_is_not_created() {
    let vault = TestVault::new();

    vault.tickoff().args(["add", "x"]).assert().code(3);

    assert!(!vault.root().join("Todo.md").exists());
}

#[test]
fn test_add_json_output() {
    let vault = TestVault::with_todo("");

    let output = vault
        .tickoff()
        .args(["--format", "json", "add", "--position", "append", "x"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "added");
    assert_eq!(json["position"], "append");
}
