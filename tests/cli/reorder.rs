use crate::support::{stdout_json, TestVault};
use predicates::prelude::*;

// ============================================================================
// Reorder command tests
// ============================================================================

#[test]
fn test_reorder_moves_checked_below_open() {
    let vault = TestVault::with_todo("# Notes\n- [x] a\n- [ ] b\n");

    vault
        .tickoff()
        .arg("reorder")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Moved completed todos to the bottom of Todo.md.",
        ));

    assert_eq!(vault.read("Todo.md"), "# Notes\n- [ ] b\n- [x] a\n");
}

#[test]
fn test_reorder_twice_is_noop() {
    let vault = TestVault::with_todo("- [x] a\n- [ ] b\n");

    vault.tickoff().arg("reorder").assert().success();
    vault
        .tickoff()
        .arg("reorder")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to reorder"));

    assert_eq!(vault.read("Todo.md"), "- [ ] b\n- [x] a\n");
}

#[test]
fn test_reorder_json_nothing_to_do() {
    let vault = TestVault::with_todo("- [ ] open\n");

    let output = vault
        .tickoff()
        .args(["--format", "json", "reorder"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["outcome"], "nothing_to_do");
    assert_eq!(json["notices"][0]["level"], "info");
}
