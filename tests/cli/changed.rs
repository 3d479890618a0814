use crate::support::TestVault;
use predicates::prelude::*;

// ============================================================================
// Document change events
// ============================================================================

#[test]
fn test_changed_without_auto_move_leaves_note() {
    let vault = TestVault::with_todo("- [x] done\n- [ ] open\n");

    vault
        .tickoff()
        .args(["changed", "Todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("auto_move_checked is off"));

    assert_eq!(vault.read("Todo.md"), "- [x] done\n- [ ] open\n");
}

#[test]
fn test_changed_with_auto_move_reorders() {
    let vault = TestVault::with_todo("- [x] done\n- [ ] open\n");
    vault.set("auto_move_checked", "true");

    vault.tickoff().args(["changed", "Todo.md"]).assert().success();

    assert_eq!(vault.read("Todo.md"), "- [ ] open\n- [x] done\n");
}

#[test]
fn test_auto_move_follows_add() {
    let vault = TestVault::with_todo("- [x] done\n");
    vault.set("auto_move_checked", "true");

    vault
        .tickoff()
        .args(["add", "--position", "append", "later"])
        .assert()
        .success();

    assert_eq!(vault.read("Todo.md"), "\n- [ ] later\n- [x] done\n");
}

#[test]
fn test_changed_requires_identifier() {
    let vault = TestVault::new();

    vault
        .tickoff()
        .args(["changed", " "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("note identifier"));
}
