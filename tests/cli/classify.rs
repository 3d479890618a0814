use crate::support::{stdout_json, TestVault};
use predicates::prelude::*;

// ============================================================================
// Classify command tests
// ============================================================================

#[test]
fn test_classify_human_output() {
    let vault = TestVault::with_todo("# Tasks\n- [ ] open\n- [x] old ✅ 2020-01-01\n");

    vault
        .tickoff()
        .args(["--today", "2020-01-10", "classify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("other"))
        .stdout(predicate::str::contains("unchecked"))
        .stdout(predicate::str::contains("checked 2020-01-01 expired"))
        .stdout(predicate::str::contains("2 todo line(s) in Todo.md"));

    // Read-only
    assert_eq!(
        vault.read("Todo.md"),
        "# Tasks\n- [ ] open\n- [x] old ✅ 2020-01-01\n"
    );
}

#[test]
fn test_classify_json_flags_invalid_dates() {
    let vault = TestVault::with_todo("- [x] bad ✅ 2023-02-29\n- [x] good ✅ 2020-01-09\n");

    let output = vault
        .tickoff()
        .args(["--format", "json", "--today", "2020-01-10", "classify"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["cutoff"], "2020-01-05");
    assert_eq!(json["todos"], 2);
    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["kind"], "checked");
    assert!(lines[0]["completed"].is_null());
    assert_eq!(lines[0]["expired"], false);
    assert_eq!(lines[1]["completed"], "2020-01-09");
    assert_eq!(lines[1]["expired"], false);
}
