use crate::support::TestVault;
use predicates::prelude::*;

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_log_level_debug_writes_to_stderr() {
    let vault = TestVault::with_todo("- [ ] a\n");

    vault
        .tickoff()
        .args(["--log-level", "debug", "reorder"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_hides_debug_messages() {
    let vault = TestVault::with_todo("- [ ] a\n");

    vault
        .tickoff()
        .arg("reorder")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let vault = TestVault::with_todo("- [ ] a\n");

    vault
        .tickoff()
        .args(["--verbose", "reorder"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_vault"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let vault = TestVault::with_todo("- [ ] a\n");

    let output = vault
        .tickoff()
        .args(["--log-level", "debug", "--log-json", "reorder"])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("level").is_some());
}

#[test]
fn test_env_var_overrides_flags() {
    let vault = TestVault::with_todo("- [ ] a\n");

    vault
        .tickoff()
        .env("TICKOFF_LOG", "tickoff=debug")
        .arg("reorder")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
