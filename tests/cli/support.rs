use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// A throwaway vault with its own settings directory
pub struct TestVault {
    notes: TempDir,
    config: TempDir,
}

impl TestVault {
    pub fn new() -> Self {
        Self {
            notes: tempdir().unwrap(),
            config: tempdir().unwrap(),
        }
    }

    /// Vault with `Todo.md` holding `text`
    pub fn with_todo(text: &str) -> Self {
        let vault = Self::new();
        vault.write("Todo.md", text);
        vault
    }

    pub fn root(&self) -> &Path {
        self.notes.path()
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config.path().join("config.toml")
    }

    pub fn write(&self, name: &str, text: &str) {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.root().join(name)).unwrap()
    }

    /// Get a Command for tickoff bound to this vault
    pub fn tickoff(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tickoff");
        cmd.env_remove("TICKOFF_LOG")
            .env_remove("TICKOFF_VAULT")
            .env("TICKOFF_CONFIG_DIR", self.config.path())
            .arg("--vault")
            .arg(self.root());
        cmd
    }

    /// Change one setting through the CLI
    pub fn set(&self, key: &str, value: &str) {
        self.tickoff()
            .args(["config", "set", key, value])
            .assert()
            .success();
    }
}

/// Parse command stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
