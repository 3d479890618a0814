//! Settings for tickoff
//!
//! Settings are stored as TOML, loaded once per process and handed to the
//! service as an immutable snapshot. They only change through
//! [`Settings::set`] followed by [`Settings::save`].

pub mod location;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{Result, TickoffError};
use crate::todo::InsertPosition;

pub use location::{settings_path, CONFIG_DIR_ENV_VAR, CONFIG_FILE};
pub use types::{Settings, DEFAULT_DAYS_THRESHOLD, DEFAULT_TODO_NOTE, SETTING_KEYS};

impl Settings {
    /// Load settings from a file; a missing file yields the defaults
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("settings file missing, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TickoffError::io_operation("read settings", path.display(), e))?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                TickoffError::io_operation("create config directory", parent.display(), e)
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| TickoffError::io_operation("write settings", path.display(), e))?;
        Ok(())
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.todo_note.trim().is_empty() {
            bail_invalid!("todo_note", "(empty)");
        }
        Ok(())
    }

    /// Read one setting as a display string
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match normalize_key(key)? {
            "days_threshold" => self.days_threshold.to_string(),
            "todo_note" => self.todo_note.clone(),
            "insert_position" => self.insert_position.to_string(),
            "auto_move_checked" => self.auto_move_checked.to_string(),
            _ => unreachable!("normalize_key only returns known keys"),
        };
        Ok(value)
    }

    /// Update one setting from a string value.
    ///
    /// The threshold must be a non-negative integer; invalid input leaves the
    /// settings untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match normalize_key(key)? {
            "days_threshold" => {
                let Ok(days) = value.parse::<u32>() else {
                    bail_invalid!("days_threshold (expected a non-negative integer)", value);
                };
                self.days_threshold = days;
            }
            "todo_note" => {
                if value.is_empty() {
                    bail_invalid!("todo_note", "(empty)");
                }
                self.todo_note = value.to_string();
            }
            "insert_position" => {
                self.insert_position = value.parse::<InsertPosition>()?;
            }
            "auto_move_checked" => {
                let Ok(flag) = value.to_lowercase().parse::<bool>() else {
                    bail_invalid!("auto_move_checked (expected true or false)", value);
                };
                self.auto_move_checked = flag;
            }
            _ => unreachable!("normalize_key only returns known keys"),
        }
        Ok(())
    }
}

/// Map a user-supplied key (snake_case, kebab-case or legacy camelCase) to
/// its canonical name
fn normalize_key(key: &str) -> Result<&'static str> {
    let canonical = match key.trim() {
        "days_threshold" | "days-threshold" | "daysThreshold" => "days_threshold",
        "todo_note" | "todo-note" | "todoNoteFilename" => "todo_note",
        "insert_position" | "insert-position" | "insertPosition" => "insert_position",
        "auto_move_checked" | "auto-move-checked" | "autoMoveChecked" => "auto_move_checked",
        other => {
            return Err(TickoffError::UnknownSetting {
                key: other.to_string(),
                supported: SETTING_KEYS.join(", "),
            })
        }
    };
    Ok(canonical)
}
