//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::todo::InsertPosition;

/// Default grace window for completed todos, in days
pub const DEFAULT_DAYS_THRESHOLD: u32 = 5;

/// Default target note for `add` and `clean`
pub const DEFAULT_TODO_NOTE: &str = "Todo.md";

/// Every settable key, in display order
pub const SETTING_KEYS: &[&str] = &[
    "days_threshold",
    "todo_note",
    "insert_position",
    "auto_move_checked",
];

/// User settings
///
/// Older JSON-style keys (`daysThreshold`, `todoNoteFilename`, ...) are
/// accepted as aliases when loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Keep items completed within the last N days
    #[serde(default = "default_days_threshold", alias = "daysThreshold")]
    pub days_threshold: u32,

    /// Note that receives new todos and is cleaned by default
    #[serde(default = "default_todo_note", alias = "todoNoteFilename")]
    pub todo_note: String,

    /// Where `add` places new todos
    #[serde(default, alias = "insertPosition")]
    pub insert_position: InsertPosition,

    /// Move completed todos below open ones after every change
    #[serde(default, alias = "autoMoveChecked")]
    pub auto_move_checked: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            days_threshold: DEFAULT_DAYS_THRESHOLD,
            todo_note: DEFAULT_TODO_NOTE.to_string(),
            insert_position: InsertPosition::default(),
            auto_move_checked: false,
        }
    }
}

fn default_days_threshold() -> u32 {
    DEFAULT_DAYS_THRESHOLD
}

fn default_todo_note() -> String {
    DEFAULT_TODO_NOTE.to_string()
}
