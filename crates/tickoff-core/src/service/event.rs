//! Events delivered by the host and the outcomes they produce

use serde::Serialize;

use crate::todo::InsertPosition;

/// Something the host asks the service to do.
///
/// `note: None` means the configured target note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Purge expired completed todos
    Clean { note: Option<String> },
    /// Insert a new unchecked todo
    Add {
        body: String,
        note: Option<String>,
        position: Option<InsertPosition>,
    },
    /// Move completed todos below open ones
    Reorder { note: Option<String> },
    /// A document was modified outside the service
    DocumentChanged { note: String },
}

/// What an event did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Cleaned {
        note: String,
        removed: usize,
        reordered: bool,
    },
    Added {
        note: String,
        position: InsertPosition,
        reordered: bool,
    },
    Reordered {
        note: String,
    },
    /// The pass ran but had nothing to change
    NothingToDo {
        note: String,
    },
    /// Change event ignored because automatic reordering is off
    Skipped {
        note: String,
    },
}

impl Outcome {
    /// Whether the document was written
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Outcome::Cleaned { .. } | Outcome::Added { .. } | Outcome::Reordered { .. }
        )
    }

    pub fn note(&self) -> &str {
        match self {
            Outcome::Cleaned { note, .. }
            | Outcome::Added { note, .. }
            | Outcome::Reordered { note }
            | Outcome::NothingToDo { note }
            | Outcome::Skipped { note } => note,
        }
    }
}
