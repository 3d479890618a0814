//! Event handling: resolve, read, run a pass, write, notify
//!
//! # Invariants
//! - Settings are a snapshot taken at construction; a pass never observes a
//!   settings change.
//! - Each read-modify-write cycle holds the document's lock.
//! - A pass and the automatic reorder that follows it are applied in memory
//!   and written once, so a failed write leaves the document as it was.
//! - Nothing is written when a pass leaves the text unchanged.

mod event;

use std::borrow::Cow;
use std::sync::{Arc, PoisonError};
use std::time::Instant;

use tracing::debug;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{Result, TickoffError};
use crate::notice::{Notice, Notifier};
use crate::todo::{self, InsertPosition};
use crate::trace_time;
use crate::vault::{DocumentHandle, DocumentHost, DocumentLocks};

pub use event::{Event, Outcome};

/// Applies checklist passes to documents owned by a host
pub struct TodoService<H> {
    host: H,
    settings: Settings,
    clock: Box<dyn Clock>,
    notifier: Arc<dyn Notifier>,
    locks: DocumentLocks,
}

impl<H: DocumentHost> TodoService<H> {
    pub fn new(
        host: H,
        settings: Settings,
        clock: impl Clock + 'static,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            host,
            settings,
            clock: Box::new(clock),
            notifier,
            locks: DocumentLocks::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Handle one event. Failures are reported as error notices and returned.
    pub fn handle(&self, event: Event) -> Result<Outcome> {
        let result = match event {
            Event::Clean { note } => self.clean(note.as_deref()),
            Event::Add {
                body,
                note,
                position,
            } => self.add(&body, note.as_deref(), position),
            Event::Reorder { note } => self.reorder(note.as_deref()),
            Event::DocumentChanged { note } => self.document_changed(&note),
        };

        if let Err(err) = &result {
            self.notifier.notify(Notice::error(err.to_string()));
        }
        result
    }

    /// Remove completed todos older than the threshold
    #[tracing::instrument(skip(self))]
    pub fn clean(&self, note: Option<&str>) -> Result<Outcome> {
        let doc = self.resolve(note)?;
        let lock = self.locks.lock_for(doc.path());
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let start = Instant::now();
        let raw = self.host.read(&doc)?;
        let threshold = self.settings.days_threshold;
        let outcome = todo::clean(&raw, threshold, self.clock.today());
        trace_time!(start, "clean_pass", removed = outcome.removed);

        if outcome.is_unchanged() {
            self.notifier
                .notify(Notice::info("Nothing to clean: no matching lines."));
            return Ok(Outcome::NothingToDo {
                note: doc.name().to_string(),
            });
        }

        let removed = outcome.removed;
        let (text, reordered) = self.with_auto_move(outcome.into_owned());
        self.host.write(&doc, &text)?;

        self.notifier.notify(Notice::success(format!(
            "Removed {removed} task(s) completed more than {threshold} day(s) ago."
        )));
        Ok(Outcome::Cleaned {
            note: doc.name().to_string(),
            removed,
            reordered,
        })
    }

    /// Insert a new unchecked todo
    #[tracing::instrument(skip(self, body), fields(body_len = body.len()))]
    pub fn add(
        &self,
        body: &str,
        note: Option<&str>,
        position: Option<InsertPosition>,
    ) -> Result<Outcome> {
        let doc = self.resolve(note)?;
        if body.trim().is_empty() {
            self.notifier
                .notify(Notice::info("Nothing to add: todo text is empty."));
            return Ok(Outcome::NothingToDo {
                note: doc.name().to_string(),
            });
        }

        let position = position.unwrap_or(self.settings.insert_position);
        let lock = self.locks.lock_for(doc.path());
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let raw = self.host.read(&doc)?;
        let inserted = todo::insert_with_header(&raw, body, position);
        let (text, reordered) = self.with_auto_move(inserted);
        self.host.write(&doc, &text)?;

        self.notifier
            .notify(Notice::success(format!("Added todo to {}.", doc.name())));
        Ok(Outcome::Added {
            note: doc.name().to_string(),
            position,
            reordered,
        })
    }

    /// Move completed todos below open ones
    #[tracing::instrument(skip(self))]
    pub fn reorder(&self, note: Option<&str>) -> Result<Outcome> {
        let doc = self.resolve(note)?;
        let lock = self.locks.lock_for(doc.path());
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let raw = self.host.read(&doc)?;
        if self.write_reordered(&doc, &raw)? {
            self.notifier.notify(Notice::success(format!(
                "Moved completed todos to the bottom of {}.",
                doc.name()
            )));
            Ok(Outcome::Reordered {
                note: doc.name().to_string(),
            })
        } else {
            self.notifier
                .notify(Notice::info("Nothing to reorder: todos already in order."));
            Ok(Outcome::NothingToDo {
                note: doc.name().to_string(),
            })
        }
    }

    /// React to an outside modification of `note`
    #[tracing::instrument(skip(self))]
    pub fn document_changed(&self, note: &str) -> Result<Outcome> {
        let doc = self.resolve(Some(note))?;
        if !self.settings.auto_move_checked {
            debug!(note = doc.name(), "auto_move_disabled");
            return Ok(Outcome::Skipped {
                note: doc.name().to_string(),
            });
        }

        let lock = self.locks.lock_for(doc.path());
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let raw = self.host.read(&doc)?;
        if self.write_reordered(&doc, &raw)? {
            Ok(Outcome::Reordered {
                note: doc.name().to_string(),
            })
        } else {
            Ok(Outcome::NothingToDo {
                note: doc.name().to_string(),
            })
        }
    }

    fn resolve(&self, note: Option<&str>) -> Result<DocumentHandle> {
        let identifier = note.unwrap_or(&self.settings.todo_note);
        self.host
            .resolve(identifier)?
            .ok_or_else(|| TickoffError::document_not_found(identifier))
    }

    /// Apply the change event that follows our own edit, before it is
    /// written. Returns the text to write and whether it was reordered.
    fn with_auto_move(&self, text: String) -> (String, bool) {
        if !self.settings.auto_move_checked {
            return (text, false);
        }
        let reordered = match todo::reorder(&text) {
            Cow::Owned(reordered) => Some(reordered),
            Cow::Borrowed(_) => None,
        };
        match reordered {
            Some(reordered) => {
                debug!("reordered");
                (reordered, true)
            }
            None => (text, false),
        }
    }

    /// Write the reordered text if it differs. Caller holds the lock.
    fn write_reordered(&self, doc: &DocumentHandle, text: &str) -> Result<bool> {
        match todo::reorder(text) {
            Cow::Borrowed(_) => Ok(false),
            Cow::Owned(reordered) => {
                self.host.write(doc, &reordered)?;
                debug!(note = doc.name(), "reordered");
                Ok(true)
            }
        }
    }
}
