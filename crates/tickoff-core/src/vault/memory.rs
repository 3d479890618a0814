//! In-memory host, for embedding and tests

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use super::{DocumentHandle, DocumentHost};
use crate::error::{Result, TickoffError};

/// Documents kept in a map keyed by name
#[derive(Debug, Default)]
pub struct MemoryHost {
    documents: Mutex<BTreeMap<String, String>>,
    read_only: bool,
    writes: Mutex<usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document
    pub fn with_document(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), text.into());
        self
    }

    /// Reject every write, simulating a host that refuses modifications
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Current text of a document
    pub fn get(&self, name: &str) -> Option<String> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentHost for MemoryHost {
    fn resolve(&self, identifier: &str) -> Result<Option<DocumentHandle>> {
        let documents = self.documents.lock().unwrap_or_else(PoisonError::into_inner);
        let with_ext = format!("{identifier}.md");
        let found = [identifier, with_ext.as_str()]
            .into_iter()
            .find(|name| documents.contains_key(*name));
        Ok(found.map(|name| DocumentHandle::new(name, name)))
    }

    fn read(&self, doc: &DocumentHandle) -> Result<String> {
        self.get(doc.name())
            .ok_or_else(|| TickoffError::document_not_found(doc.name()))
    }

    fn write(&self, doc: &DocumentHandle, text: &str) -> Result<()> {
        if self.read_only {
            return Err(TickoffError::io_operation(
                "write",
                doc.name(),
                "document is read-only",
            ));
        }
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(doc.name().to_string(), text.to_string());
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
