//! Host boundary: resolving, reading and writing whole documents
//!
//! The rewrite passes only ever see text snapshots. Everything that touches
//! storage goes through [`DocumentHost`], and the service serializes
//! read-modify-write cycles per document with [`DocumentLocks`].

pub mod fs;
pub mod locks;
pub mod memory;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use fs::FsVault;
pub use locks::DocumentLocks;
pub use memory::MemoryHost;

/// A resolved document
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    name: String,
    path: PathBuf,
}

impl DocumentHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Display name (path relative to the vault)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Storage key; also the lock key
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Storage the service reads from and writes to
pub trait DocumentHost: Send + Sync {
    /// Resolve an identifier; `Ok(None)` when nothing matches.
    fn resolve(&self, identifier: &str) -> Result<Option<DocumentHandle>>;

    /// Read the full text of a document.
    fn read(&self, doc: &DocumentHandle) -> Result<String>;

    /// Atomically replace the full text of a document.
    fn write(&self, doc: &DocumentHandle, text: &str) -> Result<()>;
}
