//! File-system vault: a directory tree of Markdown notes

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::{DocumentHandle, DocumentHost};
use crate::error::{Result, TickoffError};

const NOTE_EXTENSION: &str = "md";
const TEMP_SUFFIX: &str = ".tickoff.tmp";

/// Notes stored as files under one root directory
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    /// Open a vault rooted at an existing directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TickoffError::VaultNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn handle_for(&self, path: PathBuf) -> DocumentHandle {
        let name = path
            .strip_prefix(&self.root)
            .unwrap_or(&path)
            .to_string_lossy()
            .replace('\\', "/");
        DocumentHandle::new(name, path)
    }

    /// `identifier` as a path relative to the root, trying `.md` when it has
    /// no extension.
    fn direct_candidates(&self, identifier: &str) -> Vec<PathBuf> {
        let direct = self.root.join(identifier);
        let mut candidates = vec![direct.clone()];
        if direct.extension().is_none() {
            candidates.push(direct.with_extension(NOTE_EXTENSION));
        }
        candidates
    }

    /// First file anywhere in the vault whose name matches, in sorted order
    fn search_by_file_name(&self, identifier: &str) -> Option<PathBuf> {
        let with_ext = format!("{identifier}.{NOTE_EXTENSION}");
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| {
                let name = entry.file_name().to_string_lossy();
                name == identifier || name == with_ext.as_str()
            })
            .map(DirEntry::into_path)
    }
}

impl DocumentHost for FsVault {
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    fn resolve(&self, identifier: &str) -> Result<Option<DocumentHandle>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Ok(None);
        }
        if escapes_root(Path::new(identifier)) {
            return Err(TickoffError::invalid_value("note identifier", identifier));
        }

        if let Some(path) = self
            .direct_candidates(identifier)
            .into_iter()
            .find(|p| p.is_file())
        {
            debug!(path = %path.display(), "resolved_direct");
            return Ok(Some(self.handle_for(path)));
        }

        let found = self.search_by_file_name(identifier);
        debug!(found = found.is_some(), "resolved_by_name");
        Ok(found.map(|path| self.handle_for(path)))
    }

    fn read(&self, doc: &DocumentHandle) -> Result<String> {
        fs::read_to_string(doc.path())
            .map_err(|e| TickoffError::io_operation("read", doc.name(), e))
    }

    fn write(&self, doc: &DocumentHandle, text: &str) -> Result<()> {
        let path = doc.path();
        let file_name = path
            .file_name()
            .ok_or_else(|| TickoffError::invalid_value("note path", path.display()))?;
        let mut temp_name = std::ffi::OsString::from(".");
        temp_name.push(file_name);
        temp_name.push(TEMP_SUFFIX);
        let temp_path = path.with_file_name(temp_name);

        let written = fs::write(&temp_path, text).and_then(|()| fs::rename(&temp_path, path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(TickoffError::io_operation("write", doc.name(), e));
        }

        debug!(note = doc.name(), bytes = text.len(), "write_note");
        Ok(())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn escapes_root(path: &Path) -> bool {
    path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
