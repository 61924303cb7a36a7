//! Staging area (index)
//!
//! The index is an ordered sequence of entries where the path is the true
//! key: no two entries ever share a path. Re-adding a path replaces the old
//! entry and moves it to the end of iteration order (append-on-replace).
//! Order only matters for deterministic listing, never for correctness.
//!
//! Persistence is a whole-snapshot JSON overwrite; there is no incremental
//! log. `clear()` only empties memory — callers that want the cleared state
//! on disk must call `write_updates()` themselves.

use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index snapshot file
    path: Box<Path>,
    entries: Vec<IndexEntry>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted snapshot; a missing or empty file means an empty
    /// index.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let data = std::fs::read_to_string(&self.path)
            .context(format!("failed to read index at {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(());
        }

        self.entries = serde_json::from_str(&data)
            .context(format!("failed to parse index at {}", self.path.display()))?;

        Ok(())
    }

    /// Overwrite the on-disk snapshot with the in-memory state
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let data = serde_json::to_string(&self.entries)?;

        std::fs::write(&self.path, data)
            .context(format!("failed to write index at {}", self.path.display()))
    }

    /// Upsert by path: drop any entry with the same path, then append
    pub fn add(&mut self, entry: IndexEntry) {
        self.entries.retain(|existing| existing.path != entry.path);
        self.entries.push(entry);
    }

    pub fn remove(&mut self, path: &str) {
        self.entries.retain(|entry| entry.path != path);
    }

    pub fn entry(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn has(&self, path: &str) -> bool {
        self.entry(path).is_some()
    }

    /// Snapshot copy of the entries; internal state is never handed out
    pub fn entries(&self) -> Vec<IndexEntry> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the in-memory index; callers persist explicitly
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
