//! Stash stack
//!
//! A totally ordered LIFO stack of captured index snapshots, persisted as a
//! whole JSON snapshot. Position 0 is the most recent entry and `stash@{N}`
//! addresses the current order, so dropping an entry shifts every later
//! position down by one — callers must not cache indices across drops. Each
//! entry additionally carries a monotonic id assigned at push time; ids are
//! issued from a persisted counter and never reused, even after the entry
//! that held the highest id is dropped.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::stash::stash_entry::StashEntry;
use crate::errors::JotError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grammar for positional stash references
const STASH_REF_REGEX: &str = r"^stash@\{(\d+)\}$";

/// On-disk form of the stash: the issued-id counter and the stack
///
/// The counter records the next id to hand out, not the highest live id, so
/// ids stay unique even after the newest entry is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StashSnapshot {
    next_id: u64,
    entries: Vec<StashEntry>,
}

#[derive(Debug, Clone)]
pub struct StashStore {
    /// Path to the stash snapshot file
    path: Box<Path>,
    next_id: u64,
    entries: Vec<StashEntry>,
}

impl StashStore {
    pub fn new(path: Box<Path>) -> Self {
        StashStore {
            path,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.next_id = 0;
        self.entries.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let data = std::fs::read_to_string(&self.path)
            .context(format!("failed to read stash at {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(());
        }

        let snapshot: StashSnapshot = serde_json::from_str(&data)
            .context(format!("failed to parse stash at {}", self.path.display()))?;
        self.next_id = snapshot.next_id;
        self.entries = snapshot.entries;

        Ok(())
    }

    pub fn write_updates(&self) -> anyhow::Result<()> {
        let snapshot = StashSnapshot {
            next_id: self.next_id,
            entries: self.entries.clone(),
        };
        let data = serde_json::to_string(&snapshot)?;

        std::fs::write(&self.path, data)
            .context(format!("failed to write stash at {}", self.path.display()))
    }

    /// Capture a snapshot at position 0 and persist
    ///
    /// An empty snapshot is a reported no-op: nothing is pushed and `false`
    /// comes back, but it is not an error.
    pub fn push(
        &mut self,
        message: String,
        entries: Vec<IndexEntry>,
        branch: String,
    ) -> anyhow::Result<bool> {
        if entries.is_empty() {
            return Ok(false);
        }

        let entry = StashEntry::new(self.next_id, message, entries, branch);
        self.next_id += 1;
        self.entries.insert(0, entry);
        self.write_updates()?;

        Ok(true)
    }

    /// Entries newest-first
    pub fn list(&self) -> &[StashEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `stash@{N}` into a positional index; any other syntax is not
    /// found. The index is not bounds-checked here.
    pub fn resolve(&self, stash_ref: &str) -> Option<usize> {
        let pattern = regex::Regex::new(STASH_REF_REGEX).ok()?;
        let captures = pattern.captures(stash_ref)?;

        captures[1].parse::<usize>().ok()
    }

    /// Look up a stash entry by positional reference
    pub fn entry(&self, stash_ref: &str) -> anyhow::Result<&StashEntry> {
        self.resolve(stash_ref)
            .and_then(|position| self.entries.get(position))
            .ok_or_else(|| JotError::StashNotFound(stash_ref.to_string()).into())
    }

    /// Remove the referenced entry, persist the remainder and hand it back
    ///
    /// Every entry behind the removed position is reindexed one down.
    pub fn drop_entry(&mut self, stash_ref: &str) -> anyhow::Result<StashEntry> {
        let position = self
            .resolve(stash_ref)
            .filter(|position| *position < self.entries.len())
            .ok_or_else(|| JotError::StashNotFound(stash_ref.to_string()))?;

        let removed = self.entries.remove(position);
        self.write_updates()?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> (assert_fs::TempDir, StashStore) {
        let dir = assert_fs::TempDir::new().expect("Failed to create temp dir");
        let store = StashStore::new(dir.path().join("stash").into_boxed_path());
        (dir, store)
    }

    fn entries() -> Vec<IndexEntry> {
        vec![IndexEntry::new(
            "a.txt".to_string(),
            "1111".to_string(),
            "100644".to_string(),
            2,
        )]
    }

    fn messages(store: &StashStore) -> Vec<String> {
        store
            .list()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }

    #[test]
    fn pushes_stack_newest_first() {
        let (_dir, mut store) = store();

        for message in ["a", "b", "c"] {
            store
                .push(message.to_string(), entries(), "main".to_string())
                .unwrap();
        }

        assert_eq!(messages(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn empty_snapshot_is_a_reported_no_op() {
        let (_dir, mut store) = store();

        let pushed = store
            .push("wip".to_string(), Vec::new(), "main".to_string())
            .unwrap();

        assert!(!pushed);
        assert!(store.is_empty());
    }

    #[test]
    fn dropping_reindexes_later_entries() {
        let (_dir, mut store) = store();

        for message in ["a", "b", "c"] {
            store
                .push(message.to_string(), entries(), "main".to_string())
                .unwrap();
        }

        let removed = store.drop_entry("stash@{1}").unwrap();

        assert_eq!(removed.message, "b");
        assert_eq!(messages(&store), vec!["c", "a"]);
        assert_eq!(store.entry("stash@{1}").unwrap().message, "a");
    }

    #[test]
    fn ids_are_monotonic_and_survive_drops() {
        let (_dir, mut store) = store();

        for message in ["a", "b", "c"] {
            store
                .push(message.to_string(), entries(), "main".to_string())
                .unwrap();
        }

        // dropping the entry holding the highest id must not free that id
        store.drop_entry("stash@{0}").unwrap();
        store
            .push("d".to_string(), entries(), "main".to_string())
            .unwrap();

        let ids = store.list().iter().map(|entry| entry.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![3, 1, 0]);
    }

    #[test]
    fn id_counter_survives_reloading() {
        let (_dir, mut store) = store();
        store
            .push("a".to_string(), entries(), "main".to_string())
            .unwrap();
        store.drop_entry("stash@{0}").unwrap();

        let mut reloaded = StashStore::new(store.path().to_path_buf().into_boxed_path());
        reloaded.rehydrate().unwrap();
        reloaded
            .push("b".to_string(), entries(), "main".to_string())
            .unwrap();

        assert_eq!(reloaded.list()[0].id, 1);
    }

    #[test]
    fn malformed_references_resolve_to_not_found() {
        let (_dir, store) = store();

        assert_eq!(store.resolve("stash@{0"), None);
        assert_eq!(store.resolve("stash@{x}"), None);
        assert_eq!(store.resolve("HEAD"), None);
    }

    #[test]
    fn out_of_range_reference_is_not_found() {
        let (_dir, mut store) = store();
        store
            .push("a".to_string(), entries(), "main".to_string())
            .unwrap();

        assert!(store.entry("stash@{3}").is_err());
        assert!(store.drop_entry("stash@{3}").is_err());
    }

    #[test]
    fn snapshot_round_trips_through_disk() {
        let (_dir, mut store) = store();
        store
            .push("a".to_string(), entries(), "main".to_string())
            .unwrap();

        let mut reloaded = StashStore::new(store.path().to_path_buf().into_boxed_path());
        reloaded.rehydrate().unwrap();

        assert_eq!(reloaded.list(), store.list());
    }
}
