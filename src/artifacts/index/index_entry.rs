use derive_new::new;
use serde::{Deserialize, Serialize};

/// A staged file record
///
/// `path` is the unique key within the index; the other fields describe the
/// staged blob. Entries are owned exclusively by the index and are cloned
/// into stash snapshots rather than shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    pub path: String,
    pub hash: String,
    pub mode: String,
    pub size: u64,
}
