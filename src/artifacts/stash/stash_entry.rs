use crate::artifacts::index::index_entry::IndexEntry;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A captured index snapshot on the stash stack
///
/// Addressing is positional (`stash@{N}` indexes the current order, newest
/// first), so dropping an entry reindexes everything behind it. The `id`
/// field is assigned from a monotonic counter at push time and gives each
/// entry a stable identity that survives drops; it is never reused and does
/// not participate in addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StashEntry {
    pub id: u64,
    pub message: String,
    pub entries: Vec<IndexEntry>,
    pub branch: String,
}
