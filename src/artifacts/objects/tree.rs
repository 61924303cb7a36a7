//! Tree object encoding
//!
//! A tree is an ordered list of `<mode> <name>\0<hash>` records concatenated
//! with no separator between entries. The format relies entirely on the
//! embedded hash having a fixed, known length; it is not self-describing.
//! Decoding a tree back into entries is intentionally not provided for that
//! reason, and the store hands trees back as raw objects.

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::GitObject;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;

/// A single tree record: mode, entry name and blob hash
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TreeEntry {
    pub mode: String,
    pub name: String,
    pub hash: String,
}

/// Ordered sequence of tree entries
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    /// Build a flat tree from staged index entries, in index order
    ///
    /// The entry name is the final component of the staged path; nested
    /// directories are not expanded into subtrees.
    pub fn from_index(entries: &[IndexEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|entry| {
                let name = entry
                    .path
                    .rsplit('/')
                    .next()
                    .unwrap_or(entry.path.as_str())
                    .to_string();

                TreeEntry::new(entry.mode.clone(), name, entry.hash.clone())
            })
            .collect();

        Tree { entries }
    }

    pub fn add_entry(&mut self, entry: TreeEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Serialize the tree body, per entry in list order
    pub fn to_content(&self) -> Bytes {
        let mut content = Vec::new();

        for entry in &self.entries {
            content.extend_from_slice(entry.mode.as_bytes());
            content.push(b' ');
            content.extend_from_slice(entry.name.as_bytes());
            content.push(b'\0');
            content.extend_from_slice(entry.hash.as_bytes());
        }

        Bytes::from(content)
    }

    pub fn to_object(&self) -> GitObject {
        GitObject::new(ObjectType::Tree, self.to_content())
    }
}
