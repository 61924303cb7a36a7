//! Object identifier (SHA-256 hash)
//!
//! Object ids are 64-character hexadecimal strings computed over the full
//! encoded form of an object (header included). They uniquely identify all
//! objects in the store.
//!
//! ## Storage
//!
//! Objects are stored in `objects/<first-2-chars>/<remaining-62-chars>`,
//! bounding the fan-out of any single directory.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Validated hex-encoded SHA-256 object identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string
    ///
    /// Fails when the input is not exactly 64 ASCII hex digits.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Build an id from a raw SHA-256 digest
    pub fn from_digest(digest: &[u8]) -> Self {
        let hex = digest.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex)
    }

    /// Convert to the sharded storage path `xx/yyyy...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Abbreviated form used in command output
    pub fn to_short(&self) -> &str {
        &self.0[..8]
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
