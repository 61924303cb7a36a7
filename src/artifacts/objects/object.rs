//! Header-prefixed object codec
//!
//! Every stored object is encoded as `<kind> <size>\0<content>` where `size`
//! is the byte length of the content (not a character count, so non-ASCII
//! payloads stay correct). The object id is the SHA-256 of this full encoded
//! form, never of the raw content alone, so identical `(kind, content)` pairs
//! always share an address.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::JotError;
use bytes::Bytes;
use sha2::{Digest, Sha256};

/// Strict header grammar: lowercase kind, a space, decimal size, a NUL byte
const HEADER_REGEX: &str = r"^([a-z]+) ([0-9]+)\x00";

/// An immutable content-addressed object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitObject {
    kind: ObjectType,
    content: Bytes,
}

impl GitObject {
    pub fn new(kind: ObjectType, content: Bytes) -> Self {
        GitObject { kind, content }
    }

    pub fn kind(&self) -> ObjectType {
        self.kind
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Produce the canonical on-disk encoding `<kind> <size>\0<content>`
    pub fn encode(&self) -> Bytes {
        let header = format!("{} {}\0", self.kind.as_str(), self.content.len());

        let mut encoded = Vec::with_capacity(header.len() + self.content.len());
        encoded.extend_from_slice(header.as_bytes());
        encoded.extend_from_slice(&self.content);

        Bytes::from(encoded)
    }

    /// Parse an encoded object, enforcing the strict header grammar
    ///
    /// The declared size is part of the grammar but is not checked against
    /// the remaining byte count; the content is simply everything after the
    /// NUL terminator.
    pub fn decode(data: &[u8]) -> anyhow::Result<Self> {
        let header = regex::bytes::Regex::new(HEADER_REGEX)?;
        let captures = header
            .captures(data)
            .ok_or(JotError::InvalidObjectFormat)?;

        let kind = std::str::from_utf8(&captures[1])
            .map_err(|_| JotError::InvalidObjectFormat)?;
        let kind = ObjectType::try_from(kind).map_err(|_| JotError::InvalidObjectFormat)?;

        let content_start = captures
            .get(0)
            .ok_or(JotError::InvalidObjectFormat)?
            .end();

        Ok(GitObject::new(
            kind,
            Bytes::copy_from_slice(&data[content_start..]),
        ))
    }

    /// Compatibility path for objects written before the header format
    ///
    /// The kind is inferred from the raw content shape and the bytes are
    /// wrapped without hash verification, so the result is ambiguous by
    /// construction. Only the store's read path may reach for this, and only
    /// after a strict decode has failed.
    pub fn decode_legacy(data: &[u8]) -> Self {
        let kind = if data.starts_with(b"tree ") {
            ObjectType::Commit
        } else if data.contains(&b'\0') {
            ObjectType::Tree
        } else {
            ObjectType::Blob
        };

        GitObject::new(kind, Bytes::copy_from_slice(data))
    }

    /// Identity of the object: SHA-256 over the full encoded form
    pub fn object_id(&self) -> ObjectId {
        let mut hasher = Sha256::new();
        hasher.update(self.encode());

        ObjectId::from_digest(&hasher.finalize())
    }
}
