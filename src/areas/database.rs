//! Content-addressed object store
//!
//! Objects live under the `objects` directory, sharded by the first two hex
//! characters of their id (`objects/<hh>/<rest>`). The sharding is structural,
//! not cosmetic: a flat directory degrades badly once a repository holds many
//! objects. Writes are idempotent because an existing path already holds the
//! identical bytes.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::GitObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::JotError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

#[derive(Debug, new)]
pub struct Database {
    /// Path to the objects directory
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Write an object and return its id
    ///
    /// An object whose path already exists is skipped; content addressing
    /// guarantees the stored bytes are the same.
    pub fn store(&self, object: &GitObject) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id();
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            let object_dir = object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?;
            std::fs::create_dir_all(object_dir).context(format!(
                "Unable to create object directory {}",
                object_dir.display()
            ))?;

            std::fs::write(&object_path, object.encode()).context(format!(
                "Unable to write object file {}",
                object_path.display()
            ))?;
        }

        Ok(object_id)
    }

    /// Read an object back by id
    ///
    /// Attempts the strict header decode first; on failure the bytes are run
    /// through the legacy shape heuristic so pre-header objects stay
    /// readable.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<GitObject> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(JotError::ObjectNotFound(object_id.to_string()).into());
        }

        let data = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        match GitObject::decode(&data) {
            Ok(object) => Ok(object),
            Err(_) => Ok(GitObject::decode_legacy(&data)),
        }
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Load an object and parse it as a commit
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let object = self.load(object_id)?;

        if object.kind() != ObjectType::Commit {
            anyhow::bail!(
                "object {} is a {}, not a commit",
                object_id.to_short(),
                object.kind()
            );
        }

        Commit::from_content(object.content())
    }
}
