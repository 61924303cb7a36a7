//! Branch references and HEAD
//!
//! References are text files under the metadata directory:
//!
//! - `HEAD` holds either `ref: refs/heads/<name>\n` (symbolic, the normal
//!   checked-out state) or a raw hex hash (detached)
//! - `refs/heads/<name>` holds the branch tip hash, or is empty for a branch
//!   with no commits yet (unborn)
//!
//! HEAD resolution depth is exactly one: a symbolic HEAD is followed to its
//! branch file and no further. A ref file pointing at another symbolic ref is
//! unsupported.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::JotError;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Prefix marking a symbolic reference line
const SYMREF_PREFIX: &str = "ref: ";

/// Prefix of branch ref paths relative to the metadata directory
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory
    path: Box<Path>,
}

impl Refs {
    /// Resolve HEAD to a commit id
    ///
    /// A symbolic HEAD is resolved exactly one level through its branch file;
    /// a missing or empty branch file is an unborn branch and yields `None`.
    /// A detached HEAD holds the hash directly.
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .context(format!("failed to read HEAD at {}", head_path.display()))?;
        let content = content.trim();

        match content.strip_prefix(SYMREF_PREFIX) {
            Some(target) => self.read_ref_file(&self.path.join(target)),
            None => Ok(Some(ObjectId::try_parse(content.to_string())?)),
        }
    }

    /// Point HEAD at a branch ref (checkout)
    pub fn set_head(&self, ref_path: &str) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &format!("{SYMREF_PREFIX}{ref_path}\n"))
    }

    /// Point HEAD directly at a commit (detached state)
    pub fn set_head_commit(&self, object_id: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), object_id.as_ref())
    }

    /// Create a branch ref; `None` writes an empty file (unborn branch)
    pub fn create_branch(&self, name: &str, object_id: Option<&ObjectId>) -> anyhow::Result<()> {
        let content = object_id.map(|oid| oid.as_ref().to_string()).unwrap_or_default();
        self.write_ref_file(&self.branch_path(name), &content)
    }

    pub fn set_branch_head(&self, name: &str, object_id: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(name), object_id.as_ref())
    }

    /// Read a branch tip; `None` when the branch is missing or unborn
    pub fn branch_head(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref_file(&self.branch_path(name))
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch_path(name).exists()
    }

    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        if !branch_path.exists() {
            return Err(JotError::BranchNotFound(name.to_string()).into());
        }

        std::fs::remove_file(&branch_path).context(format!(
            "failed to delete branch file at {}",
            branch_path.display()
        ))
    }

    /// Enumerate branch names: regular files under `refs/heads`, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let heads_path = self.heads_path();
        if !heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = std::fs::read_dir(&heads_path)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// The branch HEAD is checked out on, or `None` when detached
    ///
    /// Derived from the raw HEAD line only: HEAD must be symbolic and its
    /// target must live under `refs/heads/`.
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)?;
        let branch = content
            .trim()
            .strip_prefix(SYMREF_PREFIX)
            .and_then(|target| target.strip_prefix(BRANCH_REF_PREFIX))
            .map(|name| name.to_string());

        Ok(branch)
    }

    fn read_ref_file(&self, path: &Path) -> anyhow::Result<Option<ObjectId>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .context(format!("failed to read ref file at {}", path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        let parent = path.parent().context(format!(
            "invalid ref file path {}",
            path.display()
        ))?;
        std::fs::create_dir_all(parent)?;

        std::fs::write(path, content)
            .context(format!("failed to write ref file at {}", path.display()))
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join("HEAD")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.heads_path().join(name)
    }
}
