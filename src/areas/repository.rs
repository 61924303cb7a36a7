//! Repository facade
//!
//! Thin composition over the stores: it wires the refs, index, stash and
//! object database under the same metadata root and owns the lifecycle
//! (init / open / exists / locate). Command output goes through an injected
//! writer so tests can capture it.
//!
//! The execution model is single-threaded and synchronous, one process per
//! repository at a time. Snapshot saves are plain overwrites with no file
//! locking and are not crash-atomic; that single-writer precondition is part
//! of the contract.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::stash::StashStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object::GitObject;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::JotError;
use bytes::Bytes;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory under the repository root
pub const META_DIR: &str = ".jot";

/// Branch created and checked out by `init`
pub const DEFAULT_BRANCH: &str = "main";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    stash: StashStore,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    /// Wire up a repository rooted at `path`, creating the root directory if
    /// needed. No metadata is touched; `init` and `open` build on this.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let meta_path = path.join(META_DIR);

        let index = Index::new(meta_path.join("index").into_boxed_path());
        let stash = StashStore::new(meta_path.join("stash").into_boxed_path());
        let database = Database::new(meta_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(meta_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index,
            stash,
            database,
            workspace,
            refs,
        })
    }

    /// Open an existing repository, loading the persisted index and stash
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !Self::exists(path) {
            return Err(JotError::RepositoryNotFound.into());
        }

        let mut repository = Self::new(path, writer)?;
        repository.index.rehydrate()?;
        repository.stash.rehydrate()?;

        Ok(repository)
    }

    /// Pure predicate: does `path` hold a repository?
    pub fn exists(path: &Path) -> bool {
        path.join(META_DIR).is_dir()
    }

    /// Walk upward from `start_dir` until a metadata directory is found
    ///
    /// The starting directory is explicit rather than implicitly tied to the
    /// process working directory, which keeps discovery testable.
    pub fn locate(start_dir: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start_dir = start_dir.canonicalize()?;

        let mut current = Some(start_dir.as_path());
        while let Some(dir) = current {
            if Self::exists(dir) {
                return Self::open(dir, writer);
            }
            current = dir.parent();
        }

        Err(JotError::RepositoryNotFound.into())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn stash(&self) -> &StashStore {
        &self.stash
    }

    pub fn stash_mut(&mut self) -> &mut StashStore {
        &mut self.stash
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn create_blob(&self, content: Bytes) -> anyhow::Result<ObjectId> {
        self.database.store(&GitObject::new(ObjectType::Blob, content))
    }

    pub fn create_tree(&self, tree: &Tree) -> anyhow::Result<ObjectId> {
        self.database.store(&tree.to_object())
    }

    pub fn create_commit(
        &self,
        message: &str,
        tree_oid: ObjectId,
        parent: Option<ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let commit = Commit::new(
            tree_oid,
            parent,
            Author::load_from_env(),
            message.trim().to_string(),
        );

        self.database.store(&commit.to_object())
    }
}
