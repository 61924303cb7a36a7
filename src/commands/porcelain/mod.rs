//! User-facing commands
//!
//! - `init`: create the metadata directory tree
//! - `add`: stage a file for the next commit
//! - `commit`: record the staged snapshot
//! - `log`: walk the commit chain from HEAD
//! - `status`: staged and untracked files
//! - `branch`: list, create, checkout, delete, merge (stub), rebase (stub)
//! - `stash`: push, list, show, apply, drop captured index snapshots

pub mod add;
pub mod branch;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
pub mod stash;
