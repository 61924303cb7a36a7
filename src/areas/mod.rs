//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: content-addressed object store for blobs, trees and commits
//! - `index`: staging area tracking files for the next commit
//! - `refs`: branch references and HEAD resolution
//! - `stash`: LIFO stack of captured index snapshots
//! - `repository`: high-level lifecycle and coordination
//! - `workspace`: working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod stash;
pub mod workspace;
