//! Error taxonomy shared by all repository areas
//!
//! Stores signal failures outward as typed errors wrapped in `anyhow`;
//! nothing is retried. The binary boundary converts any propagated error
//! into a printed message and a nonzero exit code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JotError {
    #[error("not a jot repository (or any of the parent directories)")]
    RepositoryNotFound,

    #[error("object not found: {0}")]
    ObjectNotFound(String),

    #[error("invalid object format")]
    InvalidObjectFormat,

    #[error("branch '{0}' not found")]
    BranchNotFound(String),

    #[error("stash not found: {0}")]
    StashNotFound(String),

    #[error("file not found: {0}")]
    FileNotFound(String),
}
