//! Value types stored by the repository areas
//!
//! - `objects`: content-addressed blob, tree and commit records
//! - `index`: staged entry records persisted in the index snapshot
//! - `stash`: captured index snapshots kept on the stash stack

pub mod index;
pub mod objects;
pub mod stash;
