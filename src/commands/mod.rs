//! Command implementations
//!
//! Every user-facing operation is a `Repository` method living in its own
//! file under `porcelain`. Commands compose the stores and never reach into
//! each other.

pub mod porcelain;
