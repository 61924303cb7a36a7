pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a hex-encoded SHA-256 object id
pub const OBJECT_ID_LENGTH: usize = 64;
