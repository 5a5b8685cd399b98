//! Stored object types and operations
//!
//! Every persisted object is identified by the SHA-1 hash of its canonical encoding.
//! There are two kinds:
//!
//! - **Blob**: one file's name and content at the time it was committed
//! - **Commit**: a history node (parents, newly introduced blobs, removals, timestamp, message)
//!
//! All objects share the framing `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
