//! Data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `log`: Commit history traversal
//! - `objects`: Stored object types (blob, commit)
//! - `status`: Working tree status inspection

pub mod branch;
pub mod log;
pub mod objects;
pub mod status;
