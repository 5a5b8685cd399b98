//! Plumbing commands (low-level operations)
//!
//! - `cat-file`: Print a stored blob or commit

pub mod cat_file;
