//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Low-level object inspection (cat-file)
//! - `porcelain`: User-facing version control workflows (init, add, commit, log, ...)
//!
//! Each porcelain operation returns its result as data; the `show_*` variants render it to
//! the repository's writer.

pub mod plumbing;
pub mod porcelain;
