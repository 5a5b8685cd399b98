//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository with its root commit
//! - `add`: Stage a file for addition
//! - `rm`: Stage a file for removal
//! - `reset`: Drop a staged addition
//! - `commit`: Record staged changes as a new commit
//! - `log`: Show first-parent history from HEAD, or every commit
//! - `find`: Find commits by message
//! - `status`: Show branches, staged files, and working tree changes
//! - `branch`: Create or delete branches

pub mod add;
pub mod branch;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod reset;
pub mod rm;
pub mod status;
