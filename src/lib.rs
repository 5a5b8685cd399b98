//! A minimal local version control system
//!
//! - `areas`: On-disk state (object store, references, staging areas, working tree)
//! - `artifacts`: Objects, branch names, history traversal, and status inspection
//! - `commands`: Repository operations exposed by the CLI
//! - `config`: Environment-driven configuration
//! - `errors`: Error taxonomy shared by every operation

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
