//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Object store for blobs and commits
//! - `refs`: Reference store (HEAD, current, branches)
//! - `stage`: Staging areas for additions and removals
//! - `repository`: The repository handle tying the areas together
//! - `workspace`: Working directory file access

pub mod database;
pub mod refs;
pub mod repository;
pub mod stage;
pub mod workspace;
