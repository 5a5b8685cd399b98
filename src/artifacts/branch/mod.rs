//! Branch names
//!
//! Branches live as flat files under `.gitlet/refs`, so a branch name is a single path
//! component that must not collide with the bookkeeping refs `HEAD` and `current`.

pub mod branch_name;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\.\.|\/|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
pub const DEFAULT_BRANCH: &str = "master";
