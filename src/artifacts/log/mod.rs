//! Commit history traversal
//!
//! - `rev_list`: lazy first-parent walk from a starting commit back to the root

pub mod rev_list;
