//! Working tree status inspection
//!
//! ## Components
//!
//! - `file_change`: Kinds of unstaged change
//! - `inspector`: Tracked-file resolution and change detection
//! - `status_info`: Status report aggregation

pub mod file_change;
pub mod inspector;
pub mod status_info;
