//! Flat re-export of the directory operations.
//!
//! The implementations live in focused submodules (`list`, `create`,
//! `remove`, `mv`). This module gathers the public surface so a
//! presentation layer can `use vile::fs_op::files::*` and get every
//! operation in one import.

/// Listing.
pub use crate::fs_op::list::{list_entries, sort_newest_first};

/// Create helpers (files & directories).
pub use crate::fs_op::create::{create_dir, create_file};

/// Non-recursive delete, plus the opt-in recursive variant.
pub use crate::fs_op::remove::{delete_entry, delete_tree, tree_summary, TreeSummary};

/// Rename within a directory.
pub use crate::fs_op::mv::rename_entry;

/// Error taxonomy shared by every operation above.
pub use crate::fs_op::error::FsOpError;
