pub mod app;
pub mod fs_op;
pub mod runner;
pub mod ui;

pub use crate::app::path;
pub use crate::app::{Activation, DirectoryEntry, EntryKind, Session};
pub use crate::fs_op::error::FsOpError;
pub use crate::fs_op::files::{
    create_dir, create_file, delete_entry, delete_tree, list_entries, rename_entry,
};
pub use crate::ui::format::{format_date, format_size};
