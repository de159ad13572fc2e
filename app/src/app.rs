pub mod core;
pub mod places;
pub mod settings;
pub mod types;

pub use crate::fs_op::path;
pub use core::{Activation, Session};
pub use places::{find_place, places, Place};
pub use types::{DirectoryEntry, EntryKind};
