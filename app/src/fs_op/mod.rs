//! Directory lister and mutators: thin wrappers over single OS calls that
//! classify failures into [`error::FsOpError`].

pub mod create;
pub mod error;
pub mod files;
pub mod helpers;
pub mod list;
pub mod mv;
pub mod path;
pub mod remove;
pub mod stat;
