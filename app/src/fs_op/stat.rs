use chrono::{DateTime, Local};
use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::Path;

use crate::app::types::{DirectoryEntry, EntryKind};

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Nothing exists at the path (a dangling symlink counts as `Other`).
    NotFound,
    /// The path resolves to a directory.
    Directory,
    /// The path resolves to a regular file.
    File,
    /// Exists but is neither a regular file nor a directory
    /// (socket, FIFO, device, dangling symlink).
    Other,
}

impl PathType {
    /// Classify `path`, following symlinks.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        match fs::metadata(p) {
            Ok(m) if m.is_dir() => PathType::Directory,
            Ok(m) if m.is_file() => PathType::File,
            Ok(_) => PathType::Other,
            Err(_) if fs::symlink_metadata(p).is_ok() => PathType::Other,
            Err(_) => PathType::NotFound,
        }
    }
}

/// Stat one directory child and build its `DirectoryEntry`.
///
/// Symlinks are followed so a link to a directory lists as a directory. A
/// link whose target cannot be resolved (dangling, looping) falls back to
/// the link's own metadata. A `NotFound` error means the child vanished
/// after enumeration.
pub(crate) fn read_entry(item: &DirEntry) -> io::Result<DirectoryEntry> {
    let path = item.path();
    let meta = match fs::metadata(&path) {
        Ok(m) => m,
        Err(e) => match fs::symlink_metadata(&path)? {
            m if m.file_type().is_symlink() => m,
            _ => return Err(e),
        },
    };
    let name = item.file_name().to_string_lossy().into_owned();
    Ok(entry_from_metadata(name, &meta))
}

fn entry_from_metadata(name: String, meta: &Metadata) -> DirectoryEntry {
    let modified = meta.modified().ok().map(DateTime::<Local>::from);
    match kind_of(meta) {
        EntryKind::Directory => DirectoryEntry::directory(name, modified),
        EntryKind::File => DirectoryEntry::file(name, meta.len(), modified),
    }
}

fn kind_of(meta: &Metadata) -> EntryKind {
    if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}
