use chrono::{DateTime, Local};
use serde::Serialize;

/// Whether a listed entry is a regular file or a directory.
///
/// Anything that is not a directory (sockets, FIFOs, dangling symlinks) is
/// reported as `File`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Label shown in the listing's "Type" column.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "File",
            EntryKind::Directory => "Folder",
        }
    }
}

/// Snapshot of one item found directly inside a listed directory.
///
/// Built fresh by every listing; entries carry no identity beyond their
/// name within the listed parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Base name, not the full path.
    pub name: String,
    pub kind: EntryKind,
    /// Modification time, `None` when the platform cannot report it.
    pub modified: Option<DateTime<Local>>,
    /// Size in bytes. Always `None` for directories.
    pub size: Option<u64>,
}

impl DirectoryEntry {
    pub fn file(name: impl Into<String>, size: u64, modified: Option<DateTime<Local>>) -> Self {
        DirectoryEntry {
            name: name.into(),
            kind: EntryKind::File,
            modified,
            size: Some(size),
        }
    }

    pub fn directory(name: impl Into<String>, modified: Option<DateTime<Local>>) -> Self {
        DirectoryEntry {
            name: name.into(),
            kind: EntryKind::Directory,
            modified,
            size: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
