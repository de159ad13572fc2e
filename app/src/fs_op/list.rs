//! Directory listing.
//!
//! Every call re-reads the directory from the OS; nothing is cached and no
//! handle outlives the call.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::app::types::DirectoryEntry;
use crate::fs_op::error::FsOpError;
use crate::fs_op::stat;

/// List the entries directly inside `dir`, most recently modified first.
///
/// Fails with `FsOpError::Access` when `dir` is missing, is not a directory,
/// or cannot be read. Children removed between enumeration and stat are
/// skipped.
pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<DirectoryEntry>, FsOpError> {
    let dir = dir.as_ref();
    debug!(dir = %dir.display(), "listing directory");

    let reader = fs::read_dir(dir).map_err(|e| FsOpError::access(dir, &e))?;
    let mut entries = Vec::new();
    for item in reader {
        let item = item.map_err(|e| FsOpError::access(dir, &e))?;
        match stat::read_entry(&item) {
            Ok(entry) => entries.push(entry),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %item.path().display(), "entry vanished during listing");
            }
            Err(e) => return Err(FsOpError::access(&item.path(), &e)),
        }
    }

    sort_newest_first(&mut entries);
    debug!(dir = %dir.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Sort by modification time, descending. The sort is stable, so entries
/// with equal times keep their enumeration order; entries without a time
/// go last.
pub fn sort_newest_first(entries: &mut [DirectoryEntry]) {
    entries.sort_by(|a, b| b.modified.cmp(&a.modified));
}
