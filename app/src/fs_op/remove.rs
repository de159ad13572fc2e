use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::fs_op::error::FsOpError;
use crate::fs_op::helpers::child_path;

/// Counts of what lives below a directory, used to warn before a
/// recursive delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    pub files: u64,
    pub dirs: u64,
    pub bytes: u64,
}

impl TreeSummary {
    pub fn is_empty(&self) -> bool {
        self.files == 0 && self.dirs == 0
    }
}

/// Remove the entry `name` inside `dir` without recursing.
///
/// Files and symlinks are unlinked. A directory is removed only when it is
/// empty; otherwise `FsOpError::NotEmpty` is returned and nothing changes.
/// Use [`delete_tree`] for recursive removal.
pub fn delete_entry<P: AsRef<Path>>(dir: P, name: &str) -> Result<(), FsOpError> {
    let target = child_path(dir.as_ref(), name)?;
    let meta = fs::symlink_metadata(&target).map_err(|e| FsOpError::from_io(&target, e))?;

    let res = if meta.is_dir() {
        fs::remove_dir(&target).map_err(|e| {
            // Some platforms report a populated directory as EEXIST.
            if e.kind() == io::ErrorKind::DirectoryNotEmpty || has_children(&target) {
                FsOpError::NotEmpty(target.clone())
            } else {
                FsOpError::from_io(&target, e)
            }
        })
    } else {
        fs::remove_file(&target).map_err(|e| FsOpError::from_io(&target, e))
    };

    match &res {
        Ok(()) => info!(path = %target.display(), "deleted entry"),
        Err(e) => warn!(path = %target.display(), error = %e, "delete failed"),
    }
    res
}

/// Remove the entry `name` inside `dir`, recursing into directories.
///
/// This is the explicit opt-in counterpart of [`delete_entry`]; callers are
/// expected to confirm with the user first. Symlinks are removed as links,
/// their targets are left alone.
pub fn delete_tree<P: AsRef<Path>>(dir: P, name: &str) -> Result<(), FsOpError> {
    let target = child_path(dir.as_ref(), name)?;
    let meta = fs::symlink_metadata(&target).map_err(|e| FsOpError::from_io(&target, e))?;

    let res = if meta.is_dir() {
        fs::remove_dir_all(&target)
    } else {
        fs::remove_file(&target)
    };
    match res {
        Ok(()) => {
            info!(path = %target.display(), "deleted tree");
            Ok(())
        }
        Err(e) => {
            warn!(path = %target.display(), error = %e, "recursive delete failed");
            Err(match e.kind() {
                io::ErrorKind::NotFound => FsOpError::NotFound(target),
                _ => FsOpError::access(&target, &e),
            })
        }
    }
}

/// Count the files, directories and file bytes below the entry `name`
/// inside `dir`. Symlinks are counted as files and not followed.
pub fn tree_summary<P: AsRef<Path>>(dir: P, name: &str) -> Result<TreeSummary, FsOpError> {
    let target = child_path(dir.as_ref(), name)?;
    fs::symlink_metadata(&target).map_err(|e| FsOpError::from_io(&target, e))?;

    let mut summary = TreeSummary::default();
    for item in WalkDir::new(&target).min_depth(1).follow_links(false) {
        let item = item.map_err(|e| {
            let at = e.path().unwrap_or(target.as_path()).to_path_buf();
            FsOpError::access(&at, &io::Error::from(e))
        })?;
        if item.file_type().is_dir() {
            summary.dirs += 1;
        } else {
            summary.files += 1;
            if item.file_type().is_file() {
                summary.bytes += item.metadata().map(|m| m.len()).unwrap_or(0);
            }
        }
    }
    Ok(summary)
}

fn has_children(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut it| it.next().is_some())
        .unwrap_or(false)
}
