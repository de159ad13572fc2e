use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::fs_op::error::FsOpError;
use crate::fs_op::helpers::{child_path, entry_exists};

/// Rename the entry `old_name` inside `dir` to `new_name` in the same
/// directory.
///
/// Both names must be plain child names, so the entry can never leave
/// `dir`. An existing entry at `new_name` is never overwritten; the call
/// fails with `FsOpError::AlreadyExists` and the source is untouched. The
/// existence check and the rename are two syscalls, so a racing creator can
/// still be replaced on platforms whose `rename` overwrites.
pub fn rename_entry<P: AsRef<Path>>(dir: P, old_name: &str, new_name: &str) -> Result<(), FsOpError> {
    let dir = dir.as_ref();
    let src = child_path(dir, old_name)?;
    let dst = child_path(dir, new_name)?;

    fs::symlink_metadata(&src).map_err(|e| FsOpError::from_io(&src, e))?;
    if entry_exists(&dst) {
        warn!(src = %src.display(), dst = %dst.display(), "rename target exists");
        return Err(FsOpError::AlreadyExists(dst));
    }

    fs::rename(&src, &dst).map_err(|e| {
        warn!(src = %src.display(), dst = %dst.display(), error = %e, "rename failed");
        rename_error(&src, &dst, e)
    })?;
    info!(src = %src.display(), dst = %dst.display(), "renamed entry");
    Ok(())
}

// A collision at the destination (a file, or a non-empty directory
// replacing a directory) is reported against `dst`; the rest against `src`.
fn rename_error(src: &Path, dst: &Path, err: io::Error) -> FsOpError {
    match err.kind() {
        io::ErrorKind::AlreadyExists | io::ErrorKind::DirectoryNotEmpty => {
            FsOpError::AlreadyExists(dst.to_path_buf())
        }
        _ => FsOpError::from_io(src, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn rename_to_free_name() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"hello").unwrap();
        rename_entry(td.path(), "a.txt", "b.txt").unwrap();
        assert!(!td.path().join("a.txt").exists());
        assert_eq!(fs::read(td.path().join("b.txt")).unwrap(), b"hello");
    }

    #[test]
    fn rename_refuses_to_overwrite() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"a").unwrap();
        fs::write(td.path().join("b.txt"), b"b").unwrap();

        let err = rename_entry(td.path(), "a.txt", "b.txt").unwrap_err();
        assert!(matches!(err, FsOpError::AlreadyExists(_)));
        assert_eq!(fs::read(td.path().join("a.txt")).unwrap(), b"a");
        assert_eq!(fs::read(td.path().join("b.txt")).unwrap(), b"b");
    }

    #[test]
    fn rename_missing_source_is_not_found() {
        let td = tempdir().unwrap();
        let err = rename_entry(td.path(), "ghost", "spirit").unwrap_err();
        assert!(matches!(err, FsOpError::NotFound(_)));
    }

    #[test]
    fn rename_directory() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("old")).unwrap();
        fs::write(td.path().join("old/inner"), b"").unwrap();
        rename_entry(td.path(), "old", "new").unwrap();
        assert!(td.path().join("new/inner").exists());
    }

    #[test]
    fn rename_cannot_move_out_of_parent() {
        let td = tempdir().unwrap();
        fs::create_dir(td.path().join("sub")).unwrap();
        fs::write(td.path().join("a.txt"), b"").unwrap();
        let err = rename_entry(td.path(), "a.txt", "sub/a.txt").unwrap_err();
        assert!(matches!(err, FsOpError::InvalidName(_)));
        assert!(td.path().join("a.txt").exists());
    }

    #[test]
    fn rename_collision_reported_against_destination() {
        let src = Path::new("/d/old");
        let dst = Path::new("/d/new");
        for kind in [io::ErrorKind::AlreadyExists, io::ErrorKind::DirectoryNotEmpty] {
            match rename_error(src, dst, io::Error::from(kind)) {
                FsOpError::AlreadyExists(p) => assert_eq!(p, dst),
                other => panic!("unexpected variant: {:?}", other),
            }
        }
        assert!(matches!(
            rename_error(src, dst, io::Error::from(io::ErrorKind::NotFound)),
            FsOpError::NotFound(p) if p == src
        ));
    }
}
