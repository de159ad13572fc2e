use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use tracing::{info, warn};

use crate::fs_op::error::FsOpError;
use crate::fs_op::helpers::child_path;

/// Create an empty file named `name` inside `dir`.
///
/// Uses create-new semantics: an existing file or directory of that name
/// is never truncated and yields `FsOpError::AlreadyExists`.
pub fn create_file<P: AsRef<Path>>(dir: P, name: &str) -> Result<(), FsOpError> {
    let target = child_path(dir.as_ref(), name)?;
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
        .map_err(|e| creation_error(&target, e))?;
    info!(path = %target.display(), "created file");
    Ok(())
}

/// Create an empty directory named `name` inside `dir`. Parents are not
/// created.
pub fn create_dir<P: AsRef<Path>>(dir: P, name: &str) -> Result<(), FsOpError> {
    let target = child_path(dir.as_ref(), name)?;
    fs::create_dir(&target).map_err(|e| creation_error(&target, e))?;
    info!(path = %target.display(), "created directory");
    Ok(())
}

// A missing parent is an access problem, not a missing target.
fn creation_error(target: &Path, e: io::Error) -> FsOpError {
    warn!(path = %target.display(), error = %e, "create failed");
    if e.kind() == io::ErrorKind::AlreadyExists {
        FsOpError::AlreadyExists(target.to_path_buf())
    } else {
        FsOpError::access(target, &e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_file_and_dir() {
        let td = tempdir().unwrap();
        create_dir(td.path(), "sub").unwrap();
        create_file(td.path().join("sub"), "f.txt").unwrap();
        let file = td.path().join("sub/f.txt");
        assert!(file.is_file());
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn create_file_never_truncates() {
        let td = tempdir().unwrap();
        let existing = td.path().join("keep.txt");
        fs::write(&existing, b"precious").unwrap();

        let err = create_file(td.path(), "keep.txt").unwrap_err();
        assert!(matches!(err, FsOpError::AlreadyExists(p) if p == existing));
        assert_eq!(fs::read(&existing).unwrap(), b"precious");
    }

    #[test]
    fn create_collides_across_kinds() {
        let td = tempdir().unwrap();
        create_dir(td.path(), "taken").unwrap();
        assert!(matches!(create_file(td.path(), "taken"), Err(FsOpError::AlreadyExists(_))));
        create_file(td.path(), "also").unwrap();
        assert!(matches!(create_dir(td.path(), "also"), Err(FsOpError::AlreadyExists(_))));
    }

    #[test]
    fn missing_parent_is_access_error() {
        let td = tempdir().unwrap();
        let gone = td.path().join("gone");
        assert!(matches!(create_file(&gone, "a"), Err(FsOpError::Access { .. })));
        assert!(matches!(create_dir(&gone, "a"), Err(FsOpError::Access { .. })));
    }

    #[test]
    fn rejects_names_with_separators() {
        let td = tempdir().unwrap();
        assert!(matches!(create_file(td.path(), "a/b"), Err(FsOpError::InvalidName(_))));
        assert!(matches!(create_dir(td.path(), ".."), Err(FsOpError::InvalidName(_))));
    }
}
