use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::fs_op::error::FsOpError;

/// Check that `name` names a single entry directly inside a directory.
///
/// Rejects the empty string, `.` and `..`, and anything containing a path
/// separator or NUL, so joining it onto a parent can never escape that
/// parent.
pub fn validate_name(name: &str) -> Result<&str, FsOpError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('\0')
        || name.chars().any(std::path::is_separator);
    if bad {
        return Err(FsOpError::InvalidName(name.to_string()));
    }
    Ok(name)
}

/// Join a validated child `name` onto `dir`.
pub fn child_path(dir: &Path, name: &str) -> Result<PathBuf, FsOpError> {
    Ok(dir.join(validate_name(name)?))
}

/// Return `true` if something occupies `path`, dangling symlinks included.
pub fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Write `data` to `target` by writing a sibling temp file and renaming it
/// into place, so readers never observe a partial file.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return fs::write(target, data);
    };
    fs::create_dir_all(dir)?;

    static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);
    let seq = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    let tmp = dir.join(format!(".tmp_atomic_write.{:x}.{:x}", std::process::id(), seq));

    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, target).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn validate_name_rejects_traversal() {
        for bad in ["", ".", "..", "a/b", "../x", "nul\0byte"] {
            assert!(
                matches!(validate_name(bad), Err(FsOpError::InvalidName(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
        assert_eq!(validate_name("notes.txt").unwrap(), "notes.txt");
        assert_eq!(validate_name(".hidden").unwrap(), ".hidden");
        assert_eq!(validate_name("...").unwrap(), "...");
    }

    #[test]
    fn child_path_joins_onto_parent() {
        let p = child_path(Path::new("/tmp/base"), "child").unwrap();
        assert_eq!(p, PathBuf::from("/tmp/base/child"));
    }

    #[cfg(unix)]
    #[test]
    fn entry_exists_sees_dangling_symlink() {
        let td = tempdir().unwrap();
        let link = td.path().join("dangling");
        std::os::unix::fs::symlink(td.path().join("missing"), &link).unwrap();
        assert!(!link.exists());
        assert!(entry_exists(&link));
    }

    #[test]
    fn atomic_write_replaces_and_leaves_no_temp() {
        let td = tempdir().unwrap();
        let target = td.path().join("conf/settings.toml");
        atomic_write(&target, b"one").unwrap();
        atomic_write(&target, b"two").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "two");

        let leftovers = fs::read_dir(target.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(".tmp_atomic_write."))
            .count();
        assert_eq!(leftovers, 0, "found leftover atomic temp files");
    }
}
