use assert_fs::prelude::*;
use filetime::{set_file_mtime, FileTime};
use vile::{create_dir, create_file, list_entries, EntryKind, FsOpError};

#[test]
fn listing_is_sorted_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    // Deliberately scrambled mtimes, some equal.
    let stamps = [(3, 500), (7, 100), (1, 900), (4, 500), (9, 300), (0, 700)];
    for (i, secs) in stamps {
        let child = temp.child(format!("f{}", i));
        if i % 2 == 0 {
            child.create_dir_all()?;
        } else {
            child.write_str("x")?;
        }
        set_file_mtime(child.path(), FileTime::from_unix_time(secs, 0))?;
    }

    let entries = list_entries(temp.path())?;
    assert_eq!(entries.len(), stamps.len());
    for pair in entries.windows(2) {
        assert!(
            pair[0].modified >= pair[1].modified,
            "{} listed before older {}",
            pair[0].name,
            pair[1].name
        );
    }
    assert_eq!(entries[0].name, "f1");
    assert_eq!(entries.last().unwrap().name, "f7");
    Ok(())
}

#[test]
fn created_file_is_listed_as_empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    create_file(temp.path(), "a.txt")?;

    let entries = list_entries(temp.path())?;
    let a = entries.iter().find(|e| e.name == "a.txt").expect("a.txt listed");
    assert_eq!(a.kind, EntryKind::File);
    assert_eq!(a.size, Some(0));
    Ok(())
}

#[test]
fn created_directory_is_listed_as_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    create_dir(temp.path(), "sub")?;

    let entries = list_entries(temp.path())?;
    let sub = entries.iter().find(|e| e.name == "sub").expect("sub listed");
    assert_eq!(sub.kind, EntryKind::Directory);
    assert_eq!(sub.size, None);
    Ok(())
}

#[test]
fn listing_reports_file_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("k.bin").write_binary(&[0u8; 1536])?;
    let entries = list_entries(temp.path())?;
    assert_eq!(entries[0].size, Some(1536));
    assert_eq!(vile::format_size(entries[0].size.unwrap()), "1.50 KB");
    Ok(())
}

#[test]
fn listing_nonexistent_path_is_access_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let err = list_entries(temp.path().join("nowhere")).unwrap_err();
    match err {
        FsOpError::Access { path, reason } => {
            assert_eq!(path, temp.path().join("nowhere"));
            assert!(!reason.is_empty());
        }
        other => panic!("expected Access, got {:?}", other),
    }
}

#[test]
fn listing_is_fresh_each_call() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    assert!(list_entries(temp.path())?.is_empty());
    temp.child("late.txt").touch()?;
    assert_eq!(list_entries(temp.path())?.len(), 1);
    Ok(())
}

#[cfg(unix)]
#[test]
fn listing_unreadable_directory_is_access_error() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;
    if running_as_root() {
        return Ok(());
    }
    let temp = assert_fs::TempDir::new()?;
    let sealed = temp.child("sealed");
    sealed.create_dir_all()?;
    sealed.child("inside.txt").touch()?;
    std::fs::set_permissions(sealed.path(), std::fs::Permissions::from_mode(0o000))?;

    let res = list_entries(sealed.path());
    std::fs::set_permissions(sealed.path(), std::fs::Permissions::from_mode(0o755))?;
    match res {
        Err(FsOpError::Access { path, reason }) => {
            assert_eq!(path, sealed.path());
            assert!(!reason.is_empty());
        }
        other => panic!("expected Access, got {:?}", other),
    }
    Ok(())
}

#[cfg(unix)]
fn running_as_root() -> bool {
    use std::os::unix::fs::MetadataExt;
    let marker = tempfile::NamedTempFile::new().expect("marker file");
    marker.as_file().metadata().map(|m| m.uid() == 0).unwrap_or(false)
}
