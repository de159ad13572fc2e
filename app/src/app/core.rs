use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::types::DirectoryEntry;
use crate::fs_op::error::FsOpError;
use crate::fs_op::list::list_entries;

/// Browsing session: the current directory plus the most recent listing.
///
/// The session is a plain value owned by whoever drives it, so several
/// sessions (or tests) can run side by side. It is not meant to be shared
/// between threads without external locking.
#[derive(Debug, Clone)]
pub struct Session {
    cwd: PathBuf,
    /// Last directory whose listing succeeded.
    last_good: Option<PathBuf>,
    entries: Vec<DirectoryEntry>,
}

mod navigation;
mod ops;

pub use navigation::Activation;

impl Session {
    /// Create a session positioned at `cwd`. Nothing is read until
    /// [`Session::list`] is called.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Session {
            cwd: cwd.into(),
            last_good: None,
            entries: Vec::new(),
        }
    }

    /// Create a session positioned at the process working directory.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Session::new(std::env::current_dir()?))
    }

    /// The directory currently being browsed.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The last directory that listed successfully, if any.
    pub fn last_good(&self) -> Option<&Path> {
        self.last_good.as_deref()
    }

    /// Entries from the most recent successful listing.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Find an entry from the most recent listing by name.
    pub fn entry(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Point the session at `path` without touching the filesystem.
    ///
    /// Whether the move worked is decided by the next [`Session::list`];
    /// on failure call [`Session::revert`] to return to the last good
    /// directory.
    pub fn navigate(&mut self, path: impl Into<PathBuf>) -> &Path {
        self.cwd = path.into();
        debug!(cwd = %self.cwd.display(), "navigated");
        &self.cwd
    }

    /// Re-read the current directory.
    ///
    /// On success the listing replaces the previous one wholesale and the
    /// directory becomes the last known-good path. On failure the previous
    /// listing and last-good path are kept.
    pub fn list(&mut self) -> Result<&[DirectoryEntry], FsOpError> {
        let entries = list_entries(&self.cwd)?;
        self.entries = entries;
        self.last_good = Some(self.cwd.clone());
        Ok(&self.entries)
    }

    /// Return to the last directory that listed successfully.
    ///
    /// Returns `false` when there is nothing to go back to or the session is
    /// already there.
    pub fn revert(&mut self) -> bool {
        match &self.last_good {
            Some(good) if *good != self.cwd => {
                debug!(from = %self.cwd.display(), to = %good.display(), "reverting");
                self.cwd = good.clone();
                true
            }
            _ => false,
        }
    }

    /// Navigate to `path` and list it, reverting to the last good
    /// directory when the listing fails.
    pub fn change_dir(&mut self, path: impl Into<PathBuf>) -> Result<&[DirectoryEntry], FsOpError> {
        self.navigate(path);
        if let Err(e) = self.list().map(|_| ()) {
            warn!(cwd = %self.cwd.display(), error = %e, "navigation failed");
            self.revert();
            return Err(e);
        }
        Ok(&self.entries)
    }

    // Mutations refresh the listing afterwards. A refresh failure is logged
    // rather than returned, since the mutation itself already succeeded.
    fn refresh_after_mutation(&mut self) {
        if let Err(e) = self.list() {
            warn!(cwd = %self.cwd.display(), error = %e, "refresh after mutation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn list_records_last_good() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("1").unwrap();

        let mut s = Session::new(temp.path());
        assert!(s.last_good().is_none());
        assert_eq!(s.list().unwrap().len(), 1);
        assert_eq!(s.last_good(), Some(temp.path()));
        assert!(s.entry("a.txt").is_some());
    }

    #[test]
    fn failed_listing_keeps_previous_state() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("a.txt").write_str("1").unwrap();
        let mut s = Session::new(temp.path());
        s.list().unwrap();

        let missing = temp.path().join("missing");
        assert_eq!(s.navigate(&missing), missing.as_path());
        assert!(matches!(s.list(), Err(FsOpError::Access { .. })));
        assert_eq!(s.cwd(), missing.as_path());
        assert_eq!(s.entries().len(), 1);

        assert!(s.revert());
        assert_eq!(s.cwd(), temp.path());
        assert!(!s.revert());
    }

    #[test]
    fn change_dir_reverts_on_failure() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("sub").create_dir_all().unwrap();
        temp.child("file.txt").write_str("x").unwrap();
        let mut s = Session::new(temp.path());
        s.list().unwrap();

        s.change_dir(temp.path().join("sub")).unwrap();
        assert_eq!(s.cwd(), temp.child("sub").path());
        assert!(s.entries().is_empty());

        let err = s.change_dir(temp.path().join("file.txt")).unwrap_err();
        assert!(matches!(err, FsOpError::Access { .. }));
        assert_eq!(s.cwd(), temp.child("sub").path());
    }

    #[test]
    fn revert_without_history_is_noop() {
        let mut s = Session::new("/definitely/not/here");
        assert!(!s.revert());
        assert_eq!(s.cwd(), Path::new("/definitely/not/here"));
    }
}
