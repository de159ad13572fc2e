use super::*;
use crate::fs_op::helpers::child_path;
use crate::fs_op::stat::PathType;

/// Result of activating an entry from the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The entry was a directory and the session moved into it.
    Entered,
    /// The entry is not a directory; opening it is up to the caller.
    NotADirectory(PathBuf),
}

impl Session {
    /// Activate the child `name` of the current directory: directories are
    /// entered, anything else is handed back to the caller untouched.
    pub fn enter(&mut self, name: &str) -> Result<Activation, FsOpError> {
        let target = child_path(&self.cwd, name)?;
        match PathType::of(&target) {
            PathType::Directory => {
                self.change_dir(target)?;
                Ok(Activation::Entered)
            }
            PathType::NotFound => Err(FsOpError::NotFound(target)),
            PathType::File | PathType::Other => Ok(Activation::NotADirectory(target)),
        }
    }

    /// Move to the parent of the current directory.
    ///
    /// Returns `Ok(false)` when already at the filesystem root.
    pub fn go_up(&mut self) -> Result<bool, FsOpError> {
        let Some(parent) = self.cwd.parent().map(Path::to_path_buf) else {
            return Ok(false);
        };
        self.change_dir(parent)?;
        Ok(true)
    }
}
