use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the directory listing and mutation helpers.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The path is missing, is not a directory, or cannot be read or written.
    /// `reason` carries the operating system's message unchanged.
    #[error("cannot access `{}`: {reason}", .path.display())]
    Access { path: PathBuf, reason: String },

    /// A create or rename target collides with an existing entry.
    #[error("`{}` already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// The entry acted on no longer exists.
    #[error("`{}` does not exist", .0.display())]
    NotFound(PathBuf),

    /// Non-recursive delete attempted on a directory with children.
    #[error("directory `{}` is not empty", .0.display())]
    NotEmpty(PathBuf),

    /// The child name is empty, `.`/`..`, or contains a path separator.
    #[error("invalid entry name `{0}`")]
    InvalidName(String),
}

impl FsOpError {
    /// Build an `Access` error for `path` from an I/O error.
    pub fn access(path: &Path, err: &io::Error) -> Self {
        FsOpError::Access {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Classify an I/O error raised while acting on `path`.
    ///
    /// Kinds without a dedicated variant collapse into `Access`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::AlreadyExists => FsOpError::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::NotFound => FsOpError::NotFound(path.to_path_buf()),
            io::ErrorKind::DirectoryNotEmpty => FsOpError::NotEmpty(path.to_path_buf()),
            _ => FsOpError::access(path, &err),
        }
    }
}
