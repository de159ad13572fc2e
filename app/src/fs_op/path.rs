use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when resolving a user-supplied path.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path")]
    Empty,
    #[error("could not determine home directory")]
    HomeNotFound,
}

/// Turn user input into a directory path to navigate to.
///
/// - Surrounding whitespace is trimmed; empty input is an error.
/// - A leading `~` expands to the home directory (`HOME`, then
///   `USERPROFILE`).
/// - Absolute paths are returned as-is, relative ones are joined onto
///   `base`.
///
/// Existence is not checked here: the listing that follows navigation is
/// what decides whether the path is usable.
pub fn resolve_path(input: &str, base: &Path) -> Result<PathBuf, PathError> {
    resolve_with_home(input, base, home_dir().as_deref())
}

/// [`resolve_path`] with an explicit home directory for `~` expansion.
pub fn resolve_with_home(input: &str, base: &Path, home: Option<&Path>) -> Result<PathBuf, PathError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PathError::Empty);
    }

    if let Some(rest) = input.strip_prefix('~') {
        let home = home.ok_or(PathError::HomeNotFound)?;
        // Trim leading separators so `~/foo` and `~foo` behave the same.
        let rest = rest.trim_start_matches(|c: char| c == '/' || c == '\\');
        return Ok(if rest.is_empty() { home.to_path_buf() } else { home.join(rest) });
    }
    let p = PathBuf::from(input);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(base.join(p))
    }
}

// `HOME` on Unix, `USERPROFILE` on Windows.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}
