//! Quick-access user folders (home, desktop, documents, ...).

use directories_next::UserDirs;
use std::path::{Path, PathBuf};

/// A named shortcut to a well-known user folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub label: &'static str,
    pub path: PathBuf,
}

/// Well-known user folders, home first.
///
/// Folders come from the platform's user-dirs configuration; when a
/// folder is not configured the conventional `~/<Label>` path is used. The
/// paths are not checked for existence. Returns an empty list when no home
/// directory can be determined.
pub fn places() -> Vec<Place> {
    let Some(dirs) = UserDirs::new() else {
        return Vec::new();
    };
    let home = dirs.home_dir().to_path_buf();
    let pick = |label: &'static str, configured: Option<&Path>| Place {
        label,
        path: configured
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join(label)),
    };

    vec![
        Place { label: "Home", path: home.clone() },
        pick("Desktop", dirs.desktop_dir()),
        pick("Documents", dirs.document_dir()),
        pick("Downloads", dirs.download_dir()),
        pick("Music", dirs.audio_dir()),
        pick("Pictures", dirs.picture_dir()),
        pick("Videos", dirs.video_dir()),
    ]
}

/// Look up a place by label, ignoring ASCII case.
pub fn find_place(label: &str) -> Option<Place> {
    places()
        .into_iter()
        .find(|p| p.label.eq_ignore_ascii_case(label))
}
