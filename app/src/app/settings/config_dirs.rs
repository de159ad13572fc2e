//! Platform-specific locations for the settings file and log output.

use directories_next::ProjectDirs;
use std::io;
use std::path::PathBuf;

/// Environment variable that overrides the settings file location.
pub const CONFIG_ENV: &str = "VILE_CONFIG";

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "vile")
}

/// Per-user configuration directory, e.g. `~/.config/vile` on Linux.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory, used for log files.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Location of the settings file: `$VILE_CONFIG` when set, otherwise
/// `settings.toml` under the project config directory.
pub fn settings_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => project_config_dir().map(|d| d.join(SETTINGS_FILE)),
    }
}

/// Create the config and cache directories if they are missing.
pub fn ensure_dirs_exist() -> io::Result<()> {
    for dir in [project_config_dir(), user_cache_dir()].into_iter().flatten() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
