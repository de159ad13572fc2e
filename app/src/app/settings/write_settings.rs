use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_dirs::settings_path;
use crate::fs_op::helpers::atomic_write;
use crate::ui::format::DEFAULT_DATE_FORMAT;

/// User-tunable settings, persisted as TOML.
///
/// Every field has a default, so a partial file only overrides what it
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory to open when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_dir: Option<PathBuf>,
    /// `chrono` format string for the "Date Modified" column.
    pub date_format: String,
    /// `tracing` filter directive used when `VILE_LOG` is not set.
    pub log_level: String,
    /// Write logs to a daily file in the cache directory instead of stderr.
    pub log_to_file: bool,
    /// Ask before deleting a directory together with its contents.
    pub confirm_delete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            start_dir: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            log_level: "warn".to_string(),
            log_to_file: false,
            confirm_delete: true,
        }
    }
}

/// Errors raised while reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("settings I/O error at `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid date_format `{pattern}` in `{}`", .path.display())]
    DateFormat { path: PathBuf, pattern: String },

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Save `settings` to the default settings location.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_path().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

/// Save `settings` to `path`, replacing any previous file atomically.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let text = toml::to_string_pretty(settings)?;
    atomic_write(path, text.as_bytes()).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::settings::load_settings_from;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_keeps_values() {
        let td = tempdir().unwrap();
        let path = td.path().join("nested/settings.toml");
        let s = Settings {
            start_dir: Some(PathBuf::from("/srv/data")),
            date_format: "%d/%m/%Y".into(),
            log_level: "debug".into(),
            log_to_file: true,
            confirm_delete: false,
        };
        save_settings_to(&path, &s).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), s);
    }
}
