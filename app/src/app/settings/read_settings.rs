use std::fs;
use std::io;
use std::path::Path;

use super::config_dirs::settings_path;
use super::write_settings::{Settings, SettingsError};
use crate::ui::format::is_valid_date_format;

/// Load settings from the default location, falling back to defaults when
/// the file (or any config directory) is missing.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. A missing file yields the defaults; a file
/// that exists but does not parse, or names a `date_format` `chrono` cannot
/// render, is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let settings: Settings = toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if !is_valid_date_format(&settings.date_format) {
        return Err(SettingsError::DateFormat {
            path: path.to_path_buf(),
            pattern: settings.date_format,
        });
    }
    Ok(settings)
}
