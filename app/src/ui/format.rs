use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Default `chrono` pattern for modification times.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a byte count with binary (1024-based) units and two decimals.
///
/// Picks the largest of B/KB/MB/GB/TB where the value stays below 1024;
/// anything at or beyond 1024 TB is still shown in TB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let last = UNITS.len() - 1;
    for unit in &UNITS[..last] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} {}", size, UNITS[last])
}

/// Whether every specifier in `pattern` is one `chrono` understands.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Render a timestamp with a `chrono` strftime pattern.
///
/// A pattern `chrono` cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(when: &DateTime<Local>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", when.format(pattern)).is_ok() {
        return out;
    }
    tracing::debug!(pattern, "unusable date format, using default");
    when.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Like [`format_date`], but an unknown time renders as an empty string.
pub fn format_modified(when: Option<&DateTime<Local>>, pattern: &str) -> String {
    when.map(|w| format_date(w, pattern)).unwrap_or_default()
}
