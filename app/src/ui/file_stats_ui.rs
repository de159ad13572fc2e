use std::path::Path;

use crate::app::types::DirectoryEntry;
use crate::ui::format::{format_modified, format_size};

/// Format the key statistics of one entry as `Label: value` lines.
pub fn format_file_stats(dir: &Path, e: &DirectoryEntry, date_format: &str) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Name: {}", e.name));
    lines.push(format!("Path: {}", dir.join(&e.name).display()));
    lines.push(format!("Type: {}", e.kind.label()));
    if let Some(size) = e.size {
        lines.push(format!("Size: {} ({} bytes)", format_size(size), size));
    }
    let modified = format_modified(e.modified.as_ref(), date_format);
    lines.push(format!(
        "Modified: {}",
        if modified.is_empty() { "(unknown)" } else { &modified }
    ));
    lines
}
