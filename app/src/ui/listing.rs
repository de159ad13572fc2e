//! Plain-text table of a directory listing: Name, Date Modified, Type, Size.

use console::style;

use crate::app::types::DirectoryEntry;
use crate::ui::format::{format_modified, format_size};

const HEADERS: [&str; 4] = ["Name", "Date Modified", "Type", "Size"];

/// One rendered row, before padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub modified: String,
    pub kind: &'static str,
    /// Empty for directories.
    pub size: String,
    pub is_dir: bool,
}

impl Row {
    pub fn from_entry(e: &DirectoryEntry, date_format: &str) -> Self {
        Row {
            name: e.name.clone(),
            modified: format_modified(e.modified.as_ref(), date_format),
            kind: e.kind.label(),
            size: e.size.map(format_size).unwrap_or_default(),
            is_dir: e.is_dir(),
        }
    }
}

/// Render `entries` as an aligned table, in the order given.
///
/// Directory names are styled with `console`, which drops the styling when
/// output is not a terminal.
pub fn render_listing(entries: &[DirectoryEntry], date_format: &str) -> String {
    let rows: Vec<Row> = entries
        .iter()
        .map(|e| Row::from_entry(e, date_format))
        .collect();

    let w_name = column_width(&rows, HEADERS[0], |r| r.name.chars().count());
    let w_date = column_width(&rows, HEADERS[1], |r| r.modified.chars().count());
    let w_kind = column_width(&rows, HEADERS[2], |r| r.kind.len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<w_name$}  {:<w_date$}  {:<w_kind$}  {}\n",
        HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
    ));
    for r in &rows {
        let pad = w_name.saturating_sub(r.name.chars().count());
        let name = if r.is_dir {
            style(&r.name).bold().blue().to_string()
        } else {
            r.name.clone()
        };
        out.push_str(&format!(
            "{}{}  {:<w_date$}  {:<w_kind$}  {}",
            name,
            " ".repeat(pad),
            r.modified,
            r.kind,
            r.size
        ));
        out.push('\n');
    }
    out
}

fn column_width(rows: &[Row], header: &str, cell: impl Fn(&Row) -> usize) -> usize {
    rows.iter().map(cell).max().unwrap_or(0).max(header.len())
}
