//! Text rendering for the launcher: size/date formatting, the listing
//! table and the per-entry details view.

pub mod file_stats_ui;
pub mod format;
pub mod listing;

pub use file_stats_ui::format_file_stats;
pub use format::{format_date, format_modified, format_size, DEFAULT_DATE_FORMAT};
pub use listing::render_listing;
