//! Renderers for a [Listing].
//!
//! [render_table] prints aligned columns for the terminal, [render_json] the listing as JSON
//! for other programs.

use crate::config::Display;
use crate::core::{Listing, display_width, sanitize_to_exact_width};

/// Renders the title line followed by the header, back row, directories and files.
///
/// Columns are as wide as their widest cell. Rows shorter than the widest row are padded
/// with empty cells.
pub fn render_table(listing: &Listing, display: &Display) -> String {
    let mut rows: Vec<Vec<&str>> = Vec::new();

    if display.header() && !listing.field_names.is_empty() {
        rows.push(listing.field_names.iter().map(String::as_str).collect());
    }
    if listing.back_button {
        rows.push(vec![display.back_label()]);
    }
    for row in listing.directories.iter().chain(listing.files.iter()) {
        rows.push(row.iter().map(String::as_str).collect());
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let mut out = String::new();
    out.push_str(&listing.title);
    out.push('\n');

    for row in &rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(i, &w)| sanitize_to_exact_width(row.get(i).copied().unwrap_or(""), w))
            .collect::<Vec<_>>()
            .join(display.separator());
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Pretty printed JSON with a trailing newline.
pub fn render_json(listing: &Listing) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(listing)?;
    out.push('\n');
    Ok(out)
}
