//! Sorting and display helpers for listings.
//!
//! The [Formatter] struct holds the sorting rule from the fieldlist.toml configuration and is
//! applied to entries before rows are built. The row builder itself keeps input order.
//!
//! Also holds the width helpers used by the text table renderer.

use crate::core::FileEntry;

use unicode_width::UnicodeWidthChar;

/// Formatter struct to handle sorting of file entries based on user preferences.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    case_insensitive: bool,
}

impl Formatter {
    pub fn new(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }

    /// Sorts the given file entries in place by name.
    pub fn sort_entries(&self, entries: &mut [FileEntry]) {
        if self.case_insensitive {
            entries.sort_by_cached_key(|e| e.name_str().to_lowercase());
        } else {
            entries.sort_by(|a, b| a.name().cmp(b.name()));
        }
    }
}

/// Display width of a cell, ignoring control characters and counting tabs as 4 columns.
pub fn display_width(text: &str) -> usize {
    text.chars()
        .map(|c| match c {
            '\t' => 4,
            c if c.is_control() => 0,
            c => c.width().unwrap_or(0),
        })
        .sum()
}

/// Clean the output to the given width by removing control characters,
/// expanding tabs to 4 spaces, and truncating or padding the string to fit exactly.
/// # Returns
/// A sanitized string that is exactly `width` columns wide.
pub fn sanitize_to_exact_width(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut current_w = 0;

    for char in line.chars() {
        if char == '\t' {
            let space_count = 4 - (current_w % 4);
            if current_w + space_count > width {
                break;
            }
            out.push_str(&" ".repeat(space_count));
            current_w += space_count;
            continue;
        }

        if char.is_control() {
            continue;
        }

        let w = char.width().unwrap_or(0);
        if current_w + w > width {
            break;
        }

        out.push(char);
        current_w += w;
    }

    // If the string is shorter than the column, fill it with spaces.
    if current_w < width {
        out.push_str(&" ".repeat(width - current_w));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn sanitization_and_exact_width() {
        let width = 10;

        let cases = vec![
            ("short.txt", 10),
            ("very_long_filename.txt", 10),
            ("🦀_crab.rs", 10),
            ("\t_tab", 10),
        ];

        for (input, expected_width) in cases {
            let result = sanitize_to_exact_width(input, width);
            let actual_width = UnicodeWidthStr::width(result.as_str());

            assert_eq!(
                actual_width, expected_width,
                "Failed to produce exact width for input: '{}'. Result was: '{}' (width: {})",
                input, result, actual_width
            );

            assert!(
                !result.chars().any(|c| c.is_control() && c != ' '),
                "Result contains control characters: {:?}",
                result
            );
        }
    }

    #[test]
    fn display_width_counts_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("🦀"), 2);
        assert_eq!(display_width("a\u{7}b"), 2);
    }

    #[test]
    fn sorts_by_name() {
        let mut entries = vec![
            FileEntry::file("b", None),
            FileEntry::file("C", None),
            FileEntry::file("a", None),
        ];

        Formatter::new(true).sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, ["a", "b", "C"]);

        Formatter::new(false).sort_entries(&mut entries);
        let names: Vec<_> = entries.iter().map(|e| e.name_str().into_owned()).collect();
        assert_eq!(names, ["C", "a", "b"]);
    }
}
