//! Display configuration options for fieldlist
//!
//! This module defines the display configuration options which are read from the fieldlist.toml
//! configuration file. They only affect the text table renderer.

use serde::Deserialize;

/// Text table options.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    header: bool,
    separator: String,
    back_label: String,
}

impl Display {
    /// Print the field names as the first row.
    #[inline]
    pub fn header(&self) -> bool {
        self.header
    }

    /// Text placed between columns.
    #[inline]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// First cell of the back row shown when a listing enables its back button.
    #[inline]
    pub fn back_label(&self) -> &str {
        &self.back_label
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            header: true,
            separator: "  ".to_string(),
            back_label: "..".to_string(),
        }
    }
}
