//! The listing pipeline.
//!
//! [ListingConfig] is the compiled form of a directory's listing config. [build_listing] reads
//! a directory, sorts the entries with the [Formatter] and runs both field lists over them.
//! The resulting [Listing] is what the renderers consume.

use crate::core::field_set::{EntryKind, FieldInstructionSet};
use crate::core::rows::Row;
use crate::core::{Formatter, browse_dir};
use crate::utils::shorten_home_path;

use serde::Serialize;

use std::io;
use std::path::Path;

/// Compiled listing configuration of one directory tree.
///
/// Built once per config file by `DirConfig::compile` and never changed afterwards.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    title: Option<String>,
    field_names: Vec<String>,
    back_button: bool,
    directories: FieldInstructionSet,
    files: FieldInstructionSet,
}

impl ListingConfig {
    pub fn new(
        title: Option<String>,
        field_names: Vec<String>,
        back_button: bool,
        directories: FieldInstructionSet,
        files: FieldInstructionSet,
    ) -> Self {
        debug_assert_eq!(directories.kind(), EntryKind::Directory);
        debug_assert_eq!(files.kind(), EntryKind::File);
        Self {
            title: title.filter(|t| !t.is_empty()),
            field_names,
            back_button,
            directories,
            files,
        }
    }

    // Getters

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[inline]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    #[inline]
    pub fn back_button(&self) -> bool {
        self.back_button
    }

    #[inline]
    pub fn directories(&self) -> &FieldInstructionSet {
        &self.directories
    }

    #[inline]
    pub fn files(&self) -> &FieldInstructionSet {
        &self.files
    }
}

/// Rendered rows of one directory, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Listing {
    pub title: String,
    pub field_names: Vec<String>,
    pub back_button: bool,
    pub directories: Vec<Row>,
    pub files: Vec<Row>,
}

/// Reads `dir` and renders it with `config`.
///
/// The title falls back to the directory path with the home directory shortened to "~".
/// # Returns
/// The listing or the std::io::Error from reading the directory.
pub fn build_listing(
    dir: &Path,
    config: &ListingConfig,
    formatter: &Formatter,
) -> io::Result<Listing> {
    let mut entries = browse_dir(dir)?;
    formatter.sort_entries(&mut entries);

    Ok(Listing {
        title: config
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| shorten_home_path(dir)),
        field_names: config.field_names().to_vec(),
        back_button: config.back_button(),
        directories: config.directories().rows(&entries),
        files: config.files().rows(&entries),
    })
}
