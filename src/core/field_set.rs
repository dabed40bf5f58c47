//! Compiled field lists.
//!
//! A listing has two lists, one for directories and one for files. Each is configured by a
//! [FieldList] fragment and compiled once into a [FieldInstructionSet]: the name patterns plus
//! one [Field] per column. The compiled set is immutable and can be shared between threads.

use crate::core::error::CompileError;
use crate::core::grammar::Field;
use crate::core::matcher::compile_patterns;
use crate::core::FileEntry;

use regex::Regex;
use serde::Deserialize;

use std::fmt;

/// Raw list fragment as written in a listing config.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FieldList {
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub parsing: Vec<String>,
    pub field_data: Vec<String>,
}

/// Which entries a list renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Key of the list in a listing config.
    pub fn list_key(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory-list",
            EntryKind::File => "file-list",
        }
    }

    #[inline]
    pub fn matches(self, entry: &FileEntry) -> bool {
        match self {
            EntryKind::Directory => entry.is_dir(),
            EntryKind::File => !entry.is_dir(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.list_key())
    }
}

/// Patterns and column definitions of one list, ready to evaluate.
#[derive(Debug, Clone)]
pub struct FieldInstructionSet {
    enabled: bool,
    kind: EntryKind,
    patterns: Box<[Regex]>,
    fields: Box<[Field]>,
}

impl FieldInstructionSet {
    /// Compiles the patterns first, then each field definition in declaration order.
    /// Any failure rejects the whole list.
    pub fn compile(list: &FieldList, kind: EntryKind) -> Result<Self, CompileError> {
        let patterns = compile_patterns(&list.parsing)?;
        let fields = list
            .field_data
            .iter()
            .enumerate()
            .map(|(index, def)| {
                Field::compile(def).map_err(|source| CompileError::Field { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            enabled: list.enabled,
            kind,
            patterns: patterns.into_boxed_slice(),
            fields: fields.into_boxed_slice(),
        })
    }

    /// A list that renders nothing.
    pub fn disabled(kind: EntryKind) -> Self {
        Self {
            enabled: false,
            kind,
            patterns: Box::default(),
            fields: Box::default(),
        }
    }

    // Accessors

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
