//! Core logic for fieldlist.
//!
//! This module contains the listing engine:
//! - [grammar]: compiles field definitions (`` `text` $1 file-name last-change:%Y ``) into [Instruction]s.
//! - [matcher]: regex name patterns and their [CaptureGroups], last match wins.
//! - [eval]: runs a compiled [Field] against one entry. Never fails.
//! - [field_set]: the compiled [FieldInstructionSet] of a directory or file list.
//! - [rows]: turns entries into [Row]s with a [FieldInstructionSet].
//! - [fm]: directory reading into [FileEntry] values.
//! - [formatter]: entry sorting and cell width helpers.
//! - [listing]: the whole pipeline from a directory path to a [Listing].
//!
//! Only [fm] and [listing] touch the filesystem. Everything compiled here is immutable and
//! can be shared between threads.

pub mod error;
pub mod eval;
pub mod field_set;
pub mod fm;
pub mod formatter;
pub mod grammar;
pub mod listing;
pub mod matcher;
pub mod rows;

pub use error::{CompileError, SyntaxError};
pub use eval::{DEFAULT_TIME_FORMAT, evaluate};
pub use field_set::{EntryKind, FieldInstructionSet, FieldList};
pub use fm::{FileEntry, browse_dir};
pub use formatter::{Formatter, display_width, sanitize_to_exact_width};
pub use grammar::{Field, Instruction};
pub use listing::{Listing, ListingConfig, build_listing};
pub use matcher::{CaptureGroups, capture_groups, compile_patterns};
pub use rows::Row;
