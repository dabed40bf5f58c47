//! Compile errors for field definitions and name patterns.
//!
//! [SyntaxError] describes what is wrong with a single field definition string and where.
//! [CompileError] adds which pattern or field of a list failed, so a configuration author
//! can find the broken entry without guessing.
//!
//! Matching and evaluation have no error type: they cannot fail.

use thiserror::Error;

/// A problem inside one raw field definition.
///
/// Columns are 1-based and count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unterminated literal starting at column {column}")]
    UnterminatedLiteral { column: usize },

    #[error("invalid capture index `{text}` at column {column}")]
    InvalidCaptureIndex { text: String, column: usize },

    #[error("unknown data key `{key}` at column {column}")]
    UnknownKey { key: String, column: usize },

    #[error("empty field definition")]
    EmptyDefinition,
}

impl SyntaxError {
    /// Column where the offending token starts, if the error has one.
    pub fn column(&self) -> Option<usize> {
        match self {
            SyntaxError::UnterminatedLiteral { column }
            | SyntaxError::InvalidCaptureIndex { column, .. }
            | SyntaxError::UnknownKey { column, .. } => Some(*column),
            SyntaxError::EmptyDefinition => None,
        }
    }
}

/// Failure to compile one list of patterns and field definitions.
///
/// `index` is 0-based; the message shows it 1-based.
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    #[error("pattern #{} is invalid: {source}", .index + 1)]
    Pattern {
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("field #{} failed: {source}", .index + 1)]
    Field {
        index: usize,
        #[source]
        source: SyntaxError,
    },
}

impl CompileError {
    /// Index of the pattern or field that failed.
    pub fn index(&self) -> usize {
        match self {
            CompileError::Pattern { index, .. } | CompileError::Field { index, .. } => *index,
        }
    }
}
