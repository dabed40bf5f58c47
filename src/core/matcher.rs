//! Name pattern matching.
//!
//! Every list carries an ordered set of regular expressions. The capture groups of the
//! **last** pattern that matches an entry name are the ones its fields see, so later, more
//! specific patterns override earlier catch-alls.

use crate::core::error::CompileError;

use regex::Regex;

/// Capture groups of one pattern match, borrowed from the entry name.
///
/// Index 0 is the whole match. Out of range indices and groups that took no part in the
/// match read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureGroups<'a> {
    groups: Vec<&'a str>,
}

impl<'a> CaptureGroups<'a> {
    #[inline]
    pub fn get(&self, index: usize) -> &'a str {
        self.groups.get(index).copied().unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Compiles the raw patterns in order. The first invalid one fails the whole list.
pub fn compile_patterns<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Regex>, CompileError> {
    raw.iter()
        .enumerate()
        .map(|(index, pattern)| {
            Regex::new(pattern.as_ref()).map_err(|source| CompileError::Pattern { index, source })
        })
        .collect()
}

/// Returns the capture groups of the last pattern matching `name`, or empty groups.
///
/// Scanning from the back and stopping at the first hit gives the same result as letting
/// every match overwrite the previous one, without running the earlier patterns.
pub fn capture_groups<'a>(patterns: &[Regex], name: &'a str) -> CaptureGroups<'a> {
    patterns
        .iter()
        .rev()
        .find_map(|pattern| pattern.captures(name))
        .map(|caps| CaptureGroups {
            groups: caps
                .iter()
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect(),
        })
        .unwrap_or_default()
}
