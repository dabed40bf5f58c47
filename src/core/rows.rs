//! Row building.
//!
//! Turns a directory's entries into rows of field text using one [FieldInstructionSet].
//! Only entries of the set's kind are rendered, dotfiles never are, and the input order is
//! kept. Sorting and merging the directory and file rows is up to the caller.

use crate::core::FileEntry;
use crate::core::eval::evaluate;
use crate::core::field_set::FieldInstructionSet;
use crate::core::matcher::capture_groups;

/// Field texts of one entry, one per column.
pub type Row = Vec<String>;

impl FieldInstructionSet {
    /// Whether `entry` gets a row from this set.
    #[inline]
    pub fn includes(&self, entry: &FileEntry) -> bool {
        self.enabled() && !entry.is_dotfile() && self.kind().matches(entry)
    }

    /// Builds the rows for every included entry, in input order.
    pub fn rows(&self, entries: &[FileEntry]) -> Vec<Row> {
        if !self.enabled() {
            return Vec::new();
        }
        entries
            .iter()
            .filter(|e| self.includes(e))
            .map(|e| self.row_for(e))
            .collect()
    }

    /// Evaluates every field for one entry without any filtering.
    pub fn row_for(&self, entry: &FileEntry) -> Row {
        let name = entry.name_str();
        let captures = capture_groups(self.patterns(), &name);
        self.fields()
            .iter()
            .map(|field| evaluate(field, entry, &captures))
            .collect()
    }
}
