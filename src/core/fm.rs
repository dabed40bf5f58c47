//! Directory reading for fieldlist.
//!
//! Provides the [FileEntry] struct which the row builder and evaluator work on,
//! and [browse_dir] which fills it from the filesystem.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// A single entry in a directory listing.
///
/// Holds the name, whether it is a directory and the modification time if known.
/// Symlinks are classified by their target; broken links count as files without a time.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    flags: u8,
    modified: Option<SystemTime>,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_SYMLINK: u8 = 1 << 1;

    pub fn new(name: impl Into<OsString>, flags: u8, modified: Option<SystemTime>) -> Self {
        FileEntry {
            name: name.into().into_boxed_os_str(),
            flags,
            modified,
        }
    }

    /// Shorthand for a plain file entry.
    pub fn file(name: impl Into<OsString>, modified: Option<SystemTime>) -> Self {
        Self::new(name, 0, modified)
    }

    /// Shorthand for a plain directory entry.
    pub fn dir(name: impl Into<OsString>, modified: Option<SystemTime>) -> Self {
        Self::new(name, Self::IS_DIR, modified)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }

    /// Dotfiles are never listed.
    #[inline]
    pub fn is_dotfile(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }
}

/// Reads the contents of the provided directory into a vector of [FileEntry].
///
/// Entries that vanish or cannot be inspected while reading are skipped.
/// # Returns
/// A Result containing the entries in read order or an std::io::Error
pub fn browse_dir(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let mut flags = 0u8;
        if ft.is_dir() {
            flags |= FileEntry::IS_DIR;
        }

        let md_res = if ft.is_symlink() {
            flags |= FileEntry::IS_SYMLINK;
            fs::metadata(entry.path())
        } else {
            entry.metadata()
        };

        let modified = match md_res {
            Ok(md) => {
                if md.is_dir() {
                    flags |= FileEntry::IS_DIR;
                }
                md.modified().ok()
            }
            Err(_) => None,
        };

        entries.push(FileEntry::new(entry.file_name(), flags, modified));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn file_entry_flags() {
        let fe_file = FileEntry::file("file.txt", None);
        assert!(!fe_file.is_dir());
        assert!(!fe_file.is_dotfile());
        assert_eq!(fe_file.name_str(), "file.txt");

        let flags = FileEntry::IS_DIR | FileEntry::IS_SYMLINK;
        let fe_dir = FileEntry::new(".hidden_folder", flags, None);
        assert!(fe_dir.is_dir());
        assert!(fe_dir.is_symlink());
        assert!(fe_dir.is_dotfile());
    }

    #[test]
    fn browse_reads_kinds_and_times() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join("hello.txt"))?;
        fs::create_dir(tmp.path().join("sub"))?;

        let mut entries = browse_dir(tmp.path())?;
        entries.sort_by(|a, b| a.name().cmp(b.name()));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name_str(), "hello.txt");
        assert!(!entries[0].is_dir());
        assert!(entries[0].modified().is_some());
        assert_eq!(entries[1].name_str(), "sub");
        assert!(entries[1].is_dir());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_dir_counts_as_dir() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("target"))?;
        std::os::unix::fs::symlink(tmp.path().join("target"), tmp.path().join("link"))?;

        let entries = browse_dir(tmp.path())?;
        let link = entries
            .iter()
            .find(|e| e.name_str() == "link")
            .ok_or("link entry missing")?;
        assert!(link.is_dir());
        assert!(link.is_symlink());
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let path = PathBuf::from("/path/does/not/exist");
        assert!(browse_dir(&path).is_err());
    }
}
