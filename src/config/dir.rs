//! Per directory listing configs.
//!
//! A listing config is a JSON file (`.fieldlist.json` by default) placed in a directory. It
//! applies to that directory and every directory below it that has no config of its own.
//!
//! ```json
//! {
//!   "directory-name": "Releases",
//!   "field-names": ["Name", "Version", "Date"],
//!   "enable-back-button": true,
//!   "directory-list": { "enabled": true, "field-data": ["file-name`/`", "``", "last-change"] },
//!   "file-list": {
//!     "enabled": true,
//!     "parsing": ["^app-(\\d+\\.\\d+)\\.tar\\.gz$"],
//!     "field-data": ["file-name", "$1", "last-change:%Y-%m-%d"]
//!   }
//! }
//! ```
//!
//! [DirConfig] is the raw form, [DirConfig::compile] turns it into a [ListingConfig].

use crate::core::{CompileError, EntryKind, FieldInstructionSet, FieldList, ListingConfig};

use serde::Deserialize;
use thiserror::Error;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors while loading or compiling a listing config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no listing config `{name}` found for {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid listing config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{list}: {source}")]
    Compile {
        list: EntryKind,
        #[source]
        source: CompileError,
    },
}

/// Raw listing config as read from JSON.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct DirConfig {
    pub directory_name: String,
    pub field_names: Vec<String>,
    pub enable_back_button: bool,
    pub directory_list: FieldList,
    pub file_list: FieldList,
}

impl DirConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads and parses a listing config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Compiles the directory list, then the file list.
    /// # Returns
    /// The immutable [ListingConfig] or the first compile error, tagged with its list.
    pub fn compile(self) -> Result<ListingConfig, ConfigError> {
        let directories = compile_list(&self.directory_list, EntryKind::Directory)?;
        let files = compile_list(&self.file_list, EntryKind::File)?;

        Ok(ListingConfig::new(
            Some(self.directory_name),
            self.field_names,
            self.enable_back_button,
            directories,
            files,
        ))
    }
}

fn compile_list(list: &FieldList, kind: EntryKind) -> Result<FieldInstructionSet, ConfigError> {
    FieldInstructionSet::compile(list, kind)
        .map_err(|source| ConfigError::Compile { list: kind, source })
}

/// Loads and compiles a listing config file in one step.
pub fn load_listing_config(path: &Path) -> Result<ListingConfig, ConfigError> {
    DirConfig::load(path)?.compile()
}

const SAMPLE_JSON: &str = r#"{
  "directory-name": "",
  "field-names": ["Name", "Type", "Last change"],
  "enable-back-button": true,
  "directory-list": {
    "enabled": true,
    "parsing": [],
    "field-data": ["file-name`/`", "`directory`", "last-change"]
  },
  "file-list": {
    "enabled": true,
    "parsing": ["^.*$", "^.+\\.([^.]+)$"],
    "field-data": ["file-name", "$1", "last-change:%d.%m.%Y %H:%M"]
  }
}
"#;

/// Writes a sample listing config named `name` into `dir`.
/// If the file already exists, returns an error.
pub fn generate_sample(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Listing config already exists at {:?}", path),
        ));
    }
    fs::write(&path, SAMPLE_JSON)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SyntaxError;
    use tempfile::tempdir;

    #[test]
    fn parses_full_config() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = DirConfig::from_json(
            r#"{
                "directory-name": "Music",
                "field-names": ["Name"],
                "enable-back-button": true,
                "directory-list": {"enabled": false},
                "file-list": {"enabled": true, "parsing": ["^(.*)$"], "field-data": ["$1"]}
            }"#,
        )?;
        assert_eq!(cfg.directory_name, "Music");
        assert!(cfg.enable_back_button);
        assert!(!cfg.directory_list.enabled);
        assert_eq!(cfg.file_list.parsing, vec!["^(.*)$".to_string()]);

        let compiled = cfg.compile()?;
        assert_eq!(compiled.title(), Some("Music"));
        assert!(!compiled.directories().enabled());
        assert_eq!(compiled.files().fields().len(), 1);
        Ok(())
    }

    #[test]
    fn compile_error_names_the_list() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = DirConfig::from_json(r#"{"file-list": {"field-data": ["file-name", "$x"]}}"#)?;
        let err = cfg.compile().unwrap_err();
        match &err {
            ConfigError::Compile {
                list: EntryKind::File,
                source: CompileError::Field { index: 1, source },
            } => assert_eq!(
                source,
                &SyntaxError::InvalidCaptureIndex {
                    text: "x".into(),
                    column: 1,
                }
            ),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "file-list: field #2 failed: invalid capture index `x` at column 1"
        );
        Ok(())
    }

    #[test]
    fn directory_list_is_compiled_first() -> Result<(), Box<dyn std::error::Error>> {
        let cfg = DirConfig::from_json(
            r#"{"directory-list": {"parsing": ["("]}, "file-list": {"field-data": ["nope"]}}"#,
        )?;
        assert!(matches!(
            cfg.compile(),
            Err(ConfigError::Compile {
                list: EntryKind::Directory,
                source: CompileError::Pattern { index: 0, .. },
            })
        ));
        Ok(())
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            DirConfig::from_json("{\"file-list\": "),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn sample_config_compiles() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = generate_sample(dir.path(), ".fieldlist.json")?;
        let listing = load_listing_config(&path)?;
        assert!(listing.back_button());
        assert_eq!(listing.title(), None);
        assert_eq!(listing.field_names().len(), 3);
        assert!(generate_sample(dir.path(), ".fieldlist.json").is_err());
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DirConfig::load(Path::new("/path/does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
