//! The main config loading module for fieldlist.
//!
//! Handles loading and deserializing settings from `fieldlist.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing and processing.
//!
//! Also implements default config generation for `fl --init`.

use crate::config::Display;
use crate::config::{General, InternalGeneral};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
}

/// Main configuration struct for fieldlist
/// This struct holds the processed configuration options.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
}

/// Conversion from RawConfig to Config
/// This handles any necessary processing of the raw values
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
        }
    }
}

const DEFAULT_TOML: &str = r##"# fieldlist.toml - default configuration for fieldlist

# Commented values are the internal defaults.

[general]
# config_name = ".fieldlist.json"    # name of the per directory listing config
# root = "/"                          # do not look for listing configs above this directory
# case_insensitive = true             # sort entries ignoring case

[display]
# header = true                       # print the field names as first row
# separator = "  "                    # text between columns
# back_label = ".."                   # first cell of the back row
"##;

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no fieldlist.toml found, using defaults");
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    raw.into()
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "error parsing config: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "error reading config: {e}");
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the FIELDLIST_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/fieldlist/fieldlist.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FIELDLIST_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("fieldlist/fieldlist.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/fieldlist/fieldlist.toml");
        }
        PathBuf::from("fieldlist.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}
