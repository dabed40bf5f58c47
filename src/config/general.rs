//! The general configuration settings for fieldlist.
//!
//! This module defines the [General] struct for deserializing
//! general settings from the fieldlist.toml configuration file
//! and the [InternalGeneral] struct for internal use within fieldlist.
//!
//! It covers where listing configs are looked up and how entries are sorted.

use crate::utils::expand_home_path;

use serde::Deserialize;

use std::path::PathBuf;

/// Default file name of a per directory listing config.
pub const DEFAULT_CONFIG_NAME: &str = ".fieldlist.json";

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    config_name: String,
    root: Option<String>,
    case_insensitive: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            config_name: DEFAULT_CONFIG_NAME.to_string(),
            root: None,
            case_insensitive: true,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    config_name: String,
    root: Option<PathBuf>,
    case_insensitive: bool,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        let config_name = if g.config_name.trim().is_empty() {
            DEFAULT_CONFIG_NAME.to_string()
        } else {
            g.config_name
        };
        Self {
            config_name,
            root: g
                .root
                .filter(|r| !r.trim().is_empty())
                .map(|r| expand_home_path(&r)),
            case_insensitive: g.case_insensitive,
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn config_name(&self) -> &str {
        &self.config_name
    }

    /// Upper bound for the listing config lookup. `None` searches up to the filesystem root.
    #[inline]
    pub fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}
