//! Miscellaneous utility functions for fieldlist.
//!
//! This module holds the [helpers] submodule with the path utilities, and the [cli] submodule
//! with the command-line argument parsing of the `fl` binary.

pub mod cli;
pub mod helpers;

pub use helpers::{expand_home_path, get_home, resolve_dir, shorten_home_path};
