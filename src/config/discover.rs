//! Listing config lookup.
//!
//! The config that applies to a directory is the nearest file with the configured name in the
//! directory itself or one of its ancestors. The search never leaves the configured root.

use std::path::{Path, PathBuf};

/// Finds the nearest `file_name` for `dir`, walking up to and including `root`.
///
/// Without a root the walk ends at the filesystem root. A `dir` outside of `root` finds nothing.
pub fn find_config(root: Option<&Path>, dir: &Path, file_name: &str) -> Option<PathBuf> {
    if let Some(root) = root
        && !dir.starts_with(root)
    {
        tracing::debug!(dir = %dir.display(), root = %root.display(), "directory outside of root");
        return None;
    }

    for ancestor in dir.ancestors() {
        let candidate = ancestor.join(file_name);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "found listing config");
            return Some(candidate);
        }
        if root.is_some_and(|root| ancestor == root) {
            break;
        }
    }
    tracing::debug!(dir = %dir.display(), file_name, "no listing config found");
    None
}
