//! Helpers for fieldlist.
//!
//! Path utilities used by the config loader and the listing pipeline:
//! - Locating the home directory
//! - Expanding a leading "~" in configured paths
//! - Displaying home directories as "~" in listing titles
//! - Resolving the directory given on the command line

use std::path::{MAIN_SEPARATOR, Path, PathBuf};
use std::{fs, io};

/// Home directory of the current user, if it can be determined.
pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expands a leading "~" to the home directory.
///
/// Example: "~/srv" -> "/home/user/srv"
pub fn expand_home_path(path: &str) -> PathBuf {
    if path == "~" {
        return get_home().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix('~')
        && let Some(rest) = rest.strip_prefix(&['/', MAIN_SEPARATOR][..])
        && let Some(home) = get_home()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Util function to shorten home directory to ~.
/// Is used for the default listing title.
pub fn shorten_home_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Some(home_dir) = get_home()
        && let Ok(stripped) = path.strip_prefix(&home_dir)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        } else {
            let mut short = stripped.display().to_string();
            if short.starts_with(MAIN_SEPARATOR) {
                short.remove(0);
            }
            return format!("~{}{}", MAIN_SEPARATOR, short);
        }
    }
    path.display().to_string()
}

/// Resolves the directory to list: "~" expanded, made absolute and canonical.
///
/// # Returns
/// The canonical path, or an error if it does not exist or is not a directory.
pub fn resolve_dir(arg: Option<&str>) -> io::Result<PathBuf> {
    let path = match arg {
        Some(arg) => expand_home_path(arg),
        None => std::env::current_dir()?,
    };
    let canonical = fs::canonicalize(&path)?;
    if !canonical.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a directory", path.display()),
        ));
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_expand_home_path() {
        assert_eq!(expand_home_path("/srv/files"), PathBuf::from("/srv/files"));
        assert_eq!(expand_home_path("relative"), PathBuf::from("relative"));
        if let Some(home) = get_home() {
            assert_eq!(expand_home_path("~"), home);
            assert_eq!(expand_home_path("~/srv"), home.join("srv"));
        }
    }

    #[test]
    fn test_shorten_home_path_roundtrip() {
        if let Some(home) = get_home() {
            assert_eq!(shorten_home_path(&home), "~");
            assert_eq!(
                shorten_home_path(home.join("music")),
                format!("~{}music", MAIN_SEPARATOR)
            );
        }
        assert_eq!(shorten_home_path("/"), "/");
    }

    #[test]
    fn test_resolve_dir() -> Result<(), Box<dyn error::Error>> {
        let dir = tempdir()?;
        let resolved = resolve_dir(dir.path().to_str())?;
        assert_eq!(resolved, fs::canonicalize(dir.path())?);

        let file = dir.path().join("plain.txt");
        File::create(&file)?;
        let err = resolve_dir(file.to_str()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        assert!(resolve_dir(Some("/path/does/not/exist")).is_err());
        Ok(())
    }
}
