use crate::error::{FilelogError, Result};
use std::path::{Component, Path, PathBuf};

/// Get the home directory in a cross-platform way
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir()
        .ok_or_else(|| FilelogError::PathError("Could not find home directory".to_string()))
}

/// Expand a leading `~` to the home directory.
/// `~/logs` -> `/home/name/logs`, other paths are returned unchanged.
/// `~user` forms are not supported and are left as-is.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            Ok(home_dir()?.join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Make `path` absolute against the current directory, without touching the
/// filesystem. The log directory may not exist yet, so no canonicalization.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home_tilde_prefix() {
        let expanded = expand_home(Path::new("~/logs/app")).unwrap();
        let home = home_dir().unwrap();
        assert_eq!(expanded, home.join("logs").join("app"));
    }

    #[test]
    fn test_expand_home_bare_tilde() {
        let expanded = expand_home(Path::new("~")).unwrap();
        assert_eq!(expanded, home_dir().unwrap());
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        let path = Path::new("/var/log/filelog");
        assert_eq!(expand_home(path).unwrap(), path);

        // Tilde in the middle is a literal directory name
        let path = Path::new("logs/~/x");
        assert_eq!(expand_home(path).unwrap(), path);

        let path = Path::new("~other/logs");
        assert_eq!(expand_home(path).unwrap(), path);
    }

    #[test]
    fn test_absolutize_relative() {
        let abs = absolutize(Path::new("logs")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("logs"));
    }

    #[test]
    fn test_absolutize_absolute_unchanged() {
        let path = std::env::temp_dir().join("filelog");
        assert_eq!(absolutize(&path).unwrap(), path);
    }
}
