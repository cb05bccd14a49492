//! Base directory resolution
//!
//! Priority: explicit path (CLI or config) > platform desktop folder.

use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};

use crate::error::AppError;

/// The platform desktop folder, or the filesystem root when there is none
pub fn default_base_dir() -> PathBuf {
    dirs::desktop_dir().unwrap_or_else(|| PathBuf::from(MAIN_SEPARATOR_STR))
}

/// Pick the base directory for this run. Unlike [`default_base_dir`] this
/// never falls back to the root: a missing desktop is a startup error.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit {
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "using explicit base directory");
            return Ok(path.to_path_buf());
        }
        return Err(AppError::BaseDirMissing {
            path: path.to_path_buf(),
        });
    }

    match dirs::desktop_dir() {
        Some(desktop) if desktop.is_dir() => {
            tracing::debug!(path = %desktop.display(), "using desktop as base directory");
            Ok(desktop)
        }
        Some(desktop) => {
            tracing::debug!(path = %desktop.display(), "desktop folder does not exist");
            Err(AppError::NoDesktop)
        }
        None => Err(AppError::NoDesktop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_directory_wins() {
        let tmp = tempdir().unwrap();
        let resolved = resolve_base_dir(Some(tmp.path())).unwrap();
        assert_eq!(resolved, tmp.path());
    }

    #[test]
    fn explicit_missing_directory_is_an_error() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = resolve_base_dir(Some(&missing)).unwrap_err();
        assert!(matches!(err, AppError::BaseDirMissing { ref path } if *path == missing));
    }

    #[test]
    fn explicit_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("notes.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(resolve_base_dir(Some(&file)).is_err());
    }

    #[test]
    fn default_base_dir_is_absolute() {
        assert!(default_base_dir().is_absolute());
    }
}
