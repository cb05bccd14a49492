//! Filesystem primitives used by the manager
//!
//! Reads degrade to empty results; only creation and deletion report errors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FolderError;

pub trait DirectoryScanner {
    /// Immediate children of `path`, in filesystem order. Empty when `path`
    /// is missing or not a directory.
    fn list_children(&self, path: &Path) -> Vec<PathBuf>;

    /// True only for an existing directory without any entries
    fn is_empty_directory(&self, path: &Path) -> bool;

    /// Create `path` and its missing ancestors. An existing directory is success.
    fn create_directory_recursive(&self, path: &Path) -> Result<PathBuf, FolderError>;

    /// Remove one entry. Never recurses: a non-empty directory is an error.
    fn delete_path(&self, path: &Path) -> Result<(), FolderError>;
}

/// [`DirectoryScanner`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner;

impl DirectoryScanner for FsScanner {
    fn list_children(&self, path: &Path) -> Vec<PathBuf> {
        match fs::read_dir(path) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .collect(),
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "nothing to list");
                Vec::new()
            }
        }
    }

    fn is_empty_directory(&self, path: &Path) -> bool {
        if !path.is_dir() {
            return false;
        }
        fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }

    fn create_directory_recursive(&self, path: &Path) -> Result<PathBuf, FolderError> {
        fs::create_dir_all(path).map_err(|source| FolderError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path.to_path_buf())
    }

    fn delete_path(&self, path: &Path) -> Result<(), FolderError> {
        let to_error = |source| FolderError::Delete {
            path: path.to_path_buf(),
            source,
        };
        // symlink_metadata: a link to a directory is removed as a link
        let metadata = fs::symlink_metadata(path).map_err(to_error)?;
        if metadata.is_dir() {
            fs::remove_dir(path).map_err(to_error)
        } else {
            fs::remove_file(path).map_err(to_error)
        }
    }
}
