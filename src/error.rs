use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single filesystem mutation on a daily folder
#[derive(Debug, Error)]
pub enum FolderError {
    #[error("Failed to create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("Failed to delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },
}

impl FolderError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FolderError::Create { path, .. } | FolderError::Delete { path, .. } => path,
        }
    }

    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            FolderError::Create { source, .. } | FolderError::Delete { source, .. } => {
                source.kind()
            }
        }
    }

    /// The entry vanished before the operation reached it
    pub fn is_not_found(&self) -> bool {
        self.io_kind() == io::ErrorKind::NotFound
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Base directory {} does not exist or is not a directory", path.display())]
    BaseDirMissing { path: PathBuf },

    #[error("No desktop folder could be found or the desktop folder does not exist")]
    NoDesktop,

    #[error("Not a daily folder: {name}")]
    UnknownFolder { name: String },

    #[error("Failed to delete {count} folder(s)")]
    DeletionFailed { count: usize },

    #[error(transparent)]
    Folder(#[from] FolderError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}
