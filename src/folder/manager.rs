//! Orchestration over one base directory
//!
//! Nothing is cached between calls: every query lists the base directory
//! again and every "today" is asked from the clock again.

use std::path::{Path, PathBuf};

use crate::error::FolderError;
use crate::utils::{DateSource, SystemClock};

use super::classifier::{is_daily_folder, today_folder_name};
use super::scanner::{DirectoryScanner, FsScanner};

#[derive(Debug)]
pub struct DeletionFailure {
    pub path: PathBuf,
    pub error: FolderError,
}

/// Outcome of a bulk deletion. One failed entry never stops the others.
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: Vec<PathBuf>,
    pub failures: Vec<DeletionFailure>,
}

impl DeletionReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failures.len()
    }
}

pub struct DailyFolderManager<S = FsScanner, C = SystemClock> {
    base_dir: PathBuf,
    scanner: S,
    clock: C,
}

impl DailyFolderManager {
    /// Manager on the real filesystem, using the local date
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_parts(base_dir, FsScanner, SystemClock::local())
    }
}

impl<S: DirectoryScanner, C: DateSource> DailyFolderManager<S, C> {
    pub fn with_parts(base_dir: impl Into<PathBuf>, scanner: S, clock: C) -> Self {
        Self {
            base_dir: base_dir.into(),
            scanner,
            clock,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn today_folder_name(&self) -> String {
        today_folder_name(&self.clock)
    }

    /// Children of the base directory whose name is a daily folder name, in
    /// filesystem order
    pub fn list_daily_folders(&self) -> Vec<PathBuf> {
        self.scanner
            .list_children(&self.base_dir)
            .into_iter()
            .filter(|path| is_daily_folder(path))
            .collect()
    }

    /// Daily folders other than today's, sorted by name
    pub fn other_daily_folders(&self) -> Vec<PathBuf> {
        let today = self.current_daily_folder_path();
        let mut folders: Vec<PathBuf> = self
            .list_daily_folders()
            .into_iter()
            .filter(|path| *path != today)
            .collect();
        folders.sort();
        folders
    }

    /// Path of today's folder. Does not touch the filesystem.
    pub fn current_daily_folder_path(&self) -> PathBuf {
        self.base_dir.join(self.today_folder_name())
    }

    pub fn create_folder_for_today(&self) -> Result<PathBuf, FolderError> {
        let path = self.current_daily_folder_path();
        let created = self.scanner.create_directory_recursive(&path)?;
        tracing::info!(path = %created.display(), "today's folder ready");
        Ok(created)
    }

    /// Names of the immediate children of `path`, for display only
    pub fn list_folder_contents(&self, path: &Path) -> Vec<String> {
        self.scanner
            .list_children(path)
            .iter()
            .filter_map(|child| child.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    /// Whether `path` is a directory with no entries. An unreadable
    /// directory is not empty.
    pub fn is_empty_folder(&self, path: &Path) -> bool {
        self.scanner.is_empty_directory(path)
    }

    pub fn delete_folders<P>(&self, mut predicate: P) -> DeletionReport
    where
        P: FnMut(&Path) -> bool,
    {
        let mut report = DeletionReport::default();
        for path in self.list_daily_folders() {
            if !predicate(&path) {
                continue;
            }
            match self.scanner.delete_path(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "deleted");
                    report.deleted.push(path);
                }
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "unable to delete");
                    report.failures.push(DeletionFailure { path, error });
                }
            }
        }
        report
    }

    /// Delete empty daily folders. Today's folder is kept even when empty.
    pub fn delete_empty_folders(&self) -> DeletionReport {
        let today = self.today_folder_name();
        self.delete_folders(|path| self.is_disposable(path, &today))
    }

    /// What [`Self::delete_empty_folders`] would delete right now
    pub fn empty_folders(&self) -> Vec<PathBuf> {
        let today = self.today_folder_name();
        let mut folders: Vec<PathBuf> = self
            .list_daily_folders()
            .into_iter()
            .filter(|path| self.is_disposable(path, &today))
            .collect();
        folders.sort();
        folders
    }

    /// Delete the daily folders with the given names
    pub fn delete_named<T: AsRef<str>>(&self, names: &[T]) -> DeletionReport {
        self.delete_folders(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| names.iter().any(|n| AsRef::<str>::as_ref(n) == name))
        })
    }

    fn is_disposable(&self, path: &Path, today: &str) -> bool {
        let is_today = path.file_name().is_some_and(|name| name == today);
        !is_today && self.is_empty_folder(path)
    }
}
