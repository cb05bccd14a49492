use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::SortOrder;
use dailyfolder::{DailyFolderManager, DateSource, DirectoryScanner};

/// Display snapshot of one daily folder
#[derive(Debug, Clone, Serialize)]
pub(crate) struct FolderView {
    pub(crate) name: String,
    pub(crate) path: PathBuf,
    pub(crate) is_today: bool,
    pub(crate) is_empty: bool,
    /// Child names, sorted
    pub(crate) entries: Vec<String>,
}

impl FolderView {
    pub(crate) fn capture<S, C>(manager: &DailyFolderManager<S, C>, path: &Path) -> Self
    where
        S: DirectoryScanner,
        C: DateSource,
    {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut entries = manager.list_folder_contents(path);
        entries.sort();
        Self {
            is_today: name == manager.today_folder_name(),
            is_empty: manager.is_empty_folder(path),
            name,
            path: path.to_path_buf(),
            entries,
        }
    }
}

pub(crate) fn sort_views(views: &mut [FolderView], order: SortOrder) {
    match order {
        SortOrder::Asc => views.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Desc => views.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dailyfolder::{FixedDate, FolderError, FsScanner};
    use std::fs;
    use tempfile::tempdir;

    /// A directory that exists but whose entries cannot be read
    struct UnreadableScanner;

    impl DirectoryScanner for UnreadableScanner {
        fn list_children(&self, _path: &Path) -> Vec<PathBuf> {
            Vec::new()
        }

        fn is_empty_directory(&self, _path: &Path) -> bool {
            false
        }

        fn create_directory_recursive(&self, path: &Path) -> Result<PathBuf, FolderError> {
            Ok(path.to_path_buf())
        }

        fn delete_path(&self, _path: &Path) -> Result<(), FolderError> {
            Ok(())
        }
    }

    #[test]
    fn capture_marks_today_and_sorts_entries() {
        let tmp = tempdir().unwrap();
        let today = tmp.path().join("2020-02-23");
        fs::create_dir(&today).unwrap();
        fs::write(today.join("b.txt"), "").unwrap();
        fs::write(today.join("a.txt"), "").unwrap();
        let clock = FixedDate(NaiveDate::from_ymd_opt(2020, 2, 23).unwrap());
        let manager = DailyFolderManager::with_parts(tmp.path(), FsScanner, clock);

        let view = FolderView::capture(&manager, &today);

        assert_eq!(view.name, "2020-02-23");
        assert!(view.is_today);
        assert!(!view.is_empty);
        assert_eq!(view.entries, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn capture_agrees_with_cleanup_on_unreadable_folder() {
        let clock = FixedDate(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let manager = DailyFolderManager::with_parts("/desktop", UnreadableScanner, clock);

        let view = FolderView::capture(&manager, Path::new("/desktop/2020-01-23"));

        assert!(view.entries.is_empty());
        assert!(!view.is_empty);
        assert!(manager.empty_folders().is_empty());
    }

    #[test]
    fn capture_marks_empty_directory() {
        let tmp = tempdir().unwrap();
        let folder = tmp.path().join("2020-01-23");
        fs::create_dir(&folder).unwrap();
        let clock = FixedDate(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let manager = DailyFolderManager::with_parts(tmp.path(), FsScanner, clock);

        let view = FolderView::capture(&manager, &folder);

        assert!(view.is_empty);
        assert!(!view.is_today);
    }

    #[test]
    fn sort_views_by_order() {
        let mk = |name: &str| FolderView {
            name: name.to_string(),
            path: PathBuf::from(name),
            is_today: false,
            is_empty: true,
            entries: Vec::new(),
        };
        let mut views = vec![mk("2020-01-23"), mk("2019-12-31"), mk("2020-02-23")];

        sort_views(&mut views, SortOrder::Desc);
        let names: Vec<&str> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["2020-02-23", "2020-01-23", "2019-12-31"]);

        sort_views(&mut views, SortOrder::Asc);
        assert_eq!(views[0].name, "2019-12-31");
    }
}
