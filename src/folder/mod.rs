//! Daily folder discovery and maintenance
//!
//! The classifier decides which names are daily folders, the scanner talks to
//! the filesystem and the manager combines both over one base directory.

pub mod classifier;
pub mod manager;
pub mod scanner;

pub use classifier::{is_daily_folder, is_daily_folder_name, today_folder_name};
pub use manager::{DailyFolderManager, DeletionFailure, DeletionReport};
pub use scanner::{DirectoryScanner, FsScanner};
