//! Daily folder management
//!
//! Discovers date-named folders (`YYYY-MM-DD`) inside a base directory,
//! creates the folder for today and removes the empty ones.

pub mod consts;
pub mod error;
pub mod folder;
pub mod utils;

pub use error::{AppError, FolderError};
pub use folder::{
    DailyFolderManager, DeletionFailure, DeletionReport, DirectoryScanner, FsScanner,
    is_daily_folder, is_daily_folder_name, today_folder_name,
};
pub use utils::{DateSource, FixedDate, SystemClock, Timezone};
