mod format;
mod json;
mod report;
mod table;
mod view;

pub(crate) use json::{folders_json, report_json, run_json};
pub(crate) use report::{print_failures, print_report};
pub(crate) use table::{TableOptions, print_folder_table};
pub(crate) use view::{FolderView, sort_views};
