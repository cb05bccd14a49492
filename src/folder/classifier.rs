use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::DATE_FORMAT;
use crate::utils::DateSource;

/// Year, month and day digit groups. Only the grouping is checked, so
/// `2020-13-40` still counts: folders created under this rule must keep
/// being recognized.
static DAILY_FOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("daily folder pattern is valid")
});

pub fn is_daily_folder_name(name: &str) -> bool {
    DAILY_FOLDER_PATTERN.is_match(name)
}

/// Checks the final component of `path`; paths without a UTF-8 file name never match
pub fn is_daily_folder(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(is_daily_folder_name)
}

/// Zero-padded `YYYY-MM-DD` for the source's current date
pub fn today_folder_name(clock: &impl DateSource) -> String {
    clock.today().format(DATE_FORMAT).to_string()
}
