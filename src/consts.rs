/// Standard date format for daily folder names: "2025-01-15"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of child names shown when previewing a folder's contents
pub const DEFAULT_PREVIEW_LIMIT: usize = 15;

/// Appended to a preview that was cut short
pub const PREVIEW_ELLIPSIS: &str = "...";
