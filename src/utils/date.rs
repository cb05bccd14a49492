use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a user-supplied date in `YYYYMMDD` or `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}
