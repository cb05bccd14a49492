use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone in which "today" is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Calendar date of `utc` as seen from this zone
    pub fn date_of(self, utc: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        }
    }

    pub fn today(self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert_eq!(Timezone::parse(None).unwrap(), Timezone::Local);
    }

    #[test]
    fn parse_local_is_case_insensitive() {
        for raw in ["local", "LOCAL", "  Local  ", ""] {
            assert_eq!(Timezone::parse(Some(raw)).unwrap(), Timezone::Local);
        }
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            assert_eq!(
                Timezone::parse(Some(raw)).unwrap(),
                Timezone::Named(chrono_tz::UTC)
            );
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Europe/Berlin")).unwrap();
        assert_eq!(tz, Timezone::Named(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn date_of_crosses_midnight_per_zone() {
        let utc = "2026-02-12T23:30:00Z".parse::<DateTime<Utc>>().unwrap();

        let in_utc = Timezone::Named(chrono_tz::UTC).date_of(utc);
        assert_eq!(in_utc, NaiveDate::from_ymd_opt(2026, 2, 12).unwrap());

        // Tokyo is UTC+9, already the next day
        let in_tokyo = Timezone::Named(chrono_tz::Asia::Tokyo).date_of(utc);
        assert_eq!(in_tokyo, NaiveDate::from_ymd_opt(2026, 2, 13).unwrap());
    }
}
