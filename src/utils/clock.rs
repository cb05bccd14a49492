//! Sources of "today"
//!
//! The current date is never cached: every call asks the source again, so a
//! long-running caller sees the date roll over at midnight.

use chrono::NaiveDate;

use super::Timezone;

pub trait DateSource {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock in the configured zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn local() -> Self {
        Self::default()
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl DateSource for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<T: DateSource + ?Sized> DateSource for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
