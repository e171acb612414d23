//! Source of the current date for birth date validation.

use chrono::{Local, NaiveDate};
use std::fmt;

/// Supplies "today" to the builders.
///
/// Chosen once at startup (see [`Config::clock`](crate::config::Config::clock))
/// and handed to every [`UserBuilder`](crate::builders::UserBuilder) that needs it.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the operating system on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn test_system_clock_matches_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
