//! Upcoming-birthday query result row.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// One contact due a birthday greeting, with the date to send it on.
///
/// The congratulation date is the birthday occurrence itself, except that
/// weekend occurrences move to the following Monday. Dates are kept in the
/// `YYYY.MM.DD` presentation format.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's normalized name
    pub name: String,

    /// When to send the greeting, formatted `YYYY.MM.DD`
    pub congratulation_date: String,
}

impl UpcomingBirthday {
    /// Build an entry for a birthday occurrence, shifting Saturday +2 days
    /// and Sunday +1 day.
    pub fn from_occurrence(name: impl Into<String>, occurrence: NaiveDate) -> Self {
        let congratulation = occurrence + Duration::days(Self::weekend_shift(occurrence));
        Self {
            name: name.into(),
            congratulation_date: congratulation.format("%Y.%m.%d").to_string(),
        }
    }

    fn weekend_shift(date: NaiveDate) -> i64 {
        match date.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}
