//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// The digit pattern admits day/month pairs the calendar rejects (31.02);
// calendar parsing below is the backstop for those.
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[0-2])\.\d{4}$")
        .expect("Failed to compile date regex")
});

const DATE_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday.
///
/// Parsed from `DD.MM.YYYY` input, with the day in 01-31 and the month in
/// 01-12. Leading and trailing whitespace is ignored.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` when the input does not match
    /// the pattern, or matches it but names a date the calendar rejects
    /// (e.g. `31.02.2024`).
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();

        if !DATE_REGEX.is_match(value) {
            return Err(ValidationError::InvalidDate);
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday on or after `today`.
    ///
    /// If this year's date has already passed, the occurrence rolls over to
    /// next year. A 29 February birthday lands on 1 March in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// This birthday's calendar date in the given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()) {
            Some(date) => date,
            // 29 Feb in a non-leap year
            None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(self.0),
        }
    }
}

// Serde support - serialize in the DD.MM.YYYY input format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
