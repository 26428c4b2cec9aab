//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format for birthdays: zero-padded day and month, 4-digit year.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthday dates.
///
/// This ensures that birthdays are parsed at construction time from
/// `DD.MM.YYYY` text. Rendering produces the same format, so parsing and
/// formatting round-trip.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not a
    /// calendar date in that format.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))?;
        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month and day, on or after
    /// `today`.
    ///
    /// Uses this year's occurrence unless it has already passed, in which
    /// case it rolls over to next year. A February 29 birthday falls on
    /// March 1 in years without a leap day.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let occurrence = self.occurrence_in(today.year());
        if occurrence < today {
            self.occurrence_in(today.year() + 1)
        } else {
            occurrence
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            // Only Feb 29 can be missing from the target year.
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

// Serde support - serialize as DD.MM.YYYY string
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
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
