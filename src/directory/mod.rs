//! Contact directory: the name-keyed record collection and its queries.
//!
//! The directory owns its records and exposes only the operations below;
//! callers never touch the backing storage. Lookup is exact-match by name.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default lookahead window, in days, for [`ContactDirectory::upcoming_birthdays`].
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// One entry returned by the upcoming-birthdays query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    /// Name of the contact
    pub name: String,

    /// Date to congratulate on, as `DD.MM.YYYY` text. Weekend occurrences
    /// are moved to the following Monday.
    pub congratulation_date: String,
}

/// A collection of contact records keyed by name.
///
/// At most one record per name: adding a record under an existing name
/// overwrites it in place. Iteration order is insertion order.
///
/// The directory is single-threaded and makes no concurrency guarantees;
/// callers that share one across threads must serialize access themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Insert a record under its own name.
    ///
    /// An existing record with the same name is overwritten in place,
    /// keeping its position in iteration order. No merging happens.
    pub fn add_record(&mut self, record: ContactRecord) {
        tracing::debug!(name = %record.name(), "adding record");
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Look up a record by exact name match.
    ///
    /// Returns `None` when no record matches; absence is not an error here.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Remove the record with the given name.
    ///
    /// Returns whether a record was found and removed.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                tracing::debug!(name, "record deleted");
                true
            }
            None => false,
        }
    }

    /// Set the birthday of the named contact from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ContactNotFound` if no contact has that
    /// name, or a validation error if the text is unparsable. A contact
    /// whose birthday is already set keeps it (see
    /// [`ContactRecord::add_birthday`]).
    pub fn set_birthday(&mut self, name: &str, text: &str) -> DirectoryResult<()> {
        let record = self
            .find_mut(name)
            .ok_or_else(|| DirectoryError::ContactNotFound(name.to_string()))?;
        record.add_birthday(text)?;
        Ok(())
    }

    /// Get the stored birthday of the named contact.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::ContactNotFound` if no contact has that
    /// name, or `DirectoryError::NoBirthday` if the contact has no
    /// birthday set.
    pub fn contact_birthday(&self, name: &str) -> DirectoryResult<Birthday> {
        let record = self
            .find(name)
            .ok_or_else(|| DirectoryError::ContactNotFound(name.to_string()))?;
        record
            .birthday()
            .copied()
            .ok_or_else(|| DirectoryError::NoBirthday(name.to_string()))
    }

    /// Contacts whose birthday occurs within `horizon_days` days of `today`.
    ///
    /// For each record with a birthday, the occurrence is this year's
    /// month/day, rolled to next year if already passed, so its distance
    /// from `today` is never negative. A contact is included when that
    /// distance is below `horizon_days`. The returned congratulation date
    /// is the occurrence moved to the following Monday when it lands on a
    /// weekend; inclusion is always decided by the unshifted occurrence.
    ///
    /// Entries come back in directory insertion order. Records without a
    /// birthday are skipped. `today` is supplied by the caller so the query
    /// stays deterministic.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let occurrence = birthday.next_occurrence(today);
            let delta = (occurrence - today).num_days();

            if delta < horizon_days {
                let congratulation = shift_weekend_to_monday(occurrence);
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation.format(DATE_FORMAT).to_string(),
                });
            }
        }

        tracing::trace!(
            count = upcoming.len(),
            horizon_days,
            "upcoming birthdays computed"
        );
        upcoming
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}

/// Move Saturday and Sunday dates forward to the next Monday.
fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    if weekday >= 5 {
        date + Duration::days(i64::from(7 - weekday))
    } else {
        date
    }
}
