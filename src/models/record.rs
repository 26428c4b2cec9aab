//! Contact record model.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation. Phones and the birthday are added
/// incrementally; the phone list keeps insertion order and permits
/// duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Name of the contact, also its key in the directory
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, set at most once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a new record with a name and no phones or birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Get the birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// Duplicates are allowed. The list is untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `value` is not a valid
    /// phone number.
    pub fn add_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `value`.
    ///
    /// Returns whether a match was found and removed.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.position(value) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, keeping its
    /// position in the list.
    ///
    /// Returns `Ok(false)` when no phone matches `old`; in that case the
    /// replacement is never validated and the list is untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if a match exists and `new`
    /// is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.position(old) {
            Some(index) => {
                self.phones[index] = PhoneNumber::new(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the birthday from `DD.MM.YYYY` text.
    ///
    /// The first successful call wins: once a birthday is set, later calls
    /// return `Ok(())` without parsing their input at all.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if no birthday is set yet
    /// and `text` is unparsable.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        if self.birthday.is_none() {
            self.birthday = Some(Birthday::new(text)?);
        }
        Ok(())
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == value)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
