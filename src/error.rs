//! Error types for directory operations.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Construction-time validation failures live in
//! [`crate::domain::ValidationError`] and convert into [`DirectoryError`]
//! when they surface from a directory operation.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when a directory operation addresses a contact.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No contact with the given name exists in the directory
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact exists but has no birthday set
    #[error("Contact does not have a birthday: {0}")]
    NoBirthday(String),

    /// A value failed validation while being applied to a record
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;
