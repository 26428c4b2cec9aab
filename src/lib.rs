//! Contact Book - an in-memory personal contact book core.
//!
//! This library stores contacts identified by name, each with zero or more
//! phone numbers and an optional birthday, and answers queries such as
//! "who has a birthday in the next 7 days".
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, birthdays)
//! - **models**: the contact record data structure
//! - **directory**: the name-keyed record collection and its queries
//! - **error**: custom error types for precise error handling
//!
//! The core is pure and synchronous: no I/O, no clock access, no locking.
//! Callers supply `today` to the birthday query, and surrounding tooling is
//! responsible for rendering errors to users.

// Re-export commonly used types
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use directory::{ContactDirectory, UpcomingBirthday, DEFAULT_HORIZON_DAYS};
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{DirectoryError, DirectoryResult};
pub use models::ContactRecord;
