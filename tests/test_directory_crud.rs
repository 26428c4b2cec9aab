//! Integration tests for directory record management.
//!
//! These tests exercise the directory through its public surface only:
//! adding, finding and deleting records, and setting and reading birthdays
//! with their typed failure modes.

use contact_book::{ContactDirectory, ContactRecord, DirectoryError, ValidationError};
use std::sync::Once;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name);
    for phone in phones {
        record.add_phone(*phone).unwrap();
    }
    record
}

#[test]
fn test_record_lifecycle() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    assert!(directory.is_empty());

    directory.add_record(sample_record("Alice", &["0501234567"]));
    directory.add_record(sample_record("Bob", &["0677654321", "0731112233"]));
    assert_eq!(directory.len(), 2);

    let bob = directory.find("Bob").unwrap();
    assert_eq!(bob.phones().len(), 2);
    assert_eq!(
        bob.to_string(),
        "Contact name: Bob, phones: 0677654321; 0731112233"
    );

    assert!(directory.delete("Alice"));
    assert_eq!(directory.len(), 1);
    assert!(directory.find("Alice").is_none());
}

#[test]
fn test_find_absent_returns_none() {
    init_tracing();
    let directory = ContactDirectory::new();
    assert!(directory.find("Alice").is_none());
}

#[test]
fn test_delete_absent_returns_false() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Bob", &[]));

    assert!(!directory.delete("Alice"));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_overwrite_replaces_without_merging() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Alice", &["0501234567"]));

    let mut replacement = ContactRecord::new("Alice");
    replacement.add_phone("0669998877").unwrap();
    directory.add_record(replacement);

    assert_eq!(directory.len(), 1);
    let alice = directory.find("Alice").unwrap();
    let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["0669998877"]);
}

#[test]
fn test_set_and_read_birthday() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Alice", &["0501234567"]));

    directory.set_birthday("Alice", "15.03.1990").unwrap();
    let birthday = directory.contact_birthday("Alice").unwrap();
    assert_eq!(birthday.to_string(), "15.03.1990");
}

#[test]
fn test_set_birthday_is_first_write_wins() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Alice", &[]));

    directory.set_birthday("Alice", "15.03.1990").unwrap();
    directory.set_birthday("Alice", "01.01.2000").unwrap();

    let birthday = directory.contact_birthday("Alice").unwrap();
    assert_eq!(birthday.to_string(), "15.03.1990");
}

#[test]
fn test_set_birthday_unknown_contact_fails() {
    init_tracing();
    let mut directory = ContactDirectory::new();

    let err = directory.set_birthday("Alice", "15.03.1990").unwrap_err();
    assert_eq!(err, DirectoryError::ContactNotFound("Alice".to_string()));
}

#[test]
fn test_set_birthday_invalid_date_fails() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Alice", &[]));

    let err = directory.set_birthday("Alice", "15-03-1990").unwrap_err();
    assert_eq!(
        err,
        DirectoryError::Validation(ValidationError::InvalidBirthday("15-03-1990".to_string()))
    );
    // The record is untouched after the failed write.
    assert!(directory.contact_birthday("Alice").is_err());
}

#[test]
fn test_contact_birthday_error_kinds() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    directory.add_record(sample_record("Bob", &[]));

    assert!(matches!(
        directory.contact_birthday("Alice").unwrap_err(),
        DirectoryError::ContactNotFound(_)
    ));
    assert!(matches!(
        directory.contact_birthday("Bob").unwrap_err(),
        DirectoryError::NoBirthday(_)
    ));
}

#[test]
fn test_directory_serialization_round_trip() {
    init_tracing();
    let mut directory = ContactDirectory::new();
    let mut alice = sample_record("Alice", &["0501234567"]);
    alice.add_birthday("15.03.1990").unwrap();
    directory.add_record(alice);
    directory.add_record(sample_record("Bob", &[]));

    let json = serde_json::to_string(&directory).unwrap();
    let parsed: ContactDirectory = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, directory);
    let names: Vec<&str> = parsed.iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}
