//! File-backed persistence tests using the configured JSON repository.

use contact_book::{AddressBook, BookError, Config, Record};
use std::fs;

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        storage_path: dir.path().join("AddressBook.json"),
        ..Config::default()
    }
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut book = AddressBook::new(&config);
    let mut bob = Record::new("Bob", Some("02-02-2020")).unwrap();
    bob.add_phone("0502456560").unwrap();
    book.add_record(bob.clone());
    book.add_record(Record::new("Nick", None).unwrap());
    book.add_record(Record::new("Ken", None).unwrap());
    book.save().unwrap();

    let mut fresh = AddressBook::new(&config);
    fresh.load().unwrap();

    let keys: Vec<&str> = fresh.records().map(Record::name).collect();
    assert_eq!(keys, vec!["Bob", "Nick", "Ken"]);
    assert_eq!(fresh.find("Bob"), Some(&bob));
}

#[test]
fn test_missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = AddressBook::new(&config_in(&dir));
    book.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_saved_file_is_readable_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);

    let mut book = AddressBook::new(&config);
    let mut ken = Record::new("Ken", None).unwrap();
    ken.add_phone("0501112233").unwrap();
    book.add_record(ken);
    book.save().unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.storage_path).unwrap()).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(1));
    assert_eq!(value[0]["name"], "Ken");
    assert_eq!(value[0]["phones"][0], "0501112233");
    assert!(value[0].get("birthday").is_none());
}

/// Birthdays read back from disk are not checked against today's date.
#[test]
fn test_stored_future_birthday_still_loads() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.storage_path,
        r#"[{"name": "Zed", "phones": [], "birthday": "01-01-9999"}]"#,
    )
    .unwrap();

    let mut book = AddressBook::new(&config);
    book.load().unwrap();
    assert_eq!(
        book.find("Zed").unwrap().birthday().unwrap().to_string(),
        "01-01-9999"
    );
}

#[test]
fn test_stored_invalid_phone_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.storage_path,
        r#"[{"name": "Zed", "phones": ["12"]}]"#,
    )
    .unwrap();

    let mut book = AddressBook::new(&config);
    assert!(matches!(book.load(), Err(BookError::Serialization(_))));
    assert!(book.is_empty());
}

/// Lookup keys come from each record's own name, so a reloaded book keeps
/// one record per name when the same contact is added again.
#[test]
fn test_loaded_records_are_keyed_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.storage_path,
        r#"[{"name": "Bob", "phones": ["0502456560"]}, {"name": "Alice"}]"#,
    )
    .unwrap();

    let mut book = AddressBook::new(&config);
    book.load().unwrap();
    assert!(book.find("Bob").is_some());
    assert_eq!(book.find("Alice").map(Record::name), Some("Alice"));

    book.add_record(Record::new("Bob", None).unwrap());
    let keys: Vec<&str> = book.records().map(Record::name).collect();
    assert_eq!(keys, vec!["Bob", "Alice"]);
    assert_eq!(book.len(), 2);
}

/// A name-keyed object cannot smuggle in a key that differs from the
/// record's name; only the array layout loads.
#[test]
fn test_object_keyed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(&config.storage_path, r#"{"Alice": {"name": "Bob"}}"#).unwrap();

    let mut book = AddressBook::new(&config);
    assert!(matches!(book.load(), Err(BookError::Serialization(_))));
    assert!(book.is_empty());
}

#[test]
fn test_duplicate_names_in_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.storage_path,
        r#"[{"name": "Bob"}, {"name": "Bob", "phones": ["0502456560"]}]"#,
    )
    .unwrap();

    let mut book = AddressBook::new(&config);
    assert!(matches!(book.load(), Err(BookError::Serialization(_))));
}
