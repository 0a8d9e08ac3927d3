mod common;

use common::{alice, benson, carl, typical_book, PlayerBuilder};
use std::fs;
use summoners_book::domain::Field;
use summoners_book::error::{DataFormatError, DataLoadCause, StorageError};
use summoners_book::storage::{BookStorage, JsonBookStorage};
use summoners_book::SummonersBook;
use tempfile::TempDir;

fn storage_in(dir: &TempDir, file: &str) -> JsonBookStorage {
    JsonBookStorage::new(dir.path().join(file))
}

fn load_cause(err: StorageError) -> DataLoadCause {
    match err {
        StorageError::DataLoad { source, .. } => source,
        other => panic!("Expected DataLoad error, got: {:?}", other),
    }
}

#[test]
fn test_round_trip_preserves_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    let book = typical_book();

    storage.save_book(&book).unwrap();
    let loaded = storage.read_book().unwrap().unwrap();
    assert_eq!(loaded, book);

    let mut book = loaded;
    book.remove_player(&alice()).unwrap();
    book.add_player(PlayerBuilder::new().name("Elle Meyer").build()).unwrap();
    storage.save_book(&book).unwrap();
    assert_eq!(storage.read_book().unwrap().unwrap(), book);
}

#[test]
fn test_save_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    let other = dir.path().join("backup").join("copy.json");

    storage.save_book_to(&typical_book(), &other).unwrap();
    assert!(storage.read_book().unwrap().is_none());
    assert_eq!(storage.read_book_from(&other).unwrap().unwrap(), typical_book());
}

#[test]
fn test_saved_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    let book = SummonersBook::from_players(vec![benson()]).unwrap();
    storage.save_book(&book).unwrap();

    let text = fs::read_to_string(storage.file_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "players": [{
                "name": "Benson Meier",
                "phone": "98765432",
                "email": "johnd@example.com",
                "address": "311, Clementi Ave 2, #02-25",
                "tags": ["friends", "owesMoney"]
            }]
        })
    );
}

#[test]
fn test_nonexistent_file_is_empty_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "missing.json");
    assert!(storage.read_book().unwrap().is_none());
}

#[test]
fn test_not_json_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    fs::write(storage.file_path(), "this is not json").unwrap();

    let err = storage.read_book().unwrap_err();
    assert!(matches!(load_cause(err), DataLoadCause::Malformed(_)));
}

#[test]
fn test_invalid_utf8_fails_to_load_not_io() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    fs::write(storage.file_path(), b"{\"players\": [\xff\xfe]}").unwrap();

    let err = storage.read_book().unwrap_err();
    assert!(matches!(load_cause(err), DataLoadCause::Malformed(_)));
}

#[test]
fn test_invalid_player_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    fs::write(
        storage.file_path(),
        r#"{"players": [
            {"name": "Alice", "phone": "123", "email": "a@x.com", "address": "1 St", "tags": []},
            {"name": "Bob", "phone": "12a", "email": "b@x.com", "address": "2 St", "tags": []}
        ]}"#,
    )
    .unwrap();

    let err = storage.read_book().unwrap_err();
    assert!(err.to_string().contains("book.json"));
    match load_cause(err) {
        DataLoadCause::Format(DataFormatError::InvalidValue { record, source }) => {
            assert_eq!(record.index, 1);
            assert_eq!(record.name.as_deref(), Some("Bob"));
            assert_eq!(source.field, Field::Phone);
        }
        other => panic!("Expected invalid phone, got: {:?}", other),
    }
}

#[test]
fn test_unknown_key_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    fs::write(
        storage.file_path(),
        r#"{"players": [{"name": "Alice", "phone": "123", "email": "a@x.com",
            "address": "1 St", "tags": [], "rank": "gold"}]}"#,
    )
    .unwrap();

    let err = storage.read_book().unwrap_err();
    assert!(matches!(
        load_cause(err),
        DataLoadCause::Format(DataFormatError::UnknownField { .. })
    ));
}

#[test]
fn test_duplicate_records_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    let record = r#"{"name": "Carl Kurz", "phone": "123", "email": "c@x.com", "address": "1 St", "tags": []}"#;
    fs::write(
        storage.file_path(),
        format!(r#"{{"players": [{record}, {record}]}}"#),
    )
    .unwrap();

    let err = storage.read_book().unwrap_err();
    assert!(matches!(load_cause(err), DataLoadCause::Duplicate(_)));
}

#[test]
fn test_failed_load_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");
    fs::write(storage.file_path(), "{ broken").unwrap();

    assert!(storage.read_book().is_err());
    assert_eq!(fs::read_to_string(storage.file_path()).unwrap(), "{ broken");
}

#[test]
fn test_overwrite_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir, "book.json");

    storage.save_book(&typical_book()).unwrap();
    let smaller = SummonersBook::from_players(vec![carl()]).unwrap();
    storage.save_book(&smaller).unwrap();

    assert_eq!(storage.read_book().unwrap().unwrap(), smaller);
}
