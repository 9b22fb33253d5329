use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use scout_engine::{write_atomic, AtomicFileWriter, PersistError};
use tempfile::TempDir;

#[test]
fn writer_creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("exports").join("nested");
    let writer = AtomicFileWriter::new(new_dir.clone());

    let written = writer.write("linkedin_jobs.csv", "Title\n").unwrap();
    assert!(new_dir.is_dir());
    assert_eq!(written, new_dir.join("linkedin_jobs.csv"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "Title\n");
}

#[test]
fn write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("lists.json", "{}").unwrap();
    let second = writer.write("lists.json", "{\"a\":[]}").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "{\"a\":[]}");

    let leftovers = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(leftovers, 1);
}

#[test]
fn write_atomic_targets_a_full_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("store").join("lists.json");

    write_atomic(&target, "{}").unwrap();
    write_atomic(&target, "{\"b\":[]}").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "{\"b\":[]}");
}

#[test]
fn write_atomic_rejects_target_without_file_name() {
    let err = write_atomic(Path::new("/"), "{}").unwrap_err();
    assert!(matches!(err, PersistError::NoFileName(_)));
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("lists.json", "data").is_err());
    assert!(!file_path.with_file_name("lists.json").exists());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "x");
}
