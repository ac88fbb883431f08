use sheaf::core::{Error, summarize};
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn empty_root_path_is_a_validation_error() {
    let excluded: HashSet<String> = HashSet::new();
    let err = summarize(Path::new(""), &excluded, &[], "P", "S").unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn vanished_root_is_a_validation_error_with_the_path_in_the_message() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("vanished");

    let excluded: HashSet<String> = HashSet::new();
    let err = summarize(&gone, &excluded, &[], "P", "S").unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("vanished"));
}

#[test]
fn a_file_as_root_is_rejected_like_a_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("not_a_dir.txt");
    std::fs::write(&file, "x").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let err = summarize(&file, &excluded, &[], "", "").unwrap_err();
    assert!(err.is_validation());
}
