use sheaf::core::{Entry, read_to_string_lossy, summarize};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn invalid_utf8_is_replaced_instead_of_failing() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let file = root.join("mixed.bin");
    fs::write(&file, [0xff, 0xfe, b'h', b'i']).unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let selected = vec![Entry::file(&file)];
    let out = summarize(root, &excluded, &selected, "", "").unwrap();

    // 0xff 0xfe become replacement characters, the valid tail survives.
    assert!(out.contains("\u{FFFD}\u{FFFD}hi"));
}

#[test]
fn lossy_reader_keeps_valid_text_intact() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    fs::write(&file, "héllo").unwrap();

    assert_eq!(read_to_string_lossy(&file).unwrap(), "héllo");
}

#[test]
fn a_vanished_selected_file_is_skipped_not_fatal() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("real.txt"), "real").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    // Points at a file that no longer exists (e.g. deleted between scan and summarize).
    let selected = vec![
        Entry::file(root.join("ghost.txt")),
        Entry::file(root.join("real.txt")),
    ];
    let out = summarize(root, &excluded, &selected, "", "").unwrap();

    assert!(out.contains("real"));
    assert!(!out.contains("ghost.txt"));
}
