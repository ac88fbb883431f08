use pretty_assertions::assert_eq;
use sheaf::core::{Entry, summarize};
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn a_selected_file_contributes_exactly_one_path_plus_content_block() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let file = root.join("f.txt");
    fs::write(&file, "hello").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let selected = vec![Entry::file(&file)];
    let out = summarize(root, &excluded, &selected, "P", "S").unwrap();

    let block = format!("{}\nhello\n\n", file.display());
    assert_eq!(
        out.matches(&block).count(),
        1,
        "block must appear exactly once in:\n{out}"
    );

    // Full shape: prefix, tree, block, suffix with blank-line separators.
    let expected = format!("P\n\nf.txt\n\n\n{}\nhello\n\n\n\nS", file.display());
    assert_eq!(out, expected);
}

#[test]
fn result_character_count_matches_the_concatenated_string() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let file = root.join("f.txt");
    fs::write(&file, "héllo wörld").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let selected = vec![Entry::file(&file)];
    let out = summarize(root, &excluded, &selected, "P", "S").unwrap();

    // The live counter displays Unicode scalar values of the final string.
    let expected = format!("P\n\nf.txt\n\n\n{}\nhéllo wörld\n\n\n\nS", file.display());
    assert_eq!(out.chars().count(), expected.chars().count());
}
