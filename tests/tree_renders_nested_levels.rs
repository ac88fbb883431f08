use pretty_assertions::assert_eq;
use sheaf::core::render_tree;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

#[test]
fn nested_entries_are_indented_one_unit_per_level() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::write(root.join("a.txt"), "x").unwrap();
    fs::write(root.join("b.txt"), "x").unwrap();
    fs::create_dir(root.join("c_dir")).unwrap();
    fs::write(root.join("c_dir/d.txt"), "x").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let tree = render_tree(root, &excluded).unwrap();

    // Files sorted first, then directories, each level sorted by name.
    assert_eq!(tree, "a.txt\nb.txt\nc_dir\n    d.txt\n");
}

#[test]
fn empty_directory_renders_as_empty_string() {
    let tmp = TempDir::new().unwrap();
    let excluded: HashSet<String> = HashSet::new();

    let tree = render_tree(tmp.path(), &excluded).unwrap();
    assert_eq!(tree, "");
}

#[test]
fn deep_nesting_keeps_accumulating_indent() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("one/two")).unwrap();
    fs::write(root.join("one/two/leaf.txt"), "x").unwrap();

    let excluded: HashSet<String> = HashSet::new();
    let tree = render_tree(root, &excluded).unwrap();

    assert_eq!(tree, "one\n    two\n        leaf.txt\n");
}
