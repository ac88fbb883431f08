use sheaf::core::{Error, render_tree};
use std::collections::HashSet;
use tempfile::TempDir;

#[test]
fn rendering_a_missing_root_reports_the_listing_failure() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("does_not_exist");

    let excluded: HashSet<String> = HashSet::new();
    let err = render_tree(&gone, &excluded).unwrap_err();

    match &err {
        Error::ListDir { path, source } => {
            assert_eq!(path, &gone);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected ListDir error, got: {other}"),
    }
    assert!(!err.is_validation());
    assert!(err.to_string().contains("does_not_exist"));
}
