use crate::core::{
    Entry, EntryKind, Error, Result, list_immediate_files, read_to_string_lossy, render_tree,
};
use std::{collections::HashSet, path::Path};

/* =========================== Selection summary =========================== */

/// Build the single pasteable text: prefix, tree listing, one
/// `path\ncontent\n\n` block per resolved file (in selection order), suffix.
///
/// A selected file contributes its own block; a selected directory
/// contributes blocks for its immediate file children only. Unreadable
/// entries are logged and skipped, so the result is always best-effort.
pub fn summarize<S: ::std::hash::BuildHasher>(
    root: &Path,
    excluded_names: &HashSet<String, S>,
    selected: &[Entry],
    prefix: &str,
    suffix: &str,
) -> Result<String> {
    if root.as_os_str().is_empty() {
        return Err(Error::Validation("no folder selected".into()));
    }
    if !root.is_dir() {
        return Err(Error::Validation(format!(
            "folder '{}' does not exist",
            root.display()
        )));
    }

    let tree = render_tree(root, excluded_names)?;

    let mut out = String::with_capacity(tree.len() + prefix.len() + suffix.len() + 64);
    out.push_str(prefix);
    out.push_str("\n\n");
    out.push_str(&tree);
    out.push_str("\n\n");

    for entry in selected {
        match entry.kind {
            EntryKind::File => push_file_block(&mut out, &entry.path),
            EntryKind::Dir => match list_immediate_files(&entry.path) {
                Ok(children) => {
                    for child in children {
                        push_file_block(&mut out, &child);
                    }
                }
                Err(e) => {
                    log::warn!(
                        "skipping unreadable directory '{}': {e}",
                        entry.path.display()
                    );
                }
            },
        }
    }

    out.push_str("\n\n");
    out.push_str(suffix);
    Ok(out)
}

fn push_file_block(out: &mut String, path: &Path) {
    match read_to_string_lossy(path) {
        Ok(contents) => {
            out.push_str(&path.to_string_lossy());
            out.push('\n');
            out.push_str(&contents);
            out.push_str("\n\n");
        }
        Err(e) => log::warn!("skipping unreadable file '{}': {e}", path.display()),
    }
}
