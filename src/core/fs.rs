use crate::core::{Entry, EntryKind, Error, Node, Result};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

type NamePath = (String, PathBuf);

/* =========================== Filesystem & paths ============================ */

/// Resolve the user-picked root to a canonical form so later ancestor checks
/// and relative displays agree with what the scanner stores.
#[must_use]
pub fn normalize_root(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}

/// Read a file as text with a lenient decode policy: invalid UTF-8 byte
/// sequences are replaced, never an error.
pub fn read_to_string_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Scan the subtree under `dir` into a [`Node`], skipping any entry whose
/// base name is in `excluded_names` (an excluded directory prunes its whole
/// subtree). Failing to list the top-level `dir` is an error; an unreadable
/// subdirectory deeper down is logged and skipped so the scan always yields
/// a best-effort tree.
pub fn scan_dir_to_node<S: ::std::hash::BuildHasher>(
    dir: &Path,
    excluded_names: &HashSet<String, S>,
) -> Result<Node> {
    let mut node = new_dir_node(dir);

    let (mut files, mut dirs) = gather_dir_entries(dir, excluded_names).map_err(|source| {
        Error::ListDir {
            path: dir.to_path_buf(),
            source,
        }
    })?;

    files.sort_by(|a, b| a.0.cmp(&b.0));
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    node.children.reserve(files.len() + dirs.len());

    for (basename, path) in files {
        node.has_children = true;
        node.children.push(Node {
            name: basename,
            path,
            is_dir: false,
            children: Vec::new(),
            expanded: false,
            has_children: false,
        });
    }

    for (_basename, path) in dirs {
        let child = match scan_dir_to_node(&path, excluded_names) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("skipping directory contents: {e}");
                new_dir_node(&path)
            }
        };
        node.has_children = node.has_children || !child.children.is_empty() || child.has_children;
        node.children.push(child);
    }

    Ok(node)
}

fn new_dir_node(dir: &Path) -> Node {
    let name = dir
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Node {
        name,
        path: dir.to_path_buf(),
        is_dir: true,
        children: Vec::new(),
        expanded: true,
        has_children: false,
    }
}

fn gather_dir_entries<S: ::std::hash::BuildHasher>(
    dir: &Path,
    excluded_names: &HashSet<String, S>,
) -> std::io::Result<(Vec<NamePath>, Vec<NamePath>)> {
    let entries = fs::read_dir(dir)?;

    let mut dirs: Vec<NamePath> = Vec::new();
    let mut files: Vec<NamePath> = Vec::new();

    for ent in entries.flatten() {
        let path = ent.path();
        let base: String = ent.file_name().to_string_lossy().into_owned();

        if excluded_names.contains(&base) {
            continue;
        }

        let is_dir = ent.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir {
            dirs.push((base, path));
        } else {
            files.push((base, path));
        }
    }

    Ok((files, dirs))
}

/// Immediate file children of `dir`, sorted by name. Non-recursive on
/// purpose: a selected directory only ever contributes its direct files.
pub fn list_immediate_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<NamePath> = Vec::new();

    for ent in fs::read_dir(dir)?.flatten() {
        let is_file = ent.file_type().map(|ft| ft.is_file()).unwrap_or(false);
        if is_file {
            files.push((ent.file_name().to_string_lossy().into_owned(), ent.path()));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

/// Walk the scanned tree in pre-order (the flattened row order the user sees)
/// and collect every row whose checkbox is set. The root row itself counts:
/// checking it yields a directory entry like any other.
pub fn collect_checked_entries<S: ::std::hash::BuildHasher>(
    node: &Node,
    checked: &HashMap<PathBuf, bool, S>,
    out: &mut Vec<Entry>,
) {
    if checked.get(&node.path).copied().unwrap_or(false) {
        out.push(Entry {
            path: node.path.clone(),
            kind: if node.is_dir {
                EntryKind::Dir
            } else {
                EntryKind::File
            },
        });
    }
    for c in &node.children {
        collect_checked_entries(c, checked, out);
    }
}
