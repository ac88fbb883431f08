use crate::core::{Node, Result, scan_dir_to_node};
use std::{collections::HashSet, path::Path};

/// One indent unit per depth level below the root.
const INDENT: &str = "    ";

/* =========================== Tree rendering =========================== */

/// Render the directory subtree under `root` as indented text, one line per
/// entry, depth-first pre-order. The root itself is not printed. Entries
/// whose base name is in `excluded_names` are omitted along with their
/// descendants. An empty directory renders as the empty string.
pub fn render_tree<S: ::std::hash::BuildHasher>(
    root: &Path,
    excluded_names: &HashSet<String, S>,
) -> Result<String> {
    let node = scan_dir_to_node(root, excluded_names)?;
    Ok(render_node(&node))
}

/// Same rendering, from an already scanned tree.
#[must_use]
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    render_children(node, 0, &mut out);
    out
}

fn render_children(node: &Node, depth: usize, out: &mut String) {
    for child in &node.children {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str(&child.name);
        out.push('\n');
        if child.is_dir {
            render_children(child, depth + 1, out);
        }
    }
}

/// Parse the free-text exclusion field: comma-separated bare names, trimmed,
/// empties dropped.
#[must_use]
pub fn split_name_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
