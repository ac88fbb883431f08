use super::{AppWindow, Row};
use crate::ui::state::SharedState;
use chrono::Local;
use slint::{ComponentHandle, Model, ModelRc, VecModel};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use sheaf::core::{
    Entry, Node, SessionText, collect_checked_entries, load_session, normalize_root, save_session,
    scan_dir_to_node, split_name_list, summarize,
};

const UI_OUTPUT_CHAR_LIMIT: usize = 50_000;

/* =============================== UI Actions =============================== */

pub fn on_select_folder(app: &AppWindow, state: &SharedState) {
    if let Some(dir) = rfd::FileDialog::new().set_directory(".").pick_folder() {
        let dir = normalize_root(&dir);
        {
            let mut s = state.borrow_mut();
            let sess = s.active_session_mut();
            sess.root = Some(dir.clone());
            sess.checked.clear();
        }
        app.set_root_label(dir.to_string_lossy().to_string().into());
        rescan_tree(app, state);
        update_last_refresh(app);
    }
}

pub fn on_exclusions_edited(app: &AppWindow, state: &SharedState) {
    stash_ui_fields(app, state);
    rescan_tree(app, state);
    update_last_refresh(app);
}

pub fn on_toggle_expand(app: &AppWindow, state: &SharedState, index: usize) {
    if let Some(row) = get_row_by_index(app, index) {
        let path = PathBuf::from(row.path.as_str());
        if toggle_node_expanded(state, &path) {
            refresh_flat_model(app, state);
        }
    }
}

pub fn on_toggle_check(app: &AppWindow, state: &SharedState, index: usize) {
    if let Some(row) = get_row_by_index(app, index) {
        let path = PathBuf::from(row.path.as_str());
        {
            let mut s = state.borrow_mut();
            let sess = s.active_session_mut();
            if sess.checked.get(&path).copied().unwrap_or(false) {
                sess.checked.remove(&path);
            } else {
                sess.checked.insert(path, true);
            }
        }
        refresh_flat_model(app, state);
    }
}

pub fn on_generate_summary(app: &AppWindow, state: &SharedState) {
    stash_ui_fields(app, state);

    let (root, root_node, checked) = {
        let s = state.borrow();
        let sess = s.active_session();
        (
            sess.root.clone(),
            sess.root_node.clone(),
            sess.checked.clone(),
        )
    };

    let Some(root) = root else {
        set_output(app, state, "No folder selected.\n");
        update_last_refresh(app);
        return;
    };

    let mut selected: Vec<Entry> = Vec::new();
    if let Some(node) = &root_node {
        collect_checked_entries(node, &checked, &mut selected);
    }

    let excluded = split_name_list(app.get_exclude_names().as_str());
    let prefix = app.get_prefix_text().to_string();
    let suffix = app.get_suffix_text().to_string();

    match summarize(&root, &excluded, &selected, &prefix, &suffix) {
        Ok(text) => set_output(app, state, &text),
        Err(e) if e.is_validation() => set_output(app, state, &format!("{e}.\n")),
        Err(e) => show_toast(app, state, &format!("Summarize failed: {e}"), 1800),
    }
    update_last_refresh(app);
}

pub fn on_copy_output(app: &AppWindow, state: &SharedState) {
    let text = { state.borrow().active_session().output_text.clone() };

    if text.is_empty() {
        show_toast(app, state, "Nothing to copy", 900);
        return;
    }

    let mut ok = false;
    if let Ok(mut cb) = arboard::Clipboard::new() {
        ok = cb.set_text(text).is_ok();
    }
    show_toast(app, state, if ok { "Copied!" } else { "Copy failed" }, 1200);
}

pub fn on_save_session(app: &AppWindow, state: &SharedState) {
    stash_ui_fields(app, state);

    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .set_file_name("session.json")
        .save_file()
    else {
        return;
    };

    let pair = SessionText {
        start_text: app.get_prefix_text().to_string(),
        end_text: app.get_suffix_text().to_string(),
    };

    match save_session(&path, &pair) {
        Ok(()) => show_toast(app, state, "Session saved", 1200),
        Err(e) => show_toast(app, state, &format!("Save failed: {e}"), 1800),
    }
}

pub fn on_load_session(app: &AppWindow, state: &SharedState) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
    else {
        return;
    };

    match load_session(&path) {
        Ok(pair) => {
            app.set_prefix_text(pair.start_text.clone().into());
            app.set_suffix_text(pair.end_text.clone().into());
            {
                let mut s = state.borrow_mut();
                let sess = s.active_session_mut();
                sess.prefix_text = pair.start_text;
                sess.suffix_text = pair.end_text;
            }
            show_toast(app, state, "Session loaded", 1200);
        }
        Err(e) => show_toast(app, state, &format!("Load failed: {e}"), 1800),
    }
}

/* ================================ Sessions ================================ */

pub fn on_new_session(app: &AppWindow, state: &SharedState) {
    stash_ui_fields(app, state);
    {
        let mut s = state.borrow_mut();
        let idx = s.push_session();
        s.active = idx;
    }
    apply_active_session(app, state);
}

pub fn on_close_session(app: &AppWindow, state: &SharedState) {
    {
        let mut s = state.borrow_mut();
        let idx = s.active;
        s.sessions.remove(idx);
        if s.sessions.is_empty() {
            let fresh = s.push_session();
            s.active = fresh;
        } else if s.active >= s.sessions.len() {
            s.active = s.sessions.len() - 1;
        }
    }
    apply_active_session(app, state);
}

pub fn on_select_session(app: &AppWindow, state: &SharedState, index: usize) {
    {
        let s = state.borrow();
        if index == s.active || index >= s.sessions.len() {
            return;
        }
    }
    stash_ui_fields(app, state);
    state.borrow_mut().active = index;
    apply_active_session(app, state);
}

/// Push the active session's fields into the window after a tab switch,
/// close, or startup.
pub fn apply_active_session(app: &AppWindow, state: &SharedState) {
    let (exclude, prefix, suffix, output, root_label) = {
        let s = state.borrow();
        let sess = s.active_session();
        (
            sess.exclude_names.clone(),
            sess.prefix_text.clone(),
            sess.suffix_text.clone(),
            sess.output_text.clone(),
            sess.root.as_ref().map_or_else(
                || "No folder selected".to_string(),
                |p| p.to_string_lossy().to_string(),
            ),
        )
    };

    app.set_exclude_names(exclude.into());
    app.set_prefix_text(prefix.into());
    app.set_suffix_text(suffix.into());
    app.set_root_label(root_label.into());
    set_output(app, state, &output);
    refresh_flat_model(app, state);
    refresh_session_tabs(app, state);
}

/* ================================ Helpers ================================= */

/// Text fields live in the window between events; copy them back into the
/// owning session before anything reads or switches it.
fn stash_ui_fields(app: &AppWindow, state: &SharedState) {
    let mut s = state.borrow_mut();
    let sess = s.active_session_mut();
    sess.exclude_names = app.get_exclude_names().to_string();
    sess.prefix_text = app.get_prefix_text().to_string();
    sess.suffix_text = app.get_suffix_text().to_string();
}

fn rescan_tree(app: &AppWindow, state: &SharedState) {
    let root = { state.borrow().active_session().root.clone() };
    let Some(root) = root else {
        set_tree_model(app, Vec::new());
        return;
    };

    let excluded = split_name_list(app.get_exclude_names().as_str());
    match scan_dir_to_node(&root, &excluded) {
        Ok(node) => {
            state.borrow_mut().active_session_mut().root_node = Some(node);
            refresh_flat_model(app, state);
        }
        Err(e) => {
            state.borrow_mut().active_session_mut().root_node = None;
            set_tree_model(app, Vec::new());
            show_toast(app, state, &format!("Scan failed: {e}"), 1800);
        }
    }
}

fn refresh_flat_model(app: &AppWindow, state: &SharedState) {
    let rows = {
        let s = state.borrow();
        let sess = s.active_session();
        sess.root_node
            .as_ref()
            .map_or_else(Vec::new, |root| flatten_tree(root, &sess.checked))
    };
    set_tree_model(app, rows);
}

fn refresh_session_tabs(app: &AppWindow, state: &SharedState) {
    let (names, active) = {
        let s = state.borrow();
        let names: Vec<slint::SharedString> =
            s.sessions.iter().map(|t| t.name.clone().into()).collect();
        (names, s.active)
    };
    app.set_session_tabs(ModelRc::new(VecModel::from(names)));
    app.set_active_session(active as i32);
}

fn toggle_node_expanded(state: &SharedState, path: &Path) -> bool {
    fn rec(n: &mut Node, target: &Path) -> bool {
        if n.path == target {
            if n.is_dir {
                n.expanded = !n.expanded;
                return true;
            }
            return false;
        }
        for c in &mut n.children {
            if rec(c, target) {
                return true;
            }
        }
        false
    }
    if let Some(root) = state
        .borrow_mut()
        .active_session_mut()
        .root_node
        .as_mut()
    {
        return rec(root, path);
    }
    false
}

fn flatten_tree(root: &Node, checked: &HashMap<PathBuf, bool>) -> Vec<Row> {
    fn walk(n: &Node, checked: &HashMap<PathBuf, bool>, level: usize, rows: &mut Vec<Row>) {
        rows.push(Row {
            path: n.path.to_string_lossy().to_string().into(),
            name: n.name.clone().into(),
            level: level as i32,
            is_dir: n.is_dir,
            expanded: if n.is_dir { n.expanded } else { false },
            checked: checked.get(&n.path).copied().unwrap_or(false),
            has_children: !n.children.is_empty(),
        });
        if n.is_dir && n.expanded {
            for c in &n.children {
                walk(c, checked, level + 1, rows);
            }
        }
    }
    let mut rows = Vec::new();
    walk(root, checked, 0, &mut rows);
    rows
}

fn get_row_by_index(app: &AppWindow, index: usize) -> Option<Row> {
    let model = app.get_tree_model();
    let len = model.row_count();
    if index >= len {
        return None;
    }
    model.row_data(index)
}

fn set_tree_model(app: &AppWindow, rows: Vec<Row>) {
    let model = VecModel::from(rows);
    app.set_tree_model(ModelRc::new(model));
}

fn set_output(app: &AppWindow, state: &SharedState, s: &str) {
    {
        let mut st = state.borrow_mut();
        st.active_session_mut().output_text = s.to_string();
    }

    let total_chars = s.chars().count();
    app.set_output_stats(format!("{total_chars} chars").into());

    let displayed: String = if total_chars <= UI_OUTPUT_CHAR_LIMIT {
        s.to_string()
    } else {
        let footer = format!(
            "\n… [truncated: showing {UI_OUTPUT_CHAR_LIMIT} of {total_chars} chars — use “Copy to Clipboard” to copy all]\n"
        );
        let keep = UI_OUTPUT_CHAR_LIMIT.saturating_sub(footer.chars().count());
        let mut head: String = s.chars().take(keep).collect();
        head.push_str(&footer);
        head
    };
    app.set_output_text(displayed.into());
}

fn show_toast(app: &AppWindow, state: &SharedState, msg: &str, ms: u64) {
    app.set_toast_text(msg.into());
    app.set_show_toast(true);

    let s = state.borrow_mut();
    let app_weak = app.as_weak();
    s.toast_timer.start(
        slint::TimerMode::SingleShot,
        std::time::Duration::from_millis(ms),
        move || {
            if let Some(app) = app_weak.upgrade() {
                app.set_show_toast(false);
            }
        },
    );
}

fn update_last_refresh(app: &AppWindow) {
    let now_str = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    app.set_last_refresh(format!("Last refresh: {now_str}").into());
}
