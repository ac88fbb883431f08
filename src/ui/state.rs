use std::{cell::RefCell, collections::HashMap, path::PathBuf, rc::Rc};

use sheaf::core::Node;

/// Exclusions pre-seeded into a fresh session's filter field.
pub const DEFAULT_EXCLUDE_NAMES: &str =
    ".git, node_modules, target, .idea, .vscode, __pycache__, venv, .venv, .DS_Store";

/// One tab: an independently owned instance of root, exclusions, selections
/// and prefix/suffix text. Sessions share nothing mutable with each other.
pub struct Session {
    pub name: String,
    pub root: Option<PathBuf>,
    pub root_node: Option<Node>,
    pub checked: HashMap<PathBuf, bool>,
    pub exclude_names: String,
    pub prefix_text: String,
    pub suffix_text: String,
    pub output_text: String,
}

impl Session {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            root: None,
            root_node: None,
            checked: HashMap::new(),
            exclude_names: DEFAULT_EXCLUDE_NAMES.to_string(),
            prefix_text: String::new(),
            suffix_text: String::new(),
            output_text: String::new(),
        }
    }
}

#[derive(Default)]
pub struct AppState {
    pub sessions: Vec<Session>,
    pub active: usize,
    pub session_seq: u32,
    pub toast_timer: slint::Timer,
}

impl AppState {
    pub fn push_session(&mut self) -> usize {
        self.session_seq += 1;
        self.sessions
            .push(Session::new(format!("Session {}", self.session_seq)));
        self.sessions.len() - 1
    }

    #[must_use]
    pub fn active_session(&self) -> &Session {
        &self.sessions[self.active]
    }

    pub fn active_session_mut(&mut self) -> &mut Session {
        &mut self.sessions[self.active]
    }
}

pub type SharedState = Rc<RefCell<AppState>>;
