//! Per-session browsing state.

use std::collections::HashMap;

use crate::listing::entry::Entry;
use crate::nav::history::History;
use crate::nav::path::is_prefix;

/// How a location change interacts with history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Normal navigation: the location being left goes onto the back stack
    /// and the forward stack is cleared.
    Push,
    /// Back/forward replay: the caller has already updated the stacks.
    Replay,
}

/// Everything the views read: location, history, selection, search and
/// tree expansion.
///
/// Immutable: all state transitions consume `self` and return a new
/// `Session`. Only [`Navigator`](super::navigator::Navigator) drives them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_path: String,
    history: History,
    selected: Option<Entry>,
    query: String,
    load_error: Option<String>,
    /// Tree nodes the user expanded or collapsed by hand since the last
    /// directory change; absent nodes follow the current path.
    expansion: HashMap<String, bool>,
}

impl Session {
    /// Starts a session at the repository root.
    pub fn new() -> Self {
        Self::default()
    }

    /// The directory currently displayed (empty = root).
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The file chosen for preview, if any.
    pub fn selected(&self) -> Option<&Entry> {
        self.selected.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Why the current directory's listing could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// `false` at the root, where Up has nowhere to go.
    pub fn can_go_up(&self) -> bool {
        !self.current_path.is_empty()
    }

    /// Returns whether the tree node at `path` shows its children.
    ///
    /// Nodes on the way to the current path are expanded unless the user
    /// collapsed them; any other node only when the user opened it.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expansion
            .get(path)
            .copied()
            .unwrap_or_else(|| is_prefix(path, &self.current_path))
    }

    /// Nodes the user opened by hand since the last directory change.
    pub fn manually_expanded(&self) -> impl Iterator<Item = &str> {
        self.expansion
            .iter()
            .filter(|(_, open)| **open)
            .map(|(path, _)| path.as_str())
    }

    /// Moves to `path`, resetting selection, search, error and tree state.
    pub fn with_location(self, path: String, mode: NavMode) -> Self {
        let history = match mode {
            NavMode::Push => self.history.push(&self.current_path),
            NavMode::Replay => self.history,
        };
        Self {
            current_path: path,
            history,
            selected: None,
            query: String::new(),
            load_error: None,
            expansion: HashMap::new(),
        }
    }

    pub fn with_history(self, history: History) -> Self {
        Self { history, ..self }
    }

    pub fn with_query(self, query: String) -> Self {
        Self { query, ..self }
    }

    pub fn with_selected(self, selected: Option<Entry>) -> Self {
        Self { selected, ..self }
    }

    pub fn with_load_error(self, load_error: Option<String>) -> Self {
        Self { load_error, ..self }
    }

    /// Flips the expansion of the tree node at `path`.
    pub fn with_node_toggled(self, path: &str) -> Self {
        let open = !self.is_expanded(path);
        let mut expansion = self.expansion;
        expansion.insert(path.to_string(), open);
        Self { expansion, ..self }
    }
}
