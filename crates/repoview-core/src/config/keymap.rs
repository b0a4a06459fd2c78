//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Enter"`, `"Alt+Left"`) to
//! [`Action`] values. The default bindings follow vim conventions plus the
//! arrow keys.
//!
//! The `[keys]` config table uses string action identifiers (e.g.
//! `"cursor_down"`); these are resolved to [`Action`] via
//! [`ActionRegistry::find_by_id`] and merged over the defaults.

use std::collections::HashMap;

use tracing::warn;

use crate::action::{Action, ActionRegistry};

const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    // Cursor
    ("j", Action::CursorDown),
    ("Down", Action::CursorDown),
    ("k", Action::CursorUp),
    ("Up", Action::CursorUp),
    // Navigation
    ("Enter", Action::Open),
    ("l", Action::Open),
    ("Space", Action::ToggleNode),
    ("h", Action::GoUp),
    ("Left", Action::GoUp),
    ("Backspace", Action::GoUp),
    ("[", Action::GoBack),
    ("Alt+Left", Action::GoBack),
    ("]", Action::GoForward),
    ("Alt+Right", Action::GoForward),
    // View
    ("/", Action::Search),
    ("Tab", Action::SwitchFocus),
    // System
    ("?", Action::Help),
    ("q", Action::Quit),
];

/// Complete set of key bindings.
///
/// Stores bindings as a `HashMap<String, Action>` for O(1) lookup.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → list of key strings (for help display).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let bindings: HashMap<String, Action> = DEFAULT_BINDINGS
            .iter()
            .map(|(key, action)| (key.to_string(), *action))
            .collect();
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Merges `overrides` (key name → action id) over the default bindings.
    ///
    /// Unknown action ids are logged and ignored; an override replaces
    /// whatever the key was bound to before.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let registry = ActionRegistry::new();
        let mut bindings = Self::default().bindings;
        for (key, action_id) in overrides {
            match registry.find_by_id(action_id) {
                Some(action) => {
                    bindings.insert(key.clone(), action);
                }
                None => warn!(key = %key, action = %action_id, "ignoring unknown action in [keys]"),
            }
        }
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action (for display in help).
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    /// Returns all bindings (for iteration / display).
    pub fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}
