//! Key-bindable actions.
//!
//! Every user-triggerable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides metadata (id, name, description, category)
//! used by the keymap loader and the help popup.

/// Every user-triggerable action in the explorer.
///
/// Variants carry no parameters; context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Cursor
    CursorUp,
    CursorDown,
    // Navigation
    Open,
    ToggleNode,
    GoUp,
    GoBack,
    GoForward,
    // View
    Search,
    SwitchFocus,
    // System
    Help,
    Quit,
}

/// Broad category for grouping actions in the help popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    View,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::View => "View",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in the `[keys]` config table (e.g. `"go_up"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Go Up"`).
    pub name: &'static str,
    pub description: &'static str,
    pub category: ActionCategory,
}

const fn descriptor(
    action: Action,
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ActionCategory,
) -> ActionDescriptor {
    ActionDescriptor {
        action,
        id,
        name,
        description,
        category,
    }
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action, in help order.
    pub fn new() -> Self {
        use ActionCategory::{Navigation, System, View};

        let descriptors = vec![
            descriptor(Action::CursorDown, "cursor_down", "Cursor Down", "Move cursor down one row", Navigation),
            descriptor(Action::CursorUp, "cursor_up", "Cursor Up", "Move cursor up one row", Navigation),
            descriptor(Action::Open, "open", "Open", "Enter folder or preview file", Navigation),
            descriptor(Action::ToggleNode, "toggle_node", "Toggle Node", "Expand or collapse tree folder", Navigation),
            descriptor(Action::GoUp, "go_up", "Go Up", "Go to parent folder", Navigation),
            descriptor(Action::GoBack, "go_back", "Go Back", "Go back in history", Navigation),
            descriptor(Action::GoForward, "go_forward", "Go Forward", "Go forward in history", Navigation),
            descriptor(Action::Search, "search", "Search", "Filter the current folder by name", View),
            descriptor(Action::SwitchFocus, "switch_focus", "Switch Focus", "Toggle focus between tree and list", View),
            descriptor(Action::Help, "help", "Help", "Show key bindings", System),
            descriptor(Action::Quit, "quit", "Quit", "Exit the explorer", System),
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Finds an action by its string id (for config parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for a given action.
    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
