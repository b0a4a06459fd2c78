//! User intents driving the navigation controller.
//!
//! The UI translates input into [`Intent`]s and hands them to
//! [`Navigator::dispatch`](crate::nav::navigator::Navigator::dispatch).
//! The set is closed: every state change a frontend can cause is one of
//! these variants.

use crate::listing::entry::Entry;

/// A state transition the user asked for.
///
/// Intents flow **UI → Core**. The core never creates intents itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Go to the directory at the given path, extending history.
    Navigate(String),
    /// Return to the previous location.
    Back,
    /// Re-visit the location left by the last `Back`.
    Forward,
    /// Go to the parent directory. Does nothing at the root.
    Up,
    /// Replace the search filter for the current listing.
    Search(String),
    /// Choose an entry: files are previewed, directories are entered.
    Select(Entry),
    /// Expand or collapse a tree node without navigating.
    ToggleNode(String),
}

impl Intent {
    /// Returns `true` if the intent can change the current directory.
    pub fn is_navigation(&self) -> bool {
        match self {
            Self::Navigate(_) | Self::Back | Self::Forward | Self::Up => true,
            Self::Select(entry) => entry.is_dir(),
            Self::Search(_) | Self::ToggleNode(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_intents() {
        assert!(Intent::Navigate("Kits".into()).is_navigation());
        assert!(Intent::Back.is_navigation());
        assert!(Intent::Forward.is_navigation());
        assert!(Intent::Up.is_navigation());
        assert!(Intent::Select(Entry::directory("Kits")).is_navigation());
    }

    #[test]
    fn view_only_intents() {
        assert!(!Intent::Search("home".into()).is_navigation());
        assert!(!Intent::ToggleNode("Kits".into()).is_navigation());
        assert!(!Intent::Select(Entry::file("a.png", 1, None)).is_navigation());
    }
}
