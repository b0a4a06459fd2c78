//! Breadcrumb trail for the current path.

use crate::naming::escape_text;

/// Label of the leading crumb that returns to the repository root.
pub const ROOT_LABEL: &str = "Home";

/// One clickable breadcrumb segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    /// Escaped segment name.
    pub label: String,
    /// Path navigated to when the crumb is activated.
    pub target: String,
}

/// Splits `current_path` into crumbs, root first.
///
/// Each crumb targets the accumulated path up to and including itself.
pub fn crumbs(current_path: &str) -> Vec<Crumb> {
    let mut out = vec![Crumb {
        label: ROOT_LABEL.to_string(),
        target: String::new(),
    }];
    let mut target = String::new();
    for segment in current_path.split('/').filter(|s| !s.is_empty()) {
        if !target.is_empty() {
            target.push('/');
        }
        target.push_str(segment);
        out.push(Crumb {
            label: escape_text(segment),
            target: target.clone(),
        });
    }
    out
}
