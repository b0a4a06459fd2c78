//! Folder tree: the directory hierarchy flattened into indented rows.

use super::Snapshot;
use crate::listing::entry::Entry;
use crate::naming::escape_text;
use crate::nav::filter::directories;

/// Expand affordance of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twisty {
    /// Has (or may have) sub-directories; currently closed.
    Collapsed,
    /// Open; its children follow on the next rows.
    Expanded,
    /// Loaded and holds no sub-directories; no affordance.
    Leaf,
}

/// One visible node of the folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: String,
    /// Escaped folder name.
    pub name: String,
    pub depth: usize,
    pub twisty: Twisty,
    /// `true` for the node at the current path.
    pub active: bool,
    /// `true` while this open node's children are still being fetched.
    pub loading: bool,
}

/// Builds the visible rows, depth first, in sorted order.
///
/// Top-level rows are the directories of the root listing. A node is open
/// if it lies on the way to the current path or the user opened it; open
/// nodes contribute their sub-directories once their listing is cached.
/// Built with an explicit stack, so depth is unbounded.
pub fn build(snapshot: &Snapshot<'_>) -> Vec<TreeRow> {
    let session = snapshot.session();
    let Some(root) = snapshot.listing("") else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let mut stack: Vec<(Entry, usize)> = directories(&root)
        .into_iter()
        .rev()
        .map(|dir| (dir, 0))
        .collect();

    while let Some((dir, depth)) = stack.pop() {
        let path = dir.path();
        let expanded = session.is_expanded(path);
        let children = snapshot.listing(path).map(|listing| directories(&listing));

        let twisty = match &children {
            Some(children) if children.is_empty() => Twisty::Leaf,
            _ if expanded => Twisty::Expanded,
            _ => Twisty::Collapsed,
        };
        rows.push(TreeRow {
            path: path.to_string(),
            name: escape_text(dir.name()),
            depth,
            twisty,
            active: path == session.current_path(),
            loading: expanded && children.is_none() && snapshot.is_pending(path),
        });

        if let (true, Some(children)) = (expanded, children) {
            stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::Fixture;

    fn summary(rows: &[TreeRow]) -> Vec<(usize, &str, Twisty)> {
        rows.iter()
            .map(|r| (r.depth, r.path.as_str(), r.twisty))
            .collect()
    }

    fn repo(at: &str) -> Fixture {
        Fixture::at(at)
            .with_listing(
                "",
                vec![
                    Entry::directory("Leagues"),
                    Entry::file("README.md", 1, None),
                    Entry::directory("Kits"),
                ],
            )
            .with_listing(
                "Kits",
                vec![
                    Entry::directory("Kits/2025"),
                    Entry::directory("Kits/2024"),
                    Entry::file("Kits/Home.png", 1, None),
                ],
            )
            .with_listing("Kits/2024", vec![Entry::file("Kits/2024/a.png", 1, None)])
    }

    #[test]
    fn root_lists_only_top_level_directories() {
        let rows = build(&repo("").snapshot());
        assert_eq!(
            summary(&rows),
            vec![(0, "Kits", Twisty::Collapsed), (0, "Leagues", Twisty::Collapsed)]
        );
    }

    #[test]
    fn current_path_ancestors_auto_expand() {
        let rows = build(&repo("Kits/2024").snapshot());
        assert_eq!(
            summary(&rows),
            vec![
                (0, "Kits", Twisty::Expanded),
                (1, "Kits/2024", Twisty::Leaf),
                (1, "Kits/2025", Twisty::Collapsed),
                (0, "Leagues", Twisty::Collapsed),
            ]
        );
        let active: Vec<&str> = rows.iter().filter(|r| r.active).map(|r| r.path.as_str()).collect();
        assert_eq!(active, vec!["Kits/2024"]);
    }

    #[test]
    fn manual_collapse_hides_children() {
        let fixture = repo("Kits/2024").map_session(|s| s.with_node_toggled("Kits"));
        let rows = build(&fixture.snapshot());
        assert_eq!(
            summary(&rows),
            vec![(0, "Kits", Twisty::Collapsed), (0, "Leagues", Twisty::Collapsed)]
        );
    }

    #[test]
    fn manual_expand_shows_children_once_loaded() {
        let fixture = repo("").map_session(|s| s.with_node_toggled("Kits"));
        let rows = build(&fixture.snapshot());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].path, "Kits/2024");
        assert_eq!(rows[1].depth, 1);
    }

    #[test]
    fn expanded_node_without_listing_is_loading() {
        let fixture = repo("")
            .with_pending("Leagues")
            .map_session(|s| s.with_node_toggled("Leagues"));
        let rows = build(&fixture.snapshot());

        let leagues = rows.iter().find(|r| r.path == "Leagues").unwrap();
        assert_eq!(leagues.twisty, Twisty::Expanded);
        assert!(leagues.loading);
    }

    #[test]
    fn no_root_listing_means_no_rows() {
        assert!(build(&Fixture::at("").snapshot()).is_empty());
    }

    #[test]
    fn deep_paths_do_not_recurse() {
        let depth = 2_000;
        let mut fixture = Fixture::at("");
        let mut path = String::new();
        let mut segments = Vec::new();
        for i in 0..depth {
            segments.push(format!("d{i}"));
            let child = segments.join("/");
            fixture = fixture.with_listing(&path, vec![Entry::directory(&child)]);
            path = child;
        }
        let fixture = fixture.with_listing(&path, Vec::new());
        let fixture = fixture.map_session(|s| {
            s.with_location(path.clone(), crate::nav::session::NavMode::Replay)
        });

        let rows = build(&fixture.snapshot());
        assert_eq!(rows.len(), depth);
        assert_eq!(rows.last().unwrap().depth, depth - 1);
        assert!(rows.last().unwrap().active);
    }
}
