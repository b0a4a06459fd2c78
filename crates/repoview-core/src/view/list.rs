//! List pane: the current directory as sortable rows.

use super::Snapshot;
use crate::listing::entry::Entry;
use crate::naming::{escape_text, format_bytes, icon_for, type_label, EntryIcon};
use crate::nav::filter::arrange;
use crate::nav::path::file_name;

/// Shown instead of rows when nothing matches.
pub const EMPTY_PLACEHOLDER: &str = "No items found.";
/// Shown while the current listing is being fetched.
pub const LOADING_PLACEHOLDER: &str = "Loading…";
/// List title at the repository root.
pub const ROOT_TITLE: &str = "Details";

/// One row of the list pane. All text fields are already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub entry: Entry,
    pub icon: EntryIcon,
    pub name: String,
    pub type_label: String,
    pub size: String,
    pub selected: bool,
}

impl ListRow {
    fn project(entry: &Entry, selected: bool) -> Self {
        Self {
            icon: icon_for(entry.kind(), entry.name()),
            name: escape_text(entry.display_name()),
            type_label: escape_text(&type_label(entry.kind(), entry.name())),
            size: if entry.is_file() {
                format_bytes(entry.size())
            } else {
                String::new()
            },
            selected,
            entry: entry.clone(),
        }
    }
}

/// What the list pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// The listing has not arrived yet.
    Loading,
    /// The listing failed; carries the escaped message.
    Error(String),
    /// Nothing to show after filtering.
    Empty,
    Rows(Vec<ListRow>),
}

impl ListView {
    /// Projects the current directory, search filter and selection.
    pub fn project(snapshot: &Snapshot<'_>) -> Self {
        let session = snapshot.session();
        let Some(listing) = snapshot.current_listing() else {
            return match session.load_error() {
                Some(message) => Self::Error(escape_text(message)),
                None => Self::Loading,
            };
        };

        let selected_path = session.selected().map(Entry::path);
        let rows: Vec<ListRow> = arrange(&listing, session.query())
            .iter()
            .map(|e| ListRow::project(e, selected_path == Some(e.path())))
            .collect();

        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[ListRow] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// The single line shown in place of rows, if any.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_PLACEHOLDER),
            Self::Error(message) => Some(message),
            Self::Empty => Some(EMPTY_PLACEHOLDER),
            Self::Rows(_) => None,
        }
    }

    /// Number of lines the pane draws: one per row, or one placeholder.
    pub fn line_count(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            _ => 1,
        }
    }
}

/// Pane title: the last segment of the current path.
pub fn title(current_path: &str) -> String {
    file_name(current_path)
        .map(escape_text)
        .unwrap_or_else(|| ROOT_TITLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures::Fixture;

    fn kits() -> Vec<Entry> {
        vec![
            Entry::file("Kits/Away 2024-25.png", 2048, None),
            Entry::directory("Kits/2024"),
            Entry::file("Kits/Home 2025-26.png", 1536, None),
            Entry::file("Kits/notes", 0, None),
        ]
    }

    #[test]
    fn rows_put_directories_first_then_newest_files() {
        let fixture = Fixture::at("Kits").with_listing("Kits", kits());
        let view = ListView::project(&fixture.snapshot());

        let names: Vec<&str> = view.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["2024", "Home 2025-26", "Away 2024-25", "notes"]);
    }

    #[test]
    fn row_columns() {
        let fixture = Fixture::at("Kits").with_listing("Kits", kits());
        let view = ListView::project(&fixture.snapshot());
        let rows = view.rows();

        assert_eq!(rows[0].icon, EntryIcon::Folder);
        assert_eq!(rows[0].type_label, "File folder");
        assert_eq!(rows[0].size, "");

        assert_eq!(rows[1].icon, EntryIcon::Image);
        assert_eq!(rows[1].type_label, "PNG File");
        assert_eq!(rows[1].size, "2 KB");

        assert_eq!(rows[3].icon, EntryIcon::Document);
        assert_eq!(rows[3].type_label, "File");
        assert_eq!(rows[3].size, "");
    }

    #[test]
    fn search_filters_rows() {
        let fixture = Fixture::at("Kits")
            .with_listing("Kits", kits())
            .map_session(|s| s.with_query("home".into()));
        let view = ListView::project(&fixture.snapshot());

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].name, "Home 2025-26");
    }

    #[test]
    fn selected_row_is_flagged() {
        let fixture = Fixture::at("Kits")
            .with_listing("Kits", kits())
            .map_session(|s| s.with_selected(Some(Entry::file("Kits/Away 2024-25.png", 2048, None))));
        let view = ListView::project(&fixture.snapshot());

        let selected: Vec<&str> = view
            .rows()
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(selected, vec!["Away 2024-25"]);
    }

    #[test]
    fn empty_listing_shows_one_placeholder() {
        let fixture = Fixture::at("Empty").with_listing("Empty", Vec::new());
        let view = ListView::project(&fixture.snapshot());

        assert_eq!(view, ListView::Empty);
        assert_eq!(view.line_count(), 1);
        assert_eq!(view.placeholder(), Some(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn no_match_shows_placeholder() {
        let fixture = Fixture::at("Kits")
            .with_listing("Kits", kits())
            .map_session(|s| s.with_query("zzz".into()));
        assert_eq!(ListView::project(&fixture.snapshot()), ListView::Empty);
    }

    #[test]
    fn missing_listing_is_loading() {
        let fixture = Fixture::at("Kits").with_pending("Kits");
        let view = ListView::project(&fixture.snapshot());
        assert_eq!(view.placeholder(), Some(LOADING_PLACEHOLDER));
    }

    #[test]
    fn load_error_is_shown_inline() {
        let fixture = Fixture::at("Gone")
            .map_session(|s| s.with_load_error(Some("GitHub API error: 404".into())));
        let view = ListView::project(&fixture.snapshot());
        assert_eq!(view, ListView::Error("GitHub API error: 404".into()));
    }

    #[test]
    fn names_are_escaped() {
        let fixture = Fixture::at("").with_listing("", vec![Entry::file("evil\x1b[31m.png", 1, None)]);
        let view = ListView::project(&fixture.snapshot());
        assert!(!view.rows()[0].name.contains('\x1b'));
    }

    #[test]
    fn titles() {
        assert_eq!(title(""), "Details");
        assert_eq!(title("Kits/2024"), "2024");
    }
}
