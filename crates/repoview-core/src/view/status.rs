//! Status bar and preview pane projections.

use super::Snapshot;
use crate::listing::entry::Entry;
use crate::naming::{escape_text, is_image};

/// Preview text when no file is selected.
pub const PREVIEW_PLACEHOLDER: &str = "Select a file to preview.";
/// Label of the link that opens the selected file's content.
pub const OPEN_LABEL: &str = "Open image";

/// The two fields of the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// `"<N> folder(s), <M> file(s)"` for the unfiltered current listing.
    pub counts: String,
    /// Escaped display name of the selected file, or empty.
    pub selection: String,
}

impl StatusLine {
    pub fn project(snapshot: &Snapshot<'_>) -> Self {
        let (folders, files) = snapshot
            .current_listing()
            .map(|listing| {
                listing.iter().fold((0usize, 0usize), |(d, f), e| {
                    (d + usize::from(e.is_dir()), f + usize::from(e.is_file()))
                })
            })
            .unwrap_or_default();

        Self {
            counts: format!("{folders} folder(s), {files} file(s)"),
            selection: snapshot
                .session()
                .selected()
                .map(|e| escape_text(e.display_name()))
                .unwrap_or_default(),
        }
    }
}

/// What the preview pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Placeholder,
    File {
        entry: Entry,
        /// Escaped, extension-stripped name.
        name: String,
        /// Direct content link; `None` if the API gave none.
        url: Option<String>,
        /// Whether the content can be drawn as an image.
        image: bool,
    },
}

impl Preview {
    pub fn project(snapshot: &Snapshot<'_>) -> Self {
        match snapshot.session().selected() {
            None => Self::Placeholder,
            Some(entry) => Self::File {
                name: escape_text(entry.display_name()),
                url: entry.download_url().map(str::to_string),
                image: is_image(entry.name()),
                entry: entry.clone(),
            },
        }
    }
}
