//! Glyphs for list and tree rows.
//!
//! Nerd Font icons when `[ui] show_icons` is on, plain ASCII markers otherwise.

use repoview_core::naming::EntryIcon;

/// Returns the leading glyph (with trailing space) for a row of kind `icon`.
pub fn glyph(icon: EntryIcon, show_icons: bool) -> &'static str {
    match (icon, show_icons) {
        (EntryIcon::Folder, true) => "\u{f07b} ",
        (EntryIcon::Image, true) => "\u{f1c5} ",
        (EntryIcon::Document, true) => "\u{f15b} ",
        (EntryIcon::Folder, false) => "/ ",
        (EntryIcon::Image, false) => "* ",
        (EntryIcon::Document, false) => "  ",
    }
}

/// Glyph for an open or closed folder in the tree.
pub fn folder_glyph(open: bool, show_icons: bool) -> &'static str {
    match (open, show_icons) {
        (true, true) => "\u{f07c} ",
        (false, true) => "\u{f07b} ",
        (_, false) => "",
    }
}
