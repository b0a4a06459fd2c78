//! Sorting and filtering for directory listings.
//!
//! Directories sort alphabetically. Files sort newest season first (see
//! [`recency_score`]) and alphabetically within the same season. The search
//! filter matches the extension-stripped name, ignoring case.

use std::cmp::Ordering;

use crate::listing::entry::Entry;
use crate::naming::{locale_compare, recency_score, strip_extension};

/// Returns `true` if `entry` passes the search `query`.
///
/// The query is trimmed; an empty query matches everything.
pub fn matches_query(entry: &Entry, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || strip_extension(entry.name())
            .to_lowercase()
            .contains(&needle)
}

/// Orders two directories by name.
pub fn compare_directories(a: &Entry, b: &Entry) -> Ordering {
    locale_compare(a.name(), b.name())
}

/// Orders two files by recency score (descending), then by name.
pub fn compare_files(a: &Entry, b: &Entry) -> Ordering {
    recency_score(b.name())
        .cmp(&recency_score(a.name()))
        .then_with(|| locale_compare(a.name(), b.name()))
}

/// Returns the sorted sub-directories of a listing, ignoring the query.
pub fn directories(entries: &[Entry]) -> Vec<Entry> {
    let mut dirs: Vec<Entry> = entries.iter().filter(|e| e.is_dir()).cloned().collect();
    dirs.sort_by(compare_directories);
    dirs
}

/// Filters and orders a listing for display: directories first, then files.
///
/// Entries that are neither directories nor files are left out. Returns a
/// **new** `Vec<Entry>`; the input slice is never mutated.
pub fn arrange(entries: &[Entry], query: &str) -> Vec<Entry> {
    let (mut dirs, mut files): (Vec<Entry>, Vec<Entry>) = entries
        .iter()
        .filter(|e| e.is_dir() || e.is_file())
        .filter(|e| matches_query(e, query))
        .cloned()
        .partition(|e| e.is_dir());

    dirs.sort_by(compare_directories);
    files.sort_by(compare_files);
    dirs.extend(files);
    dirs
}
