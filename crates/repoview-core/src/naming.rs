//! Display-name helpers shared by every view.
//!
//! Names coming back from the contents API are shown without their file
//! extension, files are ordered by a "season" year found in their name, and
//! every dynamic string is escaped before it reaches the terminal.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::listing::entry::EntryKind;

/// Extensions (lowercase) that get the image icon and an image preview.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];

/// Score given to files with no recognisable year; sorts after everything.
pub const UNKNOWN_RECENCY: i64 = -1;

const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// A four-digit 19xx/20xx year, optionally followed by `-NN` (spaces allowed
/// around the hyphen), e.g. `2025-26`, `2025 - 26`, `1999`.
fn season_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"((?:19|20)[0-9]{2})(?:[[:space:]]*-[[:space:]]*([0-9]{2}))?")
            .expect("season pattern is a valid regex")
    })
}

/// The icon class of a list or tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIcon {
    Folder,
    Image,
    Document,
}

/// Returns `name` with its trailing extension removed.
///
/// The extension is everything after the last `.`. Names without a dot,
/// ending in a dot, or consisting of a dot-prefixed stem only (`.gitignore`)
/// are returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

/// Returns the lowercase extension of `name` if it is purely alphanumeric.
pub fn extension(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    let (_, ext) = lower.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_string())
}

/// Returns `true` if the file name carries one of [`IMAGE_EXTENSIONS`].
pub fn is_image(name: &str) -> bool {
    extension(name).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Classifies the icon to show for an entry.
pub fn icon_for(kind: EntryKind, name: &str) -> EntryIcon {
    match kind {
        EntryKind::Directory => EntryIcon::Folder,
        _ if is_image(name) => EntryIcon::Image,
        _ => EntryIcon::Document,
    }
}

/// Returns the type column label: `File folder` or `<EXT> File`.
pub fn type_label(kind: EntryKind, name: &str) -> String {
    match kind {
        EntryKind::Directory => "File folder".to_string(),
        _ => match extension(name) {
            Some(ext) => format!("{} File", ext.to_uppercase()),
            None => "File".to_string(),
        },
    }
}

/// Extracts the recency score used to order files newest first.
///
/// `2025-26` scores `202526`, a bare `2025` scores `2025`, and a name with
/// no year scores [`UNKNOWN_RECENCY`]. The first season pair in the name
/// wins over any bare year; a bare year counts only when no pair exists.
pub fn recency_score(name: &str) -> i64 {
    let mut bare_year = None;
    for caps in season_pattern().captures_iter(name) {
        let year: i64 = caps[1].parse().unwrap_or_default();
        match caps.get(2) {
            Some(suffix) => {
                let suffix: i64 = suffix.as_str().parse().unwrap_or_default();
                return year * 100 + suffix;
            }
            None => {
                bare_year.get_or_insert(year);
            }
        }
    }
    bare_year.unwrap_or(UNKNOWN_RECENCY)
}

/// Alphabetical comparison in natural reading order.
///
/// Letters compare with accents and case folded away first (`Étoile` sorts
/// with `E`). Ties fall back to lowercase code points, then names that
/// differ only in case put the lowercase form first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Decomposes `s`, drops combining marks and lowercases the rest.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Formats a byte count with binary prefixes, rounded to a whole number.
///
/// `0` formats as an empty string (directories and empty files show no size).
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return String::new();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{} {}", value.round() as u64, BYTE_UNITS[unit])
}

/// Makes a remote-supplied string safe to draw on the terminal.
///
/// Control characters (ESC, BEL, CR, ...) would otherwise be interpreted by
/// the terminal; they are replaced with their visible `\u{..}` form.
pub fn escape_text(s: &str) -> String {
    if !s.chars().any(char::is_control) {
        return s.to_string();
    }
    s.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_unicode().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_extension_removes_last_extension() {
        assert_eq!(strip_extension("Kit 2025-26.png"), "Kit 2025-26");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
    }

    #[test]
    fn strip_extension_keeps_names_without_extension() {
        assert_eq!(strip_extension("Kit"), "Kit");
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension(".gitignore"), ".gitignore");
    }

    #[test]
    fn extension_is_lowercase_alphanumeric() {
        assert_eq!(extension("Home.PNG").as_deref(), Some("png"));
        assert_eq!(extension("notes.tar-gz"), None);
        assert_eq!(extension("README"), None);
    }

    #[test]
    fn icon_classification() {
        assert_eq!(icon_for(EntryKind::Directory, "Kits.png"), EntryIcon::Folder);
        assert_eq!(icon_for(EntryKind::File, "Home.jpeg"), EntryIcon::Image);
        assert_eq!(icon_for(EntryKind::File, "Home.WEBP"), EntryIcon::Image);
        assert_eq!(icon_for(EntryKind::File, "notes.txt"), EntryIcon::Document);
        assert_eq!(icon_for(EntryKind::File, "LICENSE"), EntryIcon::Document);
    }

    #[test]
    fn type_labels() {
        assert_eq!(type_label(EntryKind::Directory, "Kits"), "File folder");
        assert_eq!(type_label(EntryKind::File, "Home.png"), "PNG File");
        assert_eq!(type_label(EntryKind::File, "LICENSE"), "File");
    }

    #[test]
    fn recency_score_season_pair() {
        assert_eq!(recency_score("Kit 2025-26"), 202_526);
        assert_eq!(recency_score("Kit 2025 - 26.png"), 202_526);
        assert_eq!(recency_score("Kit 1999-00"), 199_900);
        assert_eq!(recency_score("Retro 1998 Kit 2025-26.png"), 202_526);
    }

    #[test]
    fn recency_score_first_pair_wins() {
        assert_eq!(recency_score("Kit 2023-24 reissue 2025-26"), 202_324);
        assert_eq!(recency_score("Final 2014 replay 2016"), 2014);
    }

    #[test]
    fn recency_score_bare_year() {
        assert_eq!(recency_score("Final 2014.png"), 2014);
    }

    #[test]
    fn recency_score_unknown() {
        assert_eq!(recency_score("Kit"), UNKNOWN_RECENCY);
        assert_eq!(recency_score("Kit 1850-51"), UNKNOWN_RECENCY);
    }

    #[test]
    fn recency_score_leading_year_dominates() {
        assert!(recency_score("2025-26") > recency_score("2024-99"));
        assert!(recency_score("2024-25") > recency_score("2024"));
    }

    #[test]
    fn locale_compare_is_case_insensitive() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_folds_accents() {
        assert_eq!(locale_compare("Étoile", "Zulu"), Ordering::Less);
        assert_eq!(locale_compare("Ecole", "École"), Ordering::Less);
        assert_eq!(locale_compare("école", "Ezra"), Ordering::Less);
        assert_eq!(locale_compare("Ñandú", "Oslo"), Ordering::Less);
    }

    #[test]
    fn locale_compare_lowercase_first_on_case_tie() {
        assert_eq!(locale_compare("kit", "Kit"), Ordering::Less);
        assert_eq!(locale_compare("Kit", "kit"), Ordering::Greater);
    }

    #[test]
    fn format_bytes_values() {
        assert_eq!(format_bytes(0), "");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "2 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_bytes(1_073_741_824), "1 GB");
    }

    #[test]
    fn format_bytes_stops_at_gigabytes() {
        assert_eq!(format_bytes(2048 * 1_073_741_824), "2048 GB");
    }

    #[test]
    fn escape_text_passes_plain_text() {
        assert_eq!(escape_text("Home <2025-26> & \"Away\""), "Home <2025-26> & \"Away\"");
    }

    #[test]
    fn escape_text_neutralises_control_sequences() {
        let escaped = escape_text("evil\x1b[2Jname");
        assert!(!escaped.contains('\x1b'));
        assert_eq!(escaped, "evil\\u{1b}[2Jname");
    }
}
