//! Directory entry representation.

use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

use crate::naming::strip_extension;

/// The kind of a contents-API record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "file")]
    File,
    /// Symlinks, submodules and anything newer. Never shown or counted.
    #[serde(other)]
    Other,
}

/// Wire shape of one record returned by the contents API.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: EntryKind,
    #[serde(default)]
    size: u64,
    #[serde(default)]
    download_url: Option<String>,
}

/// A single file or directory inside the browsed repository.
///
/// `Entry` is an immutable snapshot of what the API returned; it is never
/// mutated after a fetch. Directory sizes are reported as `0` and
/// directories carry no download link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub struct Entry {
    name: String,
    path: String,
    kind: EntryKind,
    size: u64,
    download_url: Option<String>,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        Self::new(raw.name, raw.path, raw.kind, raw.size, raw.download_url)
    }
}

impl Entry {
    /// Creates an entry, normalising the display name to NFC.
    pub fn new(
        name: String,
        path: String,
        kind: EntryKind,
        size: u64,
        download_url: Option<String>,
    ) -> Self {
        let is_dir = kind == EntryKind::Directory;
        Self {
            name: name.nfc().collect(),
            path: path.trim_matches('/').to_string(),
            kind,
            size: if is_dir { 0 } else { size },
            download_url: if is_dir { None } else { download_url },
        }
    }

    /// Shorthand for a directory entry at `path`.
    pub fn directory(path: &str) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self::new(name, path.to_string(), EntryKind::Directory, 0, None)
    }

    /// Shorthand for a file entry at `path` with a size and download link.
    pub fn file(path: &str, size: u64, download_url: Option<String>) -> Self {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self::new(name, path.to_string(), EntryKind::File, size, download_url)
    }

    /// Returns the raw name, which may include an extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name with its trailing extension removed.
    pub fn display_name(&self) -> &str {
        strip_extension(&self.name)
    }

    /// Returns the slash-separated location from the repository root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Returns the size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the direct content link, if the API supplied one.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_file_record() {
        let json = r#"{
            "name": "Home 2025-26.png",
            "path": "Kits/Home 2025-26.png",
            "sha": "abc",
            "size": 2048,
            "type": "file",
            "download_url": "https://raw.example/Kits/Home%202025-26.png"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name(), "Home 2025-26.png");
        assert_eq!(entry.display_name(), "Home 2025-26");
        assert_eq!(entry.path(), "Kits/Home 2025-26.png");
        assert_eq!(entry.kind(), EntryKind::File);
        assert_eq!(entry.size(), 2048);
        assert_eq!(
            entry.download_url(),
            Some("https://raw.example/Kits/Home%202025-26.png")
        );
        assert!(entry.is_file());
    }

    #[test]
    fn deserializes_dir_record_with_null_link() {
        let json = r#"{"name":"Kits","path":"Kits","size":0,"type":"dir","download_url":null}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert!(entry.is_dir());
        assert_eq!(entry.download_url(), None);
        assert_eq!(entry.size(), 0);
    }

    #[test]
    fn unknown_type_becomes_other() {
        let json = r#"{"name":"vendor","path":"vendor","type":"submodule"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.kind(), EntryKind::Other);
        assert!(!entry.is_dir());
        assert!(!entry.is_file());
    }

    #[test]
    fn directory_drops_size_and_link() {
        let entry = Entry::new(
            "Kits".to_string(),
            "Kits".to_string(),
            EntryKind::Directory,
            4096,
            Some("https://example".to_string()),
        );
        assert_eq!(entry.size(), 0);
        assert_eq!(entry.download_url(), None);
    }

    #[test]
    fn name_is_nfc_normalised() {
        // "e" + combining acute accent
        let entry = Entry::file("Cafe\u{0301}.png", 1, None);
        assert_eq!(entry.name(), "Caf\u{00e9}.png");
    }

    #[test]
    fn shorthand_constructors_derive_name_from_path() {
        let dir = Entry::directory("Kits/2024");
        assert_eq!(dir.name(), "2024");
        assert_eq!(dir.path(), "Kits/2024");

        let file = Entry::file("Kits/Away.png", 10, None);
        assert_eq!(file.name(), "Away.png");
    }
}
