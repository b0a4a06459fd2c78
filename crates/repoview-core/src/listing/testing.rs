//! In-memory [`ListingSource`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::entry::Entry;
use super::source::ListingSource;
use crate::error::{CoreError, CoreResult};

/// Serves canned listings and records every path it is asked for.
///
/// Paths with neither a listing nor a failure list as empty.
#[derive(Debug, Default)]
pub(crate) struct RecordingSource {
    listings: HashMap<String, Vec<Entry>>,
    failures: HashMap<String, u16>,
    calls: Mutex<Vec<String>>,
}

impl RecordingSource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_listing(mut self, path: &str, entries: Vec<Entry>) -> Self {
        self.listings.insert(path.to_string(), entries);
        self
    }

    pub(crate) fn with_failure(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn calls_for(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

#[async_trait]
impl ListingSource for RecordingSource {
    async fn list(&self, path: &str) -> CoreResult<Vec<Entry>> {
        self.calls.lock().unwrap().push(path.to_string());
        if let Some(&status) = self.failures.get(path) {
            return Err(CoreError::RemoteListing { status });
        }
        Ok(self.listings.get(path).cloned().unwrap_or_default())
    }
}

/// A small repository used across navigation and view tests:
///
/// ```text
/// Kits/
///   2024/
///     Final 2024.png
///   Home 2025-26.png
///   Away 2024-25.png
/// Leagues/
/// README.md
/// ```
pub(crate) fn sample_repo() -> RecordingSource {
    RecordingSource::new()
        .with_listing(
            "",
            vec![
                Entry::directory("Leagues"),
                Entry::file("README.md", 300, Some("https://raw.example/README.md".into())),
                Entry::directory("Kits"),
            ],
        )
        .with_listing(
            "Kits",
            vec![
                Entry::file(
                    "Kits/Away 2024-25.png",
                    2048,
                    Some("https://raw.example/Kits/Away%202024-25.png".into()),
                ),
                Entry::directory("Kits/2024"),
                Entry::file(
                    "Kits/Home 2025-26.png",
                    1536,
                    Some("https://raw.example/Kits/Home%202025-26.png".into()),
                ),
            ],
        )
        .with_listing(
            "Kits/2024",
            vec![Entry::file("Kits/2024/Final 2024.png", 10, None)],
        )
        .with_listing("Leagues", Vec::new())
}
