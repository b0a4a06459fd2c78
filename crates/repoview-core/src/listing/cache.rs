//! Session-lifetime directory cache.

use std::collections::HashMap;
use std::sync::Arc;

use super::entry::Entry;

/// One directory's entries, shared between the cache and every view.
pub type Listing = Arc<Vec<Entry>>;

/// Append-only mapping from normalised directory path to its listing.
///
/// Listings are never evicted or replaced within a session. When two fetches
/// for the same path race, the first insert wins and later ones are ignored.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCache {
    listings: HashMap<String, Listing>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached listing for `path`, if any.
    pub fn get(&self, path: &str) -> Option<Listing> {
        self.listings.get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.listings.contains_key(path)
    }

    /// Stores `entries` under `path` unless a listing is already present.
    ///
    /// Returns the listing that ends up cached for `path`.
    pub fn insert(&mut self, path: &str, entries: Vec<Entry>) -> Listing {
        self.listings
            .entry(path.to_string())
            .or_insert_with(|| Arc::new(entries))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
