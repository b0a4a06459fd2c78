//! Caching front for a [`ListingSource`].

use std::sync::Arc;

use tracing::{debug, warn};

use super::cache::{DirectoryCache, Listing};
use super::entry::Entry;
use super::source::ListingSource;
use crate::error::CoreResult;
use crate::nav::path::is_direct_child;

/// Remote Listing Client: fetches each directory at most once per session.
///
/// The source is shared behind an `Arc` so frontends can run fetches on
/// background tasks and hand the results back through [`memoize`].
///
/// [`memoize`]: ListingClient::memoize
pub struct ListingClient {
    source: Arc<dyn ListingSource>,
    cache: DirectoryCache,
}

impl ListingClient {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        Self {
            source,
            cache: DirectoryCache::new(),
        }
    }

    /// Returns the listing for `path`, fetching it only on a cache miss.
    ///
    /// Failures are not cached, so calling again retries the request.
    pub async fn fetch_listing(&mut self, path: &str) -> CoreResult<Listing> {
        if let Some(listing) = self.cache.get(path) {
            debug!(path, "listing cache hit");
            return Ok(listing);
        }
        debug!(path, "listing cache miss");
        let entries = self.source.list(path).await?;
        Ok(self.memoize(path, entries))
    }

    /// Caches a listing fetched elsewhere for `path` and returns what is
    /// now cached. Entries that are not direct children of `path` are dropped.
    pub fn memoize(&mut self, path: &str, entries: Vec<Entry>) -> Listing {
        let total = entries.len();
        let children: Vec<Entry> = entries
            .into_iter()
            .filter(|e| is_direct_child(path, e.path()))
            .collect();
        if children.len() != total {
            warn!(
                path,
                dropped = total - children.len(),
                "listing contained entries outside the directory"
            );
        }
        self.cache.insert(path, children)
    }

    /// Shared handle to the underlying source, for background fetches.
    pub fn source(&self) -> Arc<dyn ListingSource> {
        Arc::clone(&self.source)
    }

    pub fn cache(&self) -> &DirectoryCache {
        &self.cache
    }
}

impl std::fmt::Debug for ListingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingClient")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
