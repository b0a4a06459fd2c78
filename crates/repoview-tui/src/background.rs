//! Background fetches.
//!
//! Listing requests and image downloads run as tokio tasks so the draw loop
//! never waits on the network. Each task reports back through an unbounded
//! mpsc channel, tagged with the path or URL it was issued for; the main
//! loop drains the channel once per frame.

use std::sync::Arc;

use repoview_core::{CoreResult, Entry, GitHubContents, ListingSource};
use tokio::sync::mpsc::UnboundedSender;

/// Messages sent from fetch tasks to the main event loop.
pub enum FetchMessage {
    Listing {
        path: String,
        result: CoreResult<Vec<Entry>>,
    },
    Image {
        url: String,
        result: CoreResult<Vec<u8>>,
    },
}

/// Spawns one task per requested directory listing.
pub fn spawn_listings(
    source: &Arc<dyn ListingSource>,
    paths: Vec<String>,
    tx: &UnboundedSender<FetchMessage>,
) {
    for path in paths {
        let source = Arc::clone(source);
        let tx = tx.clone();
        tokio::spawn(async move {
            tracing::debug!(path = %path, "fetching listing");
            let result = source.list(&path).await;
            let _ = tx.send(FetchMessage::Listing { path, result });
        });
    }
}

/// Spawns a download of an image's raw bytes, capped at `max_bytes`.
pub fn spawn_image(
    github: &Arc<GitHubContents>,
    url: String,
    max_bytes: u64,
    tx: &UnboundedSender<FetchMessage>,
) {
    let github = Arc::clone(github);
    let tx = tx.clone();
    tokio::spawn(async move {
        tracing::debug!(url = %url, "downloading image");
        let result = github.download(&url, max_bytes).await;
        let _ = tx.send(FetchMessage::Image { url, result });
    });
}
