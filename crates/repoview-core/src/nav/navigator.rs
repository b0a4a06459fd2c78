//! The navigation controller.
//!
//! [`Navigator`] owns the [`Session`] and the [`ListingClient`]. Each
//! [`Intent`] is applied as a pure state transition by [`Navigator::dispatch`],
//! which answers with the listings the next render still needs. Frontends
//! fetch those however they like and report back through
//! [`Navigator::complete`]; [`Navigator::run`] does both in one call.
//!
//! Results are tagged with the path they were requested for. A late
//! success is still cached; a late failure for a path that is no longer on
//! screen is dropped as [`CoreError::AbortedByNavigation`].

use std::collections::HashSet;

use tracing::{debug, error};

use crate::error::{CoreError, CoreResult};
use crate::event::Intent;
use crate::listing::cache::{DirectoryCache, Listing};
use crate::listing::client::ListingClient;
use crate::listing::entry::{Entry, EntryKind};
use crate::nav::path::{ancestors, normalize, parent};
use crate::nav::session::{NavMode, Session};
use crate::view::Snapshot;

/// Single writer of the browsing session.
#[derive(Debug)]
pub struct Navigator {
    client: ListingClient,
    session: Session,
    /// Paths handed out by `dispatch` whose result has not come back yet.
    pending: HashSet<String>,
    /// Paths that failed since the last directory change; not re-requested
    /// until the user navigates again.
    failed: HashSet<String>,
}

impl Navigator {
    /// Starts a session at the repository root.
    ///
    /// Nothing is fetched until the first [`dispatch`](Self::dispatch) or
    /// [`initial_requests`](Self::initial_requests).
    pub fn new(client: ListingClient) -> Self {
        Self {
            client,
            session: Session::new(),
            pending: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &ListingClient {
        &self.client
    }

    pub fn cache(&self) -> &DirectoryCache {
        self.client.cache()
    }

    /// Returns `true` while a listing for `path` is being fetched.
    pub fn is_pending(&self, path: &str) -> bool {
        self.pending.contains(path)
    }

    /// Read-only view of everything a render needs.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.session, self.client.cache(), &self.pending)
    }

    /// Listings needed to draw the start screen.
    pub fn initial_requests(&mut self) -> Vec<String> {
        self.missing_listings()
    }

    /// Applies `intent` and returns the paths whose listings must be fetched
    /// before the views are complete.
    ///
    /// Returned paths are marked pending and will not be returned again
    /// until [`complete`](Self::complete) is called for them.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<String> {
        debug!(?intent, "dispatch");
        match intent {
            Intent::Navigate(path) => self.goto(normalize(&path), NavMode::Push),
            Intent::Back => {
                let current = self.session.current_path();
                if let Some((history, target)) = self.session.history().go_back(current) {
                    self.update(|s| s.with_history(history));
                    self.goto(target, NavMode::Replay);
                }
            }
            Intent::Forward => {
                let current = self.session.current_path();
                if let Some((history, target)) = self.session.history().go_forward(current) {
                    self.update(|s| s.with_history(history));
                    self.goto(target, NavMode::Replay);
                }
            }
            Intent::Up => {
                if self.session.can_go_up() {
                    let target = parent(self.session.current_path()).to_string();
                    self.goto(target, NavMode::Push);
                }
            }
            Intent::Search(query) => self.update(|s| s.with_query(query)),
            Intent::Select(entry) => self.select(entry),
            Intent::ToggleNode(path) => {
                let path = normalize(&path);
                self.update(|s| s.with_node_toggled(&path));
            }
        }
        self.missing_listings()
    }

    /// Reports the outcome of fetching `path`.
    ///
    /// A successful result is cached regardless of where the user is now.
    /// A failure is recorded only if `path` is still needed on screen;
    /// otherwise it is discarded and reported as
    /// [`CoreError::AbortedByNavigation`].
    pub fn complete(&mut self, path: &str, result: CoreResult<Vec<Entry>>) -> CoreResult<Listing> {
        self.pending.remove(path);
        match result {
            Ok(entries) => Ok(self.client.memoize(path, entries)),
            Err(err) => Err(self.record_failure(path, err)),
        }
    }

    /// Applies `intent` and fetches everything it needs, one request at a
    /// time, before returning.
    ///
    /// Returns the first fetch error, after the session already reflects
    /// the new location.
    pub async fn run(&mut self, intent: Intent) -> CoreResult<()> {
        let requests = self.dispatch(intent);
        let mut outcome = Ok(());
        for path in requests {
            let fetched = self.client.fetch_listing(&path).await;
            self.pending.remove(&path);
            if let Err(err) = fetched {
                let err = self.record_failure(&path, err);
                if outcome.is_ok() {
                    outcome = Err(err);
                }
            }
        }
        outcome
    }

    fn update(&mut self, transition: impl FnOnce(Session) -> Session) {
        let session = std::mem::take(&mut self.session);
        self.session = transition(session);
    }

    fn goto(&mut self, path: String, mode: NavMode) {
        debug!(path = %path, ?mode, "goto");
        self.failed.clear();
        self.update(|s| s.with_location(path, mode));
    }

    fn select(&mut self, entry: Entry) {
        match entry.kind() {
            EntryKind::Directory => self.goto(entry.path().to_string(), NavMode::Push),
            EntryKind::File => self.update(|s| s.with_selected(Some(entry))),
            EntryKind::Other => debug!(path = entry.path(), "ignoring selection"),
        }
    }

    /// Every listing the current render shows: the root, the current
    /// directory, each expanded ancestor, and each hand-opened tree node.
    fn wanted_paths(&self) -> Vec<String> {
        let current = self.session.current_path();
        let mut wanted: Vec<String> = ancestors(current)
            .into_iter()
            .filter(|p| p.is_empty() || p == current || self.session.is_expanded(p))
            .collect();
        for path in self.session.manually_expanded() {
            if !wanted.iter().any(|w| w == path) {
                wanted.push(path.to_string());
            }
        }
        wanted
    }

    fn missing_listings(&mut self) -> Vec<String> {
        let missing: Vec<String> = self
            .wanted_paths()
            .into_iter()
            .filter(|p| {
                !self.client.cache().contains(p)
                    && !self.pending.contains(p)
                    && !self.failed.contains(p)
            })
            .collect();
        self.pending.extend(missing.iter().cloned());
        missing
    }

    fn record_failure(&mut self, path: &str, err: CoreError) -> CoreError {
        if !self.wanted_paths().iter().any(|p| p == path) {
            debug!(path, error = %err, "discarding failure for a path no longer shown");
            return CoreError::AbortedByNavigation {
                path: path.to_string(),
            };
        }
        error!(path, error = %err, "listing fetch failed");
        self.failed.insert(path.to_string());
        if path == self.session.current_path() {
            let message = err.to_string();
            self.update(|s| s.with_load_error(Some(message)));
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::listing::testing::{sample_repo, RecordingSource};

    fn navigator(source: &Arc<RecordingSource>) -> Navigator {
        Navigator::new(ListingClient::new(source.clone()))
    }

    #[tokio::test]
    async fn up_reaches_root_and_stays_there() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.run(Intent::Navigate("Kits/2024".into())).await.unwrap();

        nav.run(Intent::Up).await.unwrap();
        assert_eq!(nav.session().current_path(), "Kits");
        nav.run(Intent::Up).await.unwrap();
        assert_eq!(nav.session().current_path(), "");

        let back_len = nav.session().history().back_len();
        nav.run(Intent::Up).await.unwrap();
        nav.run(Intent::Up).await.unwrap();
        assert_eq!(nav.session().current_path(), "");
        assert_eq!(nav.session().history().back_len(), back_len);
        assert!(!nav.session().can_go_up());
    }

    #[tokio::test]
    async fn back_then_forward_replays_push_sequence() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        let visits = ["Kits", "Kits/2024", "Leagues", "Kits"];

        for path in visits {
            nav.run(Intent::Navigate(path.into())).await.unwrap();
        }
        for _ in 1..visits.len() {
            nav.run(Intent::Back).await.unwrap();
        }
        assert_eq!(nav.session().current_path(), visits[0]);

        for _ in 1..visits.len() {
            nav.run(Intent::Forward).await.unwrap();
        }
        assert_eq!(nav.session().current_path(), visits[visits.len() - 1]);
        assert!(!nav.session().can_go_forward());
    }

    #[tokio::test]
    async fn back_and_forward_at_edges_are_noops() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);

        nav.run(Intent::Back).await.unwrap();
        nav.run(Intent::Forward).await.unwrap();
        assert_eq!(nav.session().current_path(), "");
        assert!(!nav.session().can_go_back());
        assert!(!nav.session().can_go_forward());
    }

    #[tokio::test]
    async fn revisiting_a_path_does_not_refetch() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);

        nav.run(Intent::Navigate("Kits".into())).await.unwrap();
        nav.run(Intent::Navigate("Leagues".into())).await.unwrap();
        nav.run(Intent::Back).await.unwrap();
        nav.run(Intent::Navigate("Kits".into())).await.unwrap();

        assert_eq!(source.calls_for("Kits"), 1);
        assert_eq!(source.calls_for(""), 1);
        assert_eq!(source.calls_for("Leagues"), 1);
    }

    #[tokio::test]
    async fn navigation_resets_selection_and_search() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.run(Intent::Navigate("Kits".into())).await.unwrap();

        nav.run(Intent::Search("home".into())).await.unwrap();
        nav.run(Intent::Select(Entry::file("Kits/Home 2025-26.png", 1536, None)))
            .await
            .unwrap();
        assert_eq!(nav.session().query(), "home");
        assert!(nav.session().selected().is_some());

        nav.run(Intent::Navigate("Kits/2024".into())).await.unwrap();
        assert!(nav.session().query().is_empty());
        assert!(nav.session().selected().is_none());
    }

    #[tokio::test]
    async fn selecting_a_directory_navigates() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);

        nav.run(Intent::Select(Entry::directory("Kits"))).await.unwrap();
        assert_eq!(nav.session().current_path(), "Kits");
        assert!(nav.session().selected().is_none());
        assert!(nav.session().can_go_back());
    }

    #[tokio::test]
    async fn failed_fetch_still_moves_and_reports() {
        let source = Arc::new(sample_repo().with_failure("Gone", 404));
        let mut nav = navigator(&source);

        let err = nav.run(Intent::Navigate("Gone".into())).await.unwrap_err();

        assert!(matches!(err, CoreError::RemoteListing { status: 404 }));
        assert_eq!(nav.session().current_path(), "Gone");
        assert_eq!(nav.session().load_error(), Some("GitHub API error: 404"));
        assert!(nav.session().can_go_back());
        assert!(!nav.cache().contains("Gone"));
    }

    #[tokio::test]
    async fn failed_path_is_retried_only_on_renavigation() {
        let source = Arc::new(sample_repo().with_failure("Gone", 500));
        let mut nav = navigator(&source);
        let _ = nav.run(Intent::Navigate("Gone".into())).await;

        nav.run(Intent::Search("x".into())).await.unwrap();
        assert_eq!(source.calls_for("Gone"), 1);

        let _ = nav.run(Intent::Navigate("Gone".into())).await;
        assert_eq!(source.calls_for("Gone"), 2);
    }

    #[test]
    fn dispatch_requests_root_and_ancestors() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);

        let requests = nav.dispatch(Intent::Navigate("/Kits/2024/".into()));
        assert_eq!(requests, vec!["", "Kits", "Kits/2024"]);
        assert!(nav.is_pending("Kits"));
        assert!(nav.snapshot().is_loading());
    }

    #[test]
    fn dispatch_skips_pending_paths() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);

        assert_eq!(nav.initial_requests(), vec![""]);
        let requests = nav.dispatch(Intent::Navigate("Kits".into()));
        assert_eq!(requests, vec!["Kits"]);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.dispatch(Intent::Navigate("Kits".into()));
        nav.dispatch(Intent::Navigate("Leagues".into()));

        let err = nav
            .complete("Kits", Err(CoreError::RemoteListing { status: 503 }))
            .unwrap_err();

        assert!(matches!(err, CoreError::AbortedByNavigation { .. }));
        assert!(nav.session().load_error().is_none());
        assert!(!nav.is_pending("Kits"));
    }

    #[test]
    fn stale_success_is_still_cached() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.dispatch(Intent::Navigate("Kits".into()));
        nav.dispatch(Intent::Navigate("Leagues".into()));

        nav.complete("Kits", Ok(vec![Entry::file("Kits/a.png", 1, None)]))
            .unwrap();

        assert!(nav.cache().contains("Kits"));
        assert_eq!(nav.session().current_path(), "Leagues");
        assert!(nav.dispatch(Intent::Navigate("Kits".into())).is_empty());
    }

    #[test]
    fn current_failure_sets_load_error() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.dispatch(Intent::Navigate("Kits".into()));

        let err = nav
            .complete("Kits", Err(CoreError::RemoteListing { status: 403 }))
            .unwrap_err();

        assert!(matches!(err, CoreError::RemoteListing { status: 403 }));
        assert_eq!(nav.session().load_error(), Some("GitHub API error: 403"));
    }

    #[test]
    fn toggling_a_node_requests_its_children() {
        let source = Arc::new(sample_repo());
        let mut nav = navigator(&source);
        nav.initial_requests();
        nav.complete("", Ok(vec![Entry::directory("Kits")])).unwrap();

        let requests = nav.dispatch(Intent::ToggleNode("Kits".into()));
        assert_eq!(requests, vec!["Kits"]);
        assert_eq!(nav.session().current_path(), "");
        assert!(nav.session().is_expanded("Kits"));
    }

    #[test]
    fn up_at_root_requests_nothing_new() {
        let source = Arc::new(RecordingSource::new());
        let mut nav = navigator(&source);
        nav.initial_requests();
        nav.complete("", Ok(Vec::new())).unwrap();

        assert!(nav.dispatch(Intent::Up).is_empty());
        assert!(!nav.session().can_go_back());
    }
}
