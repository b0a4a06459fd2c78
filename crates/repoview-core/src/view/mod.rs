//! Pure projections of the session onto the display regions.
//!
//! Every view is rebuilt from a [`Snapshot`] on each render; none of them
//! keep state or touch the network.

pub mod breadcrumb;
pub mod list;
pub mod status;
pub mod tree;

use std::collections::HashSet;

use crate::listing::cache::{DirectoryCache, Listing};
use crate::nav::session::Session;

/// Read-only state handed to the views for one render.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    session: &'a Session,
    cache: &'a DirectoryCache,
    pending: &'a HashSet<String>,
}

impl<'a> Snapshot<'a> {
    pub fn new(
        session: &'a Session,
        cache: &'a DirectoryCache,
        pending: &'a HashSet<String>,
    ) -> Self {
        Self {
            session,
            cache,
            pending,
        }
    }

    pub fn session(&self) -> &'a Session {
        self.session
    }

    /// The cached listing for `path`, if it has been fetched.
    pub fn listing(&self, path: &str) -> Option<Listing> {
        self.cache.get(path)
    }

    pub fn current_listing(&self) -> Option<Listing> {
        self.cache.get(self.session.current_path())
    }

    pub fn is_pending(&self, path: &str) -> bool {
        self.pending.contains(path)
    }

    /// `true` while the current directory's listing is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_pending(self.session.current_path())
    }

    /// Which history/parent controls are enabled.
    pub fn controls(&self) -> Controls {
        Controls {
            back: self.session.can_go_back(),
            forward: self.session.can_go_forward(),
            up: self.session.can_go_up(),
        }
    }
}

/// Enabled state of the Back, Forward and Up affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub back: bool,
    pub forward: bool,
    pub up: bool,
}
