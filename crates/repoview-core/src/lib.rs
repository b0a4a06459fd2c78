//! Repoview core library: UI-agnostic repository browsing logic.
//!
//! `repoview-core` lists directories of one GitHub repository through the
//! read-only contents API, caches them for the session, tracks where the
//! user is, and projects that state into what each screen region shows.
//! It is decoupled from any UI framework; `repoview-tui` draws it.
//!
//! # Modules
//!
//! - [`listing`]: [`Entry`], the session [`DirectoryCache`], the
//!   [`ListingSource`] seam and its GitHub implementation, and the caching
//!   [`ListingClient`].
//! - [`naming`]: display names, icons, recency scores, byte sizes, escaping.
//! - [`nav`]: paths, history, session state, sorting/filtering, and the
//!   [`Navigator`].
//! - [`view`]: pure projections for the tree, list, breadcrumbs, preview
//!   and status bar.
//! - [`config`]: TOML settings, theme and keymap.
//! - [`event`]: the closed set of user [`Intent`]s.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod listing;
pub mod naming;
pub mod nav;
pub mod view;

pub use error::{CoreError, CoreResult};
pub use event::Intent;
pub use listing::cache::{DirectoryCache, Listing};
pub use listing::client::ListingClient;
pub use listing::entry::{Entry, EntryKind};
pub use listing::source::{GitHubContents, ListingSource};
pub use nav::history::History;
pub use nav::navigator::Navigator;
pub use nav::session::{NavMode, Session};
pub use view::Snapshot;

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
