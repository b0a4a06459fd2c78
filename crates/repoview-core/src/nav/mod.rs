//! Navigation logic.
//!
//! This module contains repository [`path`] helpers, navigation
//! [`history::History`], the per-session [`session::Session`], listing
//! [`filter`]ing/sorting, and the [`navigator::Navigator`] that ties them
//! to the listing client.

pub mod filter;
pub mod history;
pub mod navigator;
pub mod path;
pub mod session;
