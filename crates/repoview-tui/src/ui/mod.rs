//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single screen region using ratatui.

pub mod breadcrumb;
pub mod hyperlink;
pub mod list;
pub mod popup;
pub mod preview;
pub mod statusbar;
pub mod toolbar;
pub mod tree;
