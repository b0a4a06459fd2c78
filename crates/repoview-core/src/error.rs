//! Error types for `repoview-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The contents API answered with a non-success status code.
    #[error("GitHub API error: {status}")]
    RemoteListing { status: u16 },

    /// The response body did not have the expected shape.
    ///
    /// Listing fetches never return this; they degrade to an empty listing.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A fetch finished after the user navigated away from its path.
    #[error("request for '{path}' superseded by navigation")]
    AbortedByNavigation { path: String },

    /// The request never produced a status (DNS, TLS, timeout, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// A raw file download answered with a non-success status code.
    #[error("image download failed: HTTP {status}")]
    Download { status: u16 },

    /// A download exceeded the configured byte limit.
    #[error("download of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    /// The configured API base URL cannot carry path segments.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => CoreError::RemoteListing {
                status: status.as_u16(),
            },
            None => CoreError::Transport(e.to_string()),
        }
    }
}

/// Convenience alias used throughout `repoview-core`.
pub type CoreResult<T> = Result<T, CoreError>;
