//! Remote listing sources.
//!
//! [`ListingSource`] is the seam between the navigation logic and the
//! network. [`GitHubContents`] implements it against the GitHub REST
//! contents endpoint; tests substitute an in-memory source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::entry::Entry;
use crate::config::settings::{ApiConfig, RepositoryConfig};
use crate::error::{CoreError, CoreResult};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Something that can list one directory of the browsed repository.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Lists the direct children of `path` (empty string = repository root).
    ///
    /// A path that resolves to something other than a directory yields an
    /// empty listing. A non-success response fails with
    /// [`CoreError::RemoteListing`].
    async fn list(&self, path: &str) -> CoreResult<Vec<Entry>>;
}

/// Read-only client for `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone)]
pub struct GitHubContents {
    http: reqwest::Client,
    contents_root: Url,
    branch: String,
}

impl GitHubContents {
    /// Builds a client for the configured repository.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidUrl`] if `api.base_url` is not an absolute
    ///   hierarchical URL.
    /// - [`CoreError::Transport`] if the HTTP client cannot be initialised.
    pub fn new(repository: &RepositoryConfig, api: &ApiConfig) -> CoreResult<Self> {
        let mut contents_root = Url::parse(&api.base_url)
            .map_err(|e| CoreError::InvalidUrl(format!("{}: {e}", api.base_url)))?;
        contents_root
            .path_segments_mut()
            .map_err(|_| CoreError::InvalidUrl(api.base_url.clone()))?
            .pop_if_empty()
            .extend([
                "repos",
                repository.owner.as_str(),
                repository.repo.as_str(),
                "contents",
            ]);

        let mut builder = reqwest::Client::builder().user_agent(api.user_agent.as_str());
        if api.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(api.timeout_secs));
        }
        let http = builder
            .build()
            .map_err(|e| CoreError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            contents_root,
            branch: repository.branch.clone(),
        })
    }

    /// Returns the request URL for listing `path` on the configured branch.
    ///
    /// Every path segment is percent-encoded individually.
    pub fn contents_url(&self, path: &str) -> Url {
        let mut url = self.contents_root.clone();
        if !path.is_empty() {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.extend(path.split('/').filter(|s| !s.is_empty()));
            }
        }
        url.query_pairs_mut().append_pair("ref", &self.branch);
        url
    }

    /// Downloads the raw bytes behind a file's `download_url`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::Download`] on a non-success status.
    /// - [`CoreError::TooLarge`] once more than `max_bytes` would be read.
    /// - [`CoreError::Transport`] if the connection fails mid-body.
    pub async fn download(&self, url: &str, max_bytes: u64) -> CoreResult<Vec<u8>> {
        let url = Url::parse(url).map_err(|e| CoreError::InvalidUrl(format!("{url}: {e}")))?;
        debug!(%url, "downloading preview");

        let mut response = self.http.get(url).send().await?;
        check_download_status(response.status())?;
        if let Some(size) = response.content_length().filter(|&n| n > max_bytes) {
            return Err(CoreError::TooLarge {
                size,
                limit: max_bytes,
            });
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > max_bytes {
                return Err(CoreError::TooLarge {
                    size: bytes.len() as u64,
                    limit: max_bytes,
                });
            }
        }
        Ok(bytes)
    }
}

#[async_trait]
impl ListingSource for GitHubContents {
    async fn list(&self, path: &str) -> CoreResult<Vec<Entry>> {
        let url = self.contents_url(path);
        debug!(%url, "requesting listing");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::RemoteListing {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        match parse_listing(&body) {
            Err(CoreError::MalformedResponse(reason)) => {
                warn!(path, %reason, "unexpected listing shape, treating as empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}

/// Maps the status of a raw-content response to [`CoreError::Download`].
fn check_download_status(status: StatusCode) -> CoreResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CoreError::Download {
            status: status.as_u16(),
        })
    }
}

/// Parses a contents-API response body.
///
/// An array yields one [`Entry`] per record; records that do not
/// deserialize are skipped. A single object (the path named a file) yields
/// an empty listing.
///
/// # Errors
///
/// [`CoreError::MalformedResponse`] if the body is not JSON, or is a JSON
/// value other than an array or an object.
pub fn parse_listing(body: &str) -> CoreResult<Vec<Entry>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| CoreError::MalformedResponse(e.to_string()))?;

    match value {
        Value::Array(records) => Ok(records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<Entry>(record) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping malformed listing record");
                    None
                }
            })
            .collect()),
        Value::Object(_) => Ok(Vec::new()),
        other => Err(CoreError::MalformedResponse(format!(
            "expected an array of entries, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
