//! Application configuration loaded from a TOML file.
//!
//! The default configuration matches the values shown in
//! `config/repoview.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::error::{CoreError, CoreResult};

/// Environment variables that override the repository identity and API host.
pub const ENV_OWNER: &str = "REPOVIEW_OWNER";
pub const ENV_REPO: &str = "REPOVIEW_REPO";
pub const ENV_BRANCH: &str = "REPOVIEW_BRANCH";
pub const ENV_API_URL: &str = "REPOVIEW_API_URL";

/// Top-level application configuration.
///
/// All fields have sensible defaults so the explorer works without a
/// config file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: Theme,
    /// Key name → action id, merged over the default keymap.
    #[serde(default)]
    pub keys: HashMap<String, String>,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Candidate config files, most specific first.
    pub fn search_paths(home: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config").join("repoview.toml")];
        if let Some(home) = home {
            paths.push(home.join(".config").join("repoview").join("config.toml"));
        }
        paths
    }

    /// Loads the first config file in `paths` that exists.
    ///
    /// Returns the defaults when none exists.
    ///
    /// # Errors
    ///
    /// Any error from [`Config::load`] other than [`CoreError::NotFound`].
    pub fn discover(paths: &[PathBuf]) -> CoreResult<Self> {
        for path in paths {
            match Self::load(path) {
                Ok(config) => return Ok(config),
                Err(CoreError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(Self::default())
    }

    /// Applies the `REPOVIEW_*` overrides, reading variables through `var`.
    ///
    /// Empty values are ignored.
    pub fn with_env(self, var: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |name: &str, current: String| {
            var(name).filter(|v| !v.trim().is_empty()).unwrap_or(current)
        };
        let repository = RepositoryConfig {
            owner: pick(ENV_OWNER, self.repository.owner),
            repo: pick(ENV_REPO, self.repository.repo),
            branch: pick(ENV_BRANCH, self.repository.branch),
        };
        let api = ApiConfig {
            base_url: pick(ENV_API_URL, self.api.base_url),
            ..self.api
        };
        Self {
            repository,
            api,
            ..self
        }
    }

    /// Where the log file goes: `[general] log_file`, else the temp dir.
    pub fn log_path(&self) -> PathBuf {
        if self.general.log_file.is_empty() {
            std::env::temp_dir().join("repoview.log")
        } else {
            PathBuf::from(&self.general.log_file)
        }
    }
}

/// Which repository is browsed. Fixed for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_repo")]
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            branch: default_branch(),
        }
    }
}

impl RepositoryConfig {
    /// `owner/repo@branch`, for titles and logs.
    pub fn label(&self) -> String {
        format!("{}/{}@{}", self.owner, self.repo, self.branch)
    }
}

/// Contents API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds; `0` leaves it to the transport.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: 0,
        }
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log file path; empty means `<temp dir>/repoview.log`.
    #[serde(default)]
    pub log_file: String,
}

/// Preview pane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Download and draw images in the terminal.
    #[serde(default = "default_true")]
    pub images: bool,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            images: true,
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

/// UI layout and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tree_ratio")]
    pub tree_ratio: f64,
    #[serde(default = "default_preview_ratio")]
    pub preview_ratio: f64,
    #[serde(default = "default_true")]
    pub show_icons: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tree_ratio: default_tree_ratio(),
            preview_ratio: default_preview_ratio(),
            show_icons: true,
        }
    }
}

fn default_owner() -> String {
    "2f25".to_string()
}

fn default_repo() -> String {
    "Roblox-Kit-Archive".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("repoview/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_image_bytes() -> u64 {
    8 * 1024 * 1024
}

fn default_tree_ratio() -> f64 {
    0.25
}

fn default_preview_ratio() -> f64 {
    0.30
}
