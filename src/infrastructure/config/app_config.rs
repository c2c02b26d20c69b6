//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::ProximityMargin;
use crate::infrastructure::photo_api::danbooru::{DANBOORU_BASE, DEFAULT_LIMIT, DEFAULT_TAGS};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Deferred image loading configuration.
    #[serde(default)]
    pub lazy_load: LazyLoadConfig,

    /// Preview layout configuration.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the public post feed.
    #[serde(default = "default_posts_base_url")]
    pub posts_base_url: String,

    /// Number of posts requested from the feed.
    #[serde(default = "default_posts_limit")]
    pub posts_limit: u32,

    /// Tag filter sent to the feed.
    #[serde(default = "default_posts_tags")]
    pub posts_tags: String,

    /// Base URL of the customer album API.
    #[serde(default = "default_album_base_url")]
    pub album_base_url: String,

    /// Base URL of optimized album images. Defaults to
    /// `{album_base_url}/uploads/optimized`.
    #[serde(default)]
    pub thumb_base_url: Option<String>,

    /// Base URL of original album images. Defaults to
    /// `{album_base_url}/uploads/original`.
    #[serde(default)]
    pub raw_base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Returns the thumbnail base URL in effect.
    #[must_use]
    pub fn effective_thumb_base_url(&self) -> String {
        self.thumb_base_url.clone().unwrap_or_else(|| {
            format!(
                "{}/uploads/optimized",
                self.album_base_url.trim_end_matches('/')
            )
        })
    }

    /// Returns the original-image base URL in effect.
    #[must_use]
    pub fn effective_raw_base_url(&self) -> String {
        self.raw_base_url.clone().unwrap_or_else(|| {
            format!(
                "{}/uploads/original",
                self.album_base_url.trim_end_matches('/')
            )
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            posts_base_url: default_posts_base_url(),
            posts_limit: default_posts_limit(),
            posts_tags: default_posts_tags(),
            album_base_url: default_album_base_url(),
            thumb_base_url: None,
            raw_base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Deferred image loading configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LazyLoadConfig {
    /// Buffer around the viewport that triggers loading, in CSS margin notation.
    #[serde(default)]
    pub root_margin: ProximityMargin,

    /// Render without a viewport; nothing is auto-loaded.
    #[serde(default)]
    pub headless: bool,
}

/// Preview layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Viewport width in pixels.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,

    /// Viewport height in pixels.
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,

    /// Vertical gap between tiles in pixels.
    #[serde(default = "default_gap")]
    pub gap: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            gap: default_gap(),
        }
    }
}

fn default_posts_base_url() -> String {
    DANBOORU_BASE.to_string()
}

const fn default_posts_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_posts_tags() -> String {
    DEFAULT_TAGS.to_string()
}

fn default_album_base_url() -> String {
    "http://localhost:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_viewport_width() -> f64 {
    720.0
}

const fn default_viewport_height() -> f64 {
    900.0
}

const fn default_gap() -> f64 {
    8.0
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if args.headless {
            self.lazy_load.headless = true;
        }
        if let Some(root_margin) = args.root_margin {
            self.lazy_load.root_margin = root_margin;
        }
        if let Some(posts_base_url) = &args.posts_base_url {
            self.api.posts_base_url = posts_base_url.clone();
        }
        if let Some(album_base_url) = &args.album_base_url {
            self.api.album_base_url = album_base_url.clone();
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
    }

    /// Returns effective log path. Logs go to stderr when `None`.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            lazy_load: LazyLoadConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}
