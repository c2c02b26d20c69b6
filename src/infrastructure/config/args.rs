use super::app_config::LogLevel;
use crate::domain::entities::ProximityMargin;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "albumview",
    version,
    about = "Album gallery client with viewport-deferred image loading",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Render without a viewport; images are never auto-loaded.
    #[arg(long, env = "ALBUMVIEW_HEADLESS", global = true)]
    pub headless: bool,

    /// Proximity margin that triggers loading, e.g. "50% 0px".
    #[arg(long, value_name = "MARGIN", global = true)]
    pub root_margin: Option<ProximityMargin>,

    /// Base URL of the public post feed.
    #[arg(long, env = "ALBUMVIEW_POSTS_BASE_URL", global = true)]
    pub posts_base_url: Option<String>,

    /// Base URL of the customer album API.
    #[arg(long, env = "ALBUMVIEW_ALBUM_BASE_URL", global = true)]
    pub album_base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the public post feed as gallery page data.
    Posts,

    /// Print a customer album as gallery page data.
    Album {
        /// Album id.
        id: String,
    },

    /// Lay out a gallery and report which thumbnails load at a scroll position.
    Preview {
        /// Album id; the public feed is used when omitted.
        id: Option<String>,

        /// Vertical scroll offset in pixels.
        #[arg(long, default_value_t = 0.0)]
        scroll: f64,

        /// Viewport height in pixels.
        #[arg(long)]
        viewport_height: Option<f64>,

        /// Swap loaded thumbnails for their full-size images afterwards.
        #[arg(long)]
        upgrade_raw: bool,
    },
}
