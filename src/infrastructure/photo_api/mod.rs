//! Photo-hosting API adapters.
//!
//! This module provides:
//! - The public post feed client
//! - The customer album client
//! - Payload-to-entity transforms shared by both

use std::time::Duration;

pub mod customer;
pub mod danbooru;
pub mod dto;
pub mod http;
pub mod transform;

pub use customer::CustomerAlbumClient;
pub use danbooru::DanbooruClient;
pub use http::build_client;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("albumview/", env!("CARGO_PKG_VERSION"));

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
