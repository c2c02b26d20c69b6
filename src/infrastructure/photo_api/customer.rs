//! Customer album client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::dto::CustomerAlbumResponse;
use super::http::{build_client, get_json};
use super::transform::customer_album_to_images;
use super::{DEFAULT_TIMEOUT, USER_AGENT};
use crate::domain::entities::{AlbumId, AlbumImage};
use crate::domain::errors::AlbumError;
use crate::domain::ports::AlbumSourcePort;

/// Client for `GET /customer/image/{albumId}`.
#[derive(Debug, Clone)]
pub struct CustomerAlbumClient {
    client: Client,
    base_url: String,
    thumb_base: String,
    raw_base: String,
}

impl CustomerAlbumClient {
    /// Creates client for the given API and image hosts.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        base_url: impl Into<String>,
        thumb_base: impl Into<String>,
        raw_base: impl Into<String>,
    ) -> Result<Self, AlbumError> {
        Ok(Self::with_client(
            build_client(USER_AGENT, DEFAULT_TIMEOUT)?,
            base_url,
            thumb_base,
            raw_base,
        ))
    }

    /// Creates client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        thumb_base: impl Into<String>,
        raw_base: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            thumb_base: thumb_base.into(),
            raw_base: raw_base.into(),
        }
    }
}

#[async_trait]
impl AlbumSourcePort for CustomerAlbumClient {
    async fn fetch_album(&self, album_id: &AlbumId) -> Result<Vec<AlbumImage>, AlbumError> {
        let url = format!(
            "{}/customer/image/{}",
            self.base_url.trim_end_matches('/'),
            album_id
        );

        let response: CustomerAlbumResponse =
            get_json(&self.client, &url, &[], AlbumError::from_status).await?;
        let images = customer_album_to_images(&response, &self.thumb_base, &self.raw_base);

        debug!(album = %album_id, images = images.len(), "Album transformed");

        Ok(images)
    }
}
