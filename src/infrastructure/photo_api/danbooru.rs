//! Public post feed client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::dto::PostResponse;
use super::http::{build_client, get_json};
use super::transform::posts_to_images;
use super::{DEFAULT_TIMEOUT, USER_AGENT};
use crate::domain::entities::AlbumImage;
use crate::domain::errors::AlbumError;
use crate::domain::ports::PostFeedPort;

/// Default feed host.
pub const DANBOORU_BASE: &str = "https://danbooru.donmai.us";
/// Default number of posts requested.
pub const DEFAULT_LIMIT: u32 = 200;
/// Default tag filter, restricting the feed to general-rated posts.
pub const DEFAULT_TAGS: &str = "rating:general";

/// Client for `GET /posts.json`.
#[derive(Debug, Clone)]
pub struct DanbooruClient {
    client: Client,
    base_url: String,
    limit: u32,
    tags: String,
}

impl DanbooruClient {
    /// Creates client against the default host.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, AlbumError> {
        Self::with_base_url(DANBOORU_BASE)
    }

    /// Creates client with custom base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, AlbumError> {
        Ok(Self::with_client(
            build_client(USER_AGENT, DEFAULT_TIMEOUT)?,
            base_url,
        ))
    }

    /// Creates client reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            limit: DEFAULT_LIMIT,
            tags: DEFAULT_TAGS.to_string(),
        }
    }

    /// Sets the number of posts requested.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the tag query.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

#[async_trait]
impl PostFeedPort for DanbooruClient {
    async fn fetch_posts(&self) -> Result<Vec<AlbumImage>, AlbumError> {
        let url = format!("{}/posts.json", self.base_url.trim_end_matches('/'));
        let query = [("limit", self.limit.to_string()), ("tags", self.tags.clone())];

        let posts: Vec<PostResponse> =
            get_json(&self.client, &url, &query, AlbumError::from_feed_status).await?;
        let images = posts_to_images(&posts);

        debug!(posts = posts.len(), images = images.len(), "Post feed transformed");

        Ok(images)
    }
}
