//! Album data source port definitions.

use async_trait::async_trait;

use crate::domain::entities::{AlbumId, AlbumImage};
use crate::domain::errors::AlbumError;

/// Port for fetching a customer album by id.
#[async_trait]
pub trait AlbumSourcePort: Send + Sync {
    /// Fetches the album's images, newest first.
    async fn fetch_album(&self, album_id: &AlbumId) -> Result<Vec<AlbumImage>, AlbumError>;
}

/// Port for fetching the public post feed.
#[async_trait]
pub trait PostFeedPort: Send + Sync {
    /// Fetches feed images in feed order with sequential ids.
    async fn fetch_posts(&self) -> Result<Vec<AlbumImage>, AlbumError>;
}
