//! Gallery loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{GalleryRequest, GalleryResponse};
use crate::domain::entities::AlbumId;
use crate::domain::errors::AlbumError;
use crate::domain::ports::{AlbumSourcePort, PostFeedPort};

/// Loads gallery page data from one of the configured feeds.
#[derive(Clone)]
pub struct LoadGalleryUseCase {
    posts: Arc<dyn PostFeedPort>,
    albums: Arc<dyn AlbumSourcePort>,
}

impl LoadGalleryUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(posts: Arc<dyn PostFeedPort>, albums: Arc<dyn AlbumSourcePort>) -> Self {
        Self { posts, albums }
    }

    /// Executes the request. Every request is attempted once.
    ///
    /// # Errors
    /// Returns `Validation` for a blank or malformed album id, otherwise the
    /// failure classified by the data source.
    pub async fn execute(&self, request: GalleryRequest) -> Result<GalleryResponse, AlbumError> {
        debug!(request = %request, "Loading gallery");

        let images = match &request {
            GalleryRequest::Posts => self.posts.fetch_posts().await,
            GalleryRequest::Album { id } => {
                let album_id = AlbumId::new(id.as_str()).ok_or_else(|| {
                    warn!(raw_id = %id, "Rejected album id");
                    AlbumError::validation("album id is missing or malformed")
                })?;
                self.albums.fetch_album(&album_id).await
            }
        }
        .map_err(|e| {
            warn!(request = %request, status = e.status(), error = %e, "Gallery load failed");
            e
        })?;

        info!(request = %request, count = images.len(), "Gallery loaded");

        Ok(GalleryResponse::new(images))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AlbumImage, ImageVariant};
    use crate::domain::ports::mocks::{MockAlbumSource, MockPostFeed};

    fn image(id: u64) -> AlbumImage {
        AlbumImage::new(
            id,
            ImageVariant::new(format!("https://cdn.test/t/{id}.jpg"), 720, 720),
            ImageVariant::new(format!("https://cdn.test/o/{id}.jpg"), 2048, 2048),
        )
    }

    #[tokio::test]
    async fn test_load_album() {
        let albums = Arc::new(MockAlbumSource::with_images(vec![image(5), image(3)]));
        let use_case = LoadGalleryUseCase::new(
            Arc::new(MockPostFeed::with_images(Vec::new())),
            albums.clone(),
        );

        let response = use_case.execute(GalleryRequest::album(" 42 ")).await.unwrap();

        assert_eq!(response.images.len(), 2);
        assert_eq!(albums.requested(), vec!["42".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_album_id_is_validation_error() {
        let albums = Arc::new(MockAlbumSource::with_images(vec![image(1)]));
        let use_case = LoadGalleryUseCase::new(
            Arc::new(MockPostFeed::with_images(Vec::new())),
            albums.clone(),
        );

        let result = use_case.execute(GalleryRequest::album("")).await;

        assert!(matches!(result, Err(AlbumError::Validation { .. })));
        assert_eq!(result.unwrap_err().status(), 400);
        assert!(albums.requested().is_empty());
    }

    #[tokio::test]
    async fn test_not_found_propagates() {
        let use_case = LoadGalleryUseCase::new(
            Arc::new(MockPostFeed::with_images(Vec::new())),
            Arc::new(MockAlbumSource::failing(AlbumError::NotFound)),
        );

        let result = use_case.execute(GalleryRequest::album("7")).await;

        assert_eq!(result, Err(AlbumError::NotFound));
    }

    #[tokio::test]
    async fn test_load_posts() {
        let use_case = LoadGalleryUseCase::new(
            Arc::new(MockPostFeed::with_images(vec![image(1), image(2)])),
            Arc::new(MockAlbumSource::failing(AlbumError::Forbidden)),
        );

        let response = use_case.execute(GalleryRequest::Posts).await.unwrap();

        let ids: Vec<u64> = response.images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_posts_upstream_error_propagates() {
        let use_case = LoadGalleryUseCase::new(
            Arc::new(MockPostFeed::failing(AlbumError::upstream(500, "Internal Server Error"))),
            Arc::new(MockAlbumSource::with_images(Vec::new())),
        );

        let result = use_case.execute(GalleryRequest::Posts).await;

        assert_eq!(
            result,
            Err(AlbumError::upstream(500, "Internal Server Error"))
        );
    }
}
