//! Gallery DTOs.

use serde::Serialize;

use crate::domain::entities::AlbumImage;

/// Which feed a gallery is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryRequest {
    /// Public post feed.
    Posts,
    /// Customer album identified by its route parameter.
    Album {
        /// Raw, unvalidated album id.
        id: String,
    },
}

impl GalleryRequest {
    /// Creates an album request.
    #[must_use]
    pub fn album(id: impl Into<String>) -> Self {
        Self::Album { id: id.into() }
    }
}

impl std::fmt::Display for GalleryRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Posts => write!(f, "posts"),
            Self::Album { id } => write!(f, "album {id}"),
        }
    }
}

/// Page data handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryResponse {
    /// Images in display order.
    pub images: Vec<AlbumImage>,
}

impl GalleryResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(images: Vec<AlbumImage>) -> Self {
        Self { images }
    }
}
