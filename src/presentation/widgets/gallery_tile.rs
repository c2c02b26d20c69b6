//! Gallery tile: placeholder element that receives its image lazily.

use parking_lot::RwLock;
use serde::Serialize;

use crate::domain::entities::{AlbumImage, ElementId, ImageRef};
use crate::domain::ports::ImageElementPort;

/// One grid cell showing an album image.
#[derive(Debug)]
pub struct GalleryTile {
    id: ElementId,
    image: AlbumImage,
    src: RwLock<Option<ImageRef>>,
}

impl GalleryTile {
    /// Creates a tile with no source assigned.
    #[must_use]
    pub const fn new(id: ElementId, image: AlbumImage) -> Self {
        Self {
            id,
            image,
            src: RwLock::new(None),
        }
    }

    /// Returns the album image shown by this tile.
    #[must_use]
    pub const fn image(&self) -> &AlbumImage {
        &self.image
    }

    /// Returns the source currently rendered, if any.
    #[must_use]
    pub fn src(&self) -> Option<ImageRef> {
        self.src.read().clone()
    }

    /// Returns true once a source has been assigned.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.src.read().is_some()
    }

    /// Height the tile occupies when scaled to `width`, keeping the
    /// thumbnail's aspect ratio.
    #[must_use]
    pub fn scaled_height(&self, width: f64) -> f64 {
        let thumb = &self.image.thumb;
        if thumb.width == 0 {
            return f64::from(thumb.height);
        }
        width * f64::from(thumb.height) / f64::from(thumb.width)
    }

    /// Serializable view of the tile.
    #[must_use]
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            element: self.id.get(),
            image_id: self.image.id,
            src: self.src().map(|s| s.url().to_string()),
        }
    }
}

impl ImageElementPort for GalleryTile {
    fn id(&self) -> ElementId {
        self.id
    }

    fn assign_source(&self, source: &ImageRef) {
        *self.src.write() = Some(source.clone());
    }
}

/// Rendered state of a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    /// Element id of the tile.
    pub element: u64,
    /// Id of the album image.
    pub image_id: u64,
    /// Assigned source, `None` while pending.
    pub src: Option<String>,
}
