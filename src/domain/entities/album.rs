//! Album entities produced for rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ImageRef;

/// One rendition of an image at a particular resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    /// Absolute URL of the rendition.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageVariant {
    /// Creates a new variant.
    #[must_use]
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Converts the variant into a source reference for an image element.
    #[must_use]
    pub fn to_image_ref(&self) -> ImageRef {
        ImageRef::new(self.url.clone()).with_dimensions(self.width, self.height)
    }
}

/// An image in an album with its thumbnail and full-size renditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumImage {
    /// Image identifier, unique within one album.
    pub id: u64,
    /// Thumbnail rendition shown in the grid.
    pub thumb: ImageVariant,
    /// Original rendition.
    pub raw: ImageVariant,
    /// Whether the image was selected by the album owner.
    #[serde(default)]
    pub is_ticked: bool,
}

impl AlbumImage {
    /// Creates an unticked album image.
    #[must_use]
    pub const fn new(id: u64, thumb: ImageVariant, raw: ImageVariant) -> Self {
        Self {
            id,
            thumb,
            raw,
            is_ticked: false,
        }
    }

    /// Sets the ticked flag.
    #[must_use]
    pub const fn with_ticked(mut self, is_ticked: bool) -> Self {
        self.is_ticked = is_ticked;
        self
    }
}

/// Sorts images so the highest id comes first.
pub fn sort_newest_first(images: &mut [AlbumImage]) {
    images.sort_by(|a, b| b.id.cmp(&a.id));
}

/// Route identifier of a customer album.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    /// Creates an album id, rejecting blank values and values that
    /// would change the request path.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        if value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '?' | '#' | '%'))
        {
            return None;
        }

        Some(Self(value))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
