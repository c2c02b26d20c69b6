use serde::Deserialize;

use crate::domain::serde_utils::{flexible_bool, string_or_u64};

/// Post from the public feed. Only the media asset is read.
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    /// Media asset; absent for deleted or restricted posts.
    #[serde(default)]
    pub media_asset: Option<MediaAssetResponse>,
}

/// Media asset of a post.
#[derive(Debug, Deserialize)]
pub struct MediaAssetResponse {
    /// Available renditions.
    #[serde(default)]
    pub variants: Option<Vec<VariantResponse>>,
}

/// One rendition of a media asset.
#[derive(Debug, Deserialize)]
pub struct VariantResponse {
    /// Rendition kind, e.g. `720x720` or `original`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Rendition URL.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Customer album endpoint body.
#[derive(Debug, Deserialize)]
pub struct CustomerAlbumResponse {
    /// Image groups; the first group holds the album.
    #[serde(default)]
    pub customer_image: Vec<CustomerImageGroup>,
}

/// Group of album images.
#[derive(Debug, Deserialize)]
pub struct CustomerImageGroup {
    /// Images in upload order.
    #[serde(default)]
    pub images: Vec<CustomerImageResponse>,
}

/// Album image record.
#[derive(Debug, Deserialize)]
pub struct CustomerImageResponse {
    /// Image id.
    #[serde(deserialize_with = "string_or_u64")]
    pub id: u64,
    /// File name of the original.
    #[serde(rename = "imageName")]
    pub image_name: String,
    /// Width of the original.
    pub image_width: u32,
    /// Height of the original.
    pub image_height: u32,
    /// Optimized rendition used as the thumbnail.
    #[serde(rename = "imageOptimized")]
    pub image_optimized: OptimizedImageResponse,
    /// Selection flag, sent as bool or 0/1.
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_ticked: bool,
}

/// Optimized rendition of an album image.
#[derive(Debug, Deserialize)]
pub struct OptimizedImageResponse {
    /// File name of the optimized rendition.
    #[serde(rename = "imageNameOptimized")]
    pub image_name_optimized: String,
    /// Width of the optimized rendition.
    pub image_width: u32,
    /// Height of the optimized rendition.
    pub image_height: u32,
}
