//! Reshapes API payloads into render-ready album images.

use tracing::debug;

use super::dto::{CustomerAlbumResponse, PostResponse, VariantResponse};
use crate::domain::entities::{AlbumImage, ImageVariant, sort_newest_first};

/// Variant kind used as the grid thumbnail.
pub const THUMB_VARIANT: &str = "720x720";
/// Variant kind used as the full-size image.
pub const RAW_VARIANT: &str = "original";

fn find_variant<'a>(variants: &'a [VariantResponse], kind: &str) -> Option<&'a VariantResponse> {
    variants.iter().find(|v| v.kind == kind)
}

fn to_variant(variant: &VariantResponse) -> ImageVariant {
    ImageVariant::new(variant.url.clone(), variant.width, variant.height)
}

/// Converts feed posts into album images with sequential ids starting at 1.
///
/// Posts without variants, or without both a thumbnail and an original, are
/// skipped and do not consume an id.
#[must_use]
pub fn posts_to_images(posts: &[PostResponse]) -> Vec<AlbumImage> {
    let images: Vec<AlbumImage> = posts
        .iter()
        .filter_map(|post| {
            let variants = post.media_asset.as_ref()?.variants.as_deref()?;
            let thumb = find_variant(variants, THUMB_VARIANT)?;
            let raw = find_variant(variants, RAW_VARIANT)?;
            Some((to_variant(thumb), to_variant(raw)))
        })
        .zip(1..)
        .map(|((thumb, raw), id)| AlbumImage::new(id, thumb, raw))
        .collect();

    if images.len() < posts.len() {
        debug!(
            skipped = posts.len() - images.len(),
            "Skipped posts without usable variants"
        );
    }

    images
}

fn join_url(base: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

/// Converts a customer album body into album images, newest first.
///
/// Thumbnail URLs are built from `thumb_base` and the optimized file name,
/// full-size URLs from `raw_base` and the original file name.
#[must_use]
pub fn customer_album_to_images(
    response: &CustomerAlbumResponse,
    thumb_base: &str,
    raw_base: &str,
) -> Vec<AlbumImage> {
    let Some(group) = response.customer_image.first() else {
        return Vec::new();
    };

    let mut images: Vec<AlbumImage> = group
        .images
        .iter()
        .map(|image| {
            let optimized = &image.image_optimized;
            AlbumImage::new(
                image.id,
                ImageVariant::new(
                    join_url(thumb_base, &optimized.image_name_optimized),
                    optimized.image_width,
                    optimized.image_height,
                ),
                ImageVariant::new(
                    join_url(raw_base, &image.image_name),
                    image.image_width,
                    image.image_height,
                ),
            )
            .with_ticked(image.is_ticked)
        })
        .collect();

    sort_newest_first(&mut images);
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn posts_fixture() -> Vec<PostResponse> {
        serde_json::from_value(json!([
            {
                "id": 9001,
                "media_asset": {
                    "variants": [
                        {"type": "180x180", "url": "https://cdn.test/180/a.jpg", "width": 180, "height": 120},
                        {"type": "720x720", "url": "https://cdn.test/720/a.webp", "width": 720, "height": 480},
                        {"type": "original", "url": "https://cdn.test/orig/a.png", "width": 3000, "height": 2000}
                    ]
                }
            },
            {
                "id": 9002,
                "media_asset": {
                    "variants": [
                        {"type": "720x720", "url": "https://cdn.test/720/b.webp", "width": 540, "height": 720},
                        {"type": "original", "url": "https://cdn.test/orig/b.jpg", "width": 1500, "height": 2000}
                    ]
                }
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_posts_pick_thumb_and_original() {
        let images = posts_to_images(&posts_fixture());

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, 1);
        assert_eq!(images[0].thumb.url, "https://cdn.test/720/a.webp");
        assert_eq!(images[0].thumb.width, 720);
        assert_eq!(images[0].raw.url, "https://cdn.test/orig/a.png");
        assert_eq!(images[0].raw.height, 2000);
        assert_eq!(images[1].id, 2);
        assert_eq!(images[1].thumb.url, "https://cdn.test/720/b.webp");
        assert_eq!(images[1].raw.url, "https://cdn.test/orig/b.jpg");
        assert!(images.iter().all(|i| !i.is_ticked));
    }

    #[test]
    fn test_posts_without_variants_are_skipped() {
        let posts: Vec<PostResponse> = serde_json::from_value(json!([
            {"id": 1},
            {"id": 2, "media_asset": {}},
            {"id": 3, "media_asset": {"variants": [
                {"type": "720x720", "url": "https://cdn.test/720/c.jpg", "width": 720, "height": 720},
                {"type": "original", "url": "https://cdn.test/orig/c.jpg", "width": 900, "height": 900}
            ]}},
            {"id": 4, "media_asset": {"variants": [
                {"type": "original", "url": "https://cdn.test/orig/d.jpg", "width": 900, "height": 900}
            ]}}
        ]))
        .unwrap();

        let images = posts_to_images(&posts);

        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, 1);
        assert_eq!(images[0].raw.url, "https://cdn.test/orig/c.jpg");
    }

    fn customer_fixture() -> CustomerAlbumResponse {
        let record = |id: u64, ticked: serde_json::Value| {
            json!({
                "id": id,
                "imageName": format!("img_{id}.jpg"),
                "image_width": 4000,
                "image_height": 3000,
                "imageOptimized": {
                    "imageNameOptimized": format!("img_{id}_opt.webp"),
                    "image_width": 800,
                    "image_height": 600
                },
                "is_ticked": ticked
            })
        };

        serde_json::from_value(json!({
            "customer_image": [
                {"images": [record(5, json!(1)), record(1, json!(false)), record(3, json!(0))]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_customer_album_sorted_descending() {
        let images = customer_album_to_images(
            &customer_fixture(),
            "https://img.test/optimized/",
            "https://img.test/original",
        );

        let ids: Vec<u64> = images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn test_customer_album_urls_and_flags() {
        let images = customer_album_to_images(
            &customer_fixture(),
            "https://img.test/optimized/",
            "https://img.test/original",
        );

        let newest = &images[0];
        assert_eq!(newest.thumb.url, "https://img.test/optimized/img_5_opt.webp");
        assert_eq!((newest.thumb.width, newest.thumb.height), (800, 600));
        assert_eq!(newest.raw.url, "https://img.test/original/img_5.jpg");
        assert_eq!((newest.raw.width, newest.raw.height), (4000, 3000));
        assert!(newest.is_ticked);
        assert!(!images[1].is_ticked);
    }

    #[test]
    fn test_customer_album_empty_groups() {
        let response: CustomerAlbumResponse =
            serde_json::from_value(json!({"customer_image": []})).unwrap();

        assert!(customer_album_to_images(&response, "a", "b").is_empty());
    }
}
