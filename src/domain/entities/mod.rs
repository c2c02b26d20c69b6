//! Domain entity definitions.

mod album;
mod image_ref;
mod proximity_margin;

pub use album::{AlbumId, AlbumImage, ImageVariant, sort_newest_first};
pub use image_ref::{ElementId, ImageRef, LoadState};
pub use proximity_margin::{MarginLength, MarginParseError, ProximityMargin};
