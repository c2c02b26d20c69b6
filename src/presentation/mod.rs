//! Presentation layer: gallery screen and its tiles.

/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::{GallerySnapshot, GalleryView};
pub use widgets::{GalleryTile, TileSnapshot};
