//! UI screens.

mod gallery_view;

pub use gallery_view::{GallerySnapshot, GalleryView};
