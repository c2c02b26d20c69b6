mod gallery_tile;

pub use gallery_tile::{GalleryTile, TileSnapshot};
