//! Domain error types.

mod album_error;

pub use album_error::AlbumError;
