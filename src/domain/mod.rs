//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{AlbumId, AlbumImage, ElementId, ImageRef, ImageVariant, LoadState};
pub use errors::AlbumError;
pub use ports::{AlbumSourcePort, ImageElementPort, PostFeedPort, VisibilityObserverPort};
