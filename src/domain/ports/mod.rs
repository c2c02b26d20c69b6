mod album_source_port;
mod image_element_port;
mod visibility_port;

pub use album_source_port::{AlbumSourcePort, PostFeedPort};
pub use image_element_port::ImageElementPort;
pub use visibility_port::{IntersectionEntry, VisibilityObserverPort};
