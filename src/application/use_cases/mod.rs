//! Use case implementations.

mod load_gallery_use_case;

pub use load_gallery_use_case::LoadGalleryUseCase;
