//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{GalleryRequest, GalleryResponse};
pub use services::DeferredImageLoader;
pub use use_cases::LoadGalleryUseCase;
