//! Application services.

mod deferred_image_loader;

pub use deferred_image_loader::DeferredImageLoader;
