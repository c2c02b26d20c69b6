//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Photo-hosting API clients.
pub mod photo_api;
/// Visibility observers.
pub mod viewport;

pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use photo_api::{CustomerAlbumClient, DanbooruClient};
pub use viewport::{Bounds, HostEnvironment, NoopObserver, SelectedObserver, ViewportObserver};
