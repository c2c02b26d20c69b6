//! Albumview - album gallery client with viewport-deferred image loading.
//!
//! This crate fetches image listings from a public post feed or a customer
//! album API, normalizes them into gallery entries, and defers assigning
//! each thumbnail until its tile comes near the viewport.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the gallery view.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "albumview";
