//! Viewport visibility observers.

pub mod bounds;
pub mod environment;
pub mod noop_observer;
pub mod viewport_observer;

pub use bounds::Bounds;
pub use environment::{HostEnvironment, SelectedObserver};
pub use noop_observer::NoopObserver;
pub use viewport_observer::ViewportObserver;
