//! Observer for hosts without visibility notifications.

use tracing::trace;

use crate::domain::entities::ElementId;
use crate::domain::ports::VisibilityObserverPort;

/// Observer that never reports anything.
/// Used when rendering headless, where no viewport exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl NoopObserver {
    /// Creates the observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl VisibilityObserverPort for NoopObserver {
    fn is_available(&self) -> bool {
        false
    }

    fn observe(&self, target: ElementId) {
        trace!(element = %target, "Visibility observer unavailable - observe ignored");
    }

    fn unobserve(&self, _target: ElementId) {}

    fn is_observing(&self, _target: ElementId) -> bool {
        false
    }
}
