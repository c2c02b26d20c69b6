//! Visibility observation port.

use crate::domain::entities::ElementId;

/// A change in an observed element's intersection with the expanded viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Observed element.
    pub target: ElementId,
    /// Whether the element overlaps the viewport plus proximity margin.
    pub is_intersecting: bool,
    /// Visible fraction of the element, in `0.0..=1.0`.
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(target: ElementId, is_intersecting: bool, intersection_ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            intersection_ratio,
        }
    }
}

/// Capability to watch elements for viewport proximity.
///
/// Hosts without the capability provide an implementation whose
/// [`is_available`](Self::is_available) returns `false`; callers skip
/// registration entirely in that case.
pub trait VisibilityObserverPort: Send + Sync {
    /// Returns whether the host can deliver visibility notifications.
    fn is_available(&self) -> bool;

    /// Starts watching an element. Watching an already watched element is a no-op.
    fn observe(&self, target: ElementId);

    /// Stops watching an element. Safe to call for elements never observed.
    fn unobserve(&self, target: ElementId);

    /// Returns whether the element is currently watched.
    fn is_observing(&self, target: ElementId) -> bool;
}
