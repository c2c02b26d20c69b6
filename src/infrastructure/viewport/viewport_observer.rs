//! Geometric visibility observer.
//!
//! The host reports where the viewport is and where each element was laid
//! out; [`ViewportObserver::poll`] then produces intersection entries for
//! observed elements whose state changed since the last report. The first
//! poll after `observe` always reports the element's current state.

use std::collections::{BTreeMap, HashMap};

use parking_lot::Mutex;
use tracing::trace;

use super::bounds::Bounds;
use crate::domain::entities::{ElementId, ProximityMargin};
use crate::domain::ports::{IntersectionEntry, VisibilityObserverPort};

#[derive(Debug, Default)]
struct ObserverState {
    viewport: Bounds,
    layout: HashMap<ElementId, Bounds>,
    /// Last reported intersecting state per observed element.
    observed: BTreeMap<ElementId, Option<bool>>,
    /// Element ids handed out so far.
    allocated_ids: u64,
}

/// Observer computing intersections from reported layout.
#[derive(Debug)]
pub struct ViewportObserver {
    margin: ProximityMargin,
    state: Mutex<ObserverState>,
}

impl ViewportObserver {
    /// Creates an observer for a viewport with the given proximity margin.
    #[must_use]
    pub fn new(margin: ProximityMargin, viewport: Bounds) -> Self {
        Self {
            margin,
            state: Mutex::new(ObserverState {
                viewport,
                ..ObserverState::default()
            }),
        }
    }

    /// Reserves `count` consecutive element ids, returning the first.
    ///
    /// Ids start at 1 and are never handed out twice by one observer.
    pub fn reserve_ids(&self, count: u64) -> u64 {
        let mut state = self.state.lock();
        let first = state.allocated_ids + 1;
        state.allocated_ids = state.allocated_ids.saturating_add(count);
        first
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Bounds {
        self.state.lock().viewport
    }

    /// Replaces the viewport rectangle.
    pub fn set_viewport(&self, viewport: Bounds) {
        self.state.lock().viewport = viewport;
    }

    /// Moves the viewport origin, keeping its size.
    pub fn scroll_to(&self, x: f64, y: f64) {
        let mut state = self.state.lock();
        state.viewport.x = x;
        state.viewport.y = y;
    }

    /// Records where an element was laid out.
    pub fn set_element_bounds(&self, id: ElementId, bounds: Bounds) {
        self.state.lock().layout.insert(id, bounds);
    }

    /// Forgets an element's layout.
    pub fn remove_element(&self, id: ElementId) {
        self.state.lock().layout.remove(&id);
    }

    /// Computes entries for observed elements whose intersecting state changed.
    ///
    /// Elements without reported layout are skipped until they have one.
    #[must_use]
    pub fn poll(&self) -> Vec<IntersectionEntry> {
        self.poll_where(|_| true)
    }

    /// Like [`poll`](Self::poll), restricted to elements accepted by `owns`.
    ///
    /// Changes of other elements stay pending for their owner's poll.
    #[must_use]
    pub fn poll_where(&self, owns: impl Fn(ElementId) -> bool) -> Vec<IntersectionEntry> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let root = state.viewport.expand(&self.margin);

        let mut entries = Vec::new();
        for (id, last) in &mut state.observed {
            if !owns(*id) {
                continue;
            }
            let Some(bounds) = state.layout.get(id) else {
                continue;
            };

            let overlap = root.intersection(bounds);
            let is_intersecting = overlap.is_some();
            if *last == Some(is_intersecting) {
                continue;
            }
            *last = Some(is_intersecting);

            let ratio = match overlap {
                Some(overlap) if bounds.area() > 0.0 => (overlap.area() / bounds.area()).min(1.0),
                Some(_) => 1.0,
                None => 0.0,
            };

            trace!(element = %id, is_intersecting, ratio, "Intersection changed");
            entries.push(IntersectionEntry::new(*id, is_intersecting, ratio));
        }

        entries
    }
}

impl VisibilityObserverPort for ViewportObserver {
    fn is_available(&self) -> bool {
        true
    }

    fn observe(&self, target: ElementId) {
        self.state.lock().observed.entry(target).or_insert(None);
    }

    fn unobserve(&self, target: ElementId) {
        self.state.lock().observed.remove(&target);
    }

    fn is_observing(&self, target: ElementId) -> bool {
        self.state.lock().observed.contains_key(&target)
    }
}
