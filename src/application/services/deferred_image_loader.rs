//! Deferred image loading keyed on viewport proximity.
//!
//! Each bound element gets one registry record holding its buffered source
//! and load state. The source is assigned the first time the observer reports
//! the element as intersecting the margin-expanded viewport; the watcher is
//! released at that point. Later source updates are applied straight to the
//! element without waiting for another visibility event.
//!
//! Assignments happen under the registry lock, so a source swap racing a
//! first load always leaves the element on the latest source.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::domain::entities::{ElementId, ImageRef, LoadState};
use crate::domain::ports::{ImageElementPort, IntersectionEntry, VisibilityObserverPort};

struct Binding {
    element: Arc<dyn ImageElementPort>,
    source: ImageRef,
    state: LoadState,
}

/// Registry of element bindings driven by visibility notifications.
pub struct DeferredImageLoader {
    observer: Arc<dyn VisibilityObserverPort>,
    bindings: Mutex<HashMap<ElementId, Binding>>,
}

impl DeferredImageLoader {
    /// Creates a loader on top of the given observer capability.
    #[must_use]
    pub fn new(observer: Arc<dyn VisibilityObserverPort>) -> Self {
        Self {
            observer,
            bindings: Mutex::new(HashMap::new()),
        }
    }

    /// Returns whether bindings can ever load in this host.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.observer.is_available()
    }

    /// Binds an element, deferring `source` until the element nears the viewport.
    ///
    /// Without an observer capability this does nothing: the element never
    /// auto-loads and the caller must assign its source some other way.
    /// Binding an element that is already bound replaces the old binding.
    pub fn bind(&self, element: Arc<dyn ImageElementPort>, source: ImageRef) {
        let id = element.id();

        if !self.observer.is_available() {
            trace!(element = %id, "No visibility observer, skipping lazy-load binding");
            return;
        }

        let mut bindings = self.bindings.lock();
        if bindings.remove(&id).is_some() {
            debug!(element = %id, "Replacing existing binding");
            self.observer.unobserve(id);
        }

        bindings.insert(
            id,
            Binding {
                element,
                source,
                state: LoadState::Pending,
            },
        );
        self.observer.observe(id);

        trace!(element = %id, "Element bound");
    }

    /// Handles a batch of visibility notifications.
    ///
    /// Returns the elements that transitioned to [`LoadState::Loaded`].
    pub fn on_intersection(&self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut bindings = self.bindings.lock();
        let mut loaded = Vec::new();

        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some(binding) = bindings.get_mut(&entry.target) else {
                continue;
            };
            if binding.state.is_loaded() {
                continue;
            }

            debug!(element = %entry.target, src = %binding.source, "Loading image");
            binding.element.assign_source(&binding.source);
            binding.state = LoadState::Loaded;
            self.observer.unobserve(entry.target);
            loaded.push(entry.target);
        }

        loaded
    }

    /// Replaces an element's source.
    ///
    /// Pending bindings buffer the new source for the visibility event.
    /// Loaded bindings re-assign it immediately.
    pub fn update(&self, id: ElementId, source: ImageRef) {
        let mut bindings = self.bindings.lock();
        let Some(binding) = bindings.get_mut(&id) else {
            trace!(element = %id, "Update for unbound element ignored");
            return;
        };

        if binding.source == source {
            return;
        }

        if binding.state.is_loaded() {
            debug!(element = %id, src = %source, "Swapping source of loaded image");
            binding.element.assign_source(&source);
        }
        binding.source = source;
    }

    /// Releases an element's binding. Idempotent.
    pub fn unbind(&self, id: ElementId) {
        let removed = self.bindings.lock().remove(&id);
        self.observer.unobserve(id);

        if removed.is_some() {
            trace!(element = %id, "Element unbound");
        }
    }

    /// Returns the load state of a bound element.
    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<LoadState> {
        self.bindings.lock().get(&id).map(|b| b.state)
    }

    /// Returns whether the element has a binding.
    #[must_use]
    pub fn is_bound(&self, id: ElementId) -> bool {
        self.bindings.lock().contains_key(&id)
    }

    /// Number of live bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.lock().len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for DeferredImageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredImageLoader")
            .field("enabled", &self.is_enabled())
            .field("bindings", &self.len())
            .finish_non_exhaustive()
    }
}
