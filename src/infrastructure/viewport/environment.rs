//! Observer selection by host environment.

use std::sync::Arc;

use tracing::debug;

use super::bounds::Bounds;
use super::noop_observer::NoopObserver;
use super::viewport_observer::ViewportObserver;
use crate::domain::entities::ProximityMargin;
use crate::domain::ports::VisibilityObserverPort;

/// Execution context the gallery is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostEnvironment {
    /// A viewport exists and scroll position is known.
    #[default]
    Interactive,
    /// Output is produced without a viewport.
    Headless,
}

impl HostEnvironment {
    /// Picks the environment from the headless switch.
    #[must_use]
    pub const fn from_headless(headless: bool) -> Self {
        if headless {
            Self::Headless
        } else {
            Self::Interactive
        }
    }
}

/// Observer chosen for the current host.
#[derive(Debug, Clone)]
pub enum SelectedObserver {
    /// Geometric observer driven by the host's layout and scroll position.
    Viewport(Arc<ViewportObserver>),
    /// No capability; bindings are skipped.
    Unavailable(NoopObserver),
}

impl SelectedObserver {
    /// Selects the observer implementation for `environment`.
    #[must_use]
    pub fn for_environment(
        environment: HostEnvironment,
        margin: ProximityMargin,
        viewport: Bounds,
    ) -> Self {
        debug!(?environment, margin = %margin, "Selecting visibility observer");
        match environment {
            HostEnvironment::Interactive => {
                Self::Viewport(Arc::new(ViewportObserver::new(margin, viewport)))
            }
            HostEnvironment::Headless => Self::Unavailable(NoopObserver::new()),
        }
    }

    /// Returns the observer as a port.
    #[must_use]
    pub fn port(&self) -> Arc<dyn VisibilityObserverPort> {
        match self {
            Self::Viewport(observer) => Arc::clone(observer) as Arc<dyn VisibilityObserverPort>,
            Self::Unavailable(noop) => Arc::new(*noop),
        }
    }

    /// Reserves ids for `count` elements, returning the first.
    ///
    /// Views sharing one observer get disjoint ranges. Without a viewport
    /// nothing is observed, so every caller may start at 1.
    pub fn reserve_element_ids(&self, count: u64) -> u64 {
        match self {
            Self::Viewport(observer) => observer.reserve_ids(count),
            Self::Unavailable(_) => 1,
        }
    }

    /// Returns the geometric observer when one is available.
    #[must_use]
    pub const fn viewport(&self) -> Option<&Arc<ViewportObserver>> {
        match self {
            Self::Viewport(observer) => Some(observer),
            Self::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(environment: HostEnvironment) -> SelectedObserver {
        SelectedObserver::for_environment(
            environment,
            ProximityMargin::default(),
            Bounds::new(0.0, 0.0, 800.0, 600.0),
        )
    }

    #[test]
    fn test_interactive_selects_viewport_observer() {
        let selected = select(HostEnvironment::from_headless(false));

        assert!(selected.port().is_available());
        assert!(selected.viewport().is_some());
    }

    #[test]
    fn test_headless_selects_noop() {
        let selected = select(HostEnvironment::from_headless(true));
        let port = selected.port();

        assert!(!port.is_available());
        assert!(selected.viewport().is_none());

        let id = crate::domain::entities::ElementId::new(1);
        port.observe(id);
        assert!(!port.is_observing(id));
    }

    #[test]
    fn test_port_shares_viewport_state() {
        let selected = select(HostEnvironment::Interactive);
        let id = crate::domain::entities::ElementId::new(3);

        selected.port().observe(id);

        assert!(selected.viewport().unwrap().is_observing(id));
    }

    #[test]
    fn test_reserved_ranges_follow_capability() {
        let interactive = select(HostEnvironment::Interactive);
        assert_eq!(interactive.reserve_element_ids(4), 1);
        assert_eq!(interactive.clone().reserve_element_ids(4), 5);

        let headless = select(HostEnvironment::Headless);
        assert_eq!(headless.reserve_element_ids(4), 1);
        assert_eq!(headless.reserve_element_ids(4), 1);
    }
}
