//! Display element port.

use crate::domain::entities::{ElementId, ImageRef};

/// A display element whose image source is assigned by the deferred loader.
pub trait ImageElementPort: Send + Sync {
    /// Stable identity of the element.
    fn id(&self) -> ElementId;

    /// Replaces the element's rendered source.
    ///
    /// Called with the loader's registry locked; implementations must not
    /// call back into the loader.
    fn assign_source(&self, source: &ImageRef);
}
