//! Image source references and per-element load state.

use std::fmt;

/// Identity of a display element bound to the deferred loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Creates an element id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical image source with optional intrinsic size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef {
    url: String,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageRef {
    /// Creates a reference without size information.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
        }
    }

    /// Attaches intrinsic dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Returns the source URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the intrinsic width, if known.
    #[must_use]
    pub const fn width(&self) -> Option<u32> {
        self.width
    }

    /// Returns the intrinsic height, if known.
    #[must_use]
    pub const fn height(&self) -> Option<u32> {
        self.height
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Load state of one element binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Source is buffered; the element has not come near the viewport yet.
    #[default]
    Pending,
    /// Source has been assigned to the element.
    Loaded,
}

impl LoadState {
    /// Returns true once the source has been assigned.
    #[must_use]
    pub const fn is_loaded(self) -> bool {
        matches!(self, Self::Loaded)
    }
}
