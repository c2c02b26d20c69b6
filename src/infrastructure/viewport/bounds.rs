//! Axis-aligned rectangles in viewport coordinates.

use crate::domain::entities::ProximityMargin;

/// Rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width; never negative.
    pub width: f64,
    /// Height; never negative.
    pub height: f64,
}

impl Bounds {
    /// Creates a rectangle. Negative sizes are clamped to zero.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grows the rectangle by a margin resolved against its own size.
    #[must_use]
    pub fn expand(&self, margin: &ProximityMargin) -> Self {
        let top = margin.top.resolve(self.height);
        let bottom = margin.bottom.resolve(self.height);
        let left = margin.left.resolve(self.width);
        let right = margin.right.resolve(self.width);

        Self::new(
            self.x - left,
            self.y - top,
            self.width + left + right,
            self.height + top + bottom,
        )
    }

    /// Overlap with another rectangle.
    ///
    /// Returns `None` when the rectangles are disjoint. Edge-adjacent
    /// rectangles yield a zero-sized overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }

        Some(Self::new(left, top, right - left, bottom - top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MarginLength;

    #[test]
    fn test_expand_by_half_viewport() {
        let viewport = Bounds::new(0.0, 1000.0, 400.0, 800.0);
        let expanded = viewport.expand(&ProximityMargin::default());

        assert_eq!(expanded, Bounds::new(0.0, 600.0, 400.0, 1600.0));
    }

    #[test]
    fn test_expand_pixels_horizontal() {
        let viewport = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let margin =
            ProximityMargin::symmetric(MarginLength::Pixels(0.0), MarginLength::Pixels(10.0));

        assert_eq!(viewport.expand(&margin), Bounds::new(-10.0, 0.0, 120.0, 100.0));
    }

    #[test]
    fn test_intersection() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let b = Bounds::new(50.0, 80.0, 100.0, 100.0);

        assert_eq!(a.intersection(&b), Some(Bounds::new(50.0, 80.0, 50.0, 20.0)));
    }

    #[test]
    fn test_disjoint_and_adjacent() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(a.intersection(&Bounds::new(0.0, 101.0, 10.0, 10.0)), None);
        assert_eq!(
            a.intersection(&Bounds::new(0.0, 100.0, 10.0, 10.0)),
            Some(Bounds::new(0.0, 100.0, 10.0, 0.0))
        );
    }
}
