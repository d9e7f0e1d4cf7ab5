//! Canvas-space points and rectangles.
//!
//! A [`Rectangle`] is the pair of corners produced by pushing a data-space
//! rectangle through a host's axis transforms. Nothing here reorders the
//! corners: screen-space transforms usually flip Y, so `min.y > max.y` is
//! a normal, valid state. Use [`Rectangle::normalized`] when a canvas
//! needs `min <= max` on both axes.
//!
//! ```text
//!     data space                 canvas space (Y flipped)
//!
//!     max ┌──────┐                min ┌──────┐ ▲ y grows down
//!         │      │         ──►        │      │
//!         └──────┘ min                └──────┘ max
//! ```

use num_traits::Float;

/// A point in canvas space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
}

impl<F> Point<F> {
    /// Create a new point.
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by two corners.
///
/// `min` and `max` name the corners the rectangle was built from, not a
/// numeric ordering. Either axis may be inverted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rectangle<F> {
    pub min: Point<F>,
    pub max: Point<F>,
}

impl<F: Float> Rectangle<F> {
    /// Create a rectangle from its two corners, unchanged.
    pub const fn new(min: Point<F>, max: Point<F>) -> Self {
        Self { min, max }
    }

    /// Signed extent along X (`max.x - min.x`). Negative when inverted.
    pub fn width(&self) -> F {
        self.max.x - self.min.x
    }

    /// Signed extent along Y (`max.y - min.y`). Negative when inverted.
    pub fn height(&self) -> F {
        self.max.y - self.min.y
    }

    /// Whether `min.x > max.x`.
    pub fn is_inverted_x(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Whether `min.y > max.y`.
    pub fn is_inverted_y(&self) -> bool {
        self.min.y > self.max.y
    }

    /// Reorder corners so `min <= max` on both axes.
    ///
    /// The covered area is unchanged. A canvas that cannot draw an
    /// inverted rectangle should call this, and flip the image itself if
    /// it wants to honour the mirroring the inversion implies.
    pub fn normalized(self) -> Self {
        Self {
            min: Point::new(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: Point::new(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Whether `p` lies inside the rectangle, edges included.
    /// Works for inverted rectangles.
    pub fn contains(&self, p: Point<F>) -> bool {
        let n = self.normalized();
        p.x >= n.min.x && p.x <= n.max.x && p.y >= n.min.y && p.y <= n.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_extent() {
        let r = Rectangle::new(Point::new(10.0, 80.0), Point::new(110.0, 30.0));
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), -50.0);
        assert!(!r.is_inverted_x());
        assert!(r.is_inverted_y());
    }

    #[test]
    fn normalized_reorders_both_axes() {
        let r = Rectangle::new(Point::new(5.0_f32, 9.0), Point::new(1.0, 2.0));
        let n = r.normalized();
        assert_eq!(n.min, Point::new(1.0, 2.0));
        assert_eq!(n.max, Point::new(5.0, 9.0));
        assert!(!n.is_inverted_x());
        assert!(!n.is_inverted_y());
    }

    #[test]
    fn normalized_is_noop_when_ordered() {
        let r = Rectangle::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn contains_handles_inversion() {
        let r = Rectangle::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(-0.5, 5.0)));
    }
}
