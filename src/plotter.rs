//! Host-facing layer contract.
//!
//! A chart is a stack of layers. The host asks each layer for its data
//! extent ([`DataRanger`]) to pick axis ranges, for label boxes
//! ([`GlyphBoxer`]) to reserve margins, and finally to draw itself
//! ([`Plotter`]) through two per-axis transforms that encode the current
//! axis scaling, pan and zoom.

use num_traits::Float;

use crate::canvas::Canvas;
use crate::geom::Rectangle;

/// A layer that can draw itself onto a canvas.
pub trait Plotter<F> {
    /// Draw onto `canvas`, mapping data-space X through `tr_x` and
    /// data-space Y through `tr_y`.
    fn plot<C: Canvas<F>>(
        &self,
        canvas: &mut C,
        tr_x: impl Fn(F) -> F,
        tr_y: impl Fn(F) -> F,
    );
}

/// A layer that reports the data-space area it covers.
pub trait DataRanger<F> {
    /// Data-space bounds of the layer, as the layer stores them.
    fn data_range(&self) -> DataRange<F>;
}

/// A layer that reports canvas-space boxes around its glyphs.
pub trait GlyphBoxer<F> {
    /// Canvas-space boxes around the layer's glyphs; empty when it has none.
    fn glyph_boxes(&self) -> &[GlyphBox<F>];
}

/// Data-space extent of a layer.
///
/// Fields are reported as the layer stores them; `x_min > x_max` is
/// possible. Call [`normalized`](Self::normalized) before comparing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DataRange<F> {
    pub x_min: F,
    pub x_max: F,
    pub y_min: F,
    pub y_max: F,
}

impl<F: Float> DataRange<F> {
    /// Create a range from its four bounds, unchanged.
    pub const fn new(x_min: F, x_max: F, y_min: F, y_max: F) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Reorder so `x_min <= x_max` and `y_min <= y_max`.
    ///
    /// A NaN bound makes both bounds of its axis NaN.
    pub fn normalized(self) -> Self {
        Self {
            x_min: nan_min(self.x_min, self.x_max),
            x_max: nan_max(self.x_min, self.x_max),
            y_min: nan_min(self.y_min, self.y_max),
            y_max: nan_max(self.y_min, self.y_max),
        }
    }

    /// Unsigned X extent.
    pub fn width(&self) -> F {
        (self.x_max - self.x_min).abs()
    }

    /// Unsigned Y extent.
    pub fn height(&self) -> F {
        (self.y_max - self.y_min).abs()
    }

    /// Smallest normalized range covering both `self` and `other`.
    ///
    /// NaN propagates per axis: if either range has a NaN X bound, both X
    /// bounds of the result are NaN.
    pub fn union(self, other: Self) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        Self {
            x_min: nan_min(a.x_min, b.x_min),
            x_max: nan_max(a.x_max, b.x_max),
            y_min: nan_min(a.y_min, b.y_min),
            y_max: nan_max(a.y_max, b.y_max),
        }
    }

    /// Fold the extents of every layer. `None` when there are no layers.
    ///
    /// A layer with a NaN bound poisons that axis of the result instead of
    /// silently dropping out, so the host can detect it with `is_nan`.
    ///
    /// ```
    /// use zenplot::{DataRange, DataRanger};
    ///
    /// struct Fixed(DataRange<f64>);
    /// impl DataRanger<f64> for Fixed {
    ///     fn data_range(&self) -> DataRange<f64> {
    ///         self.0
    ///     }
    /// }
    ///
    /// let layers = [
    ///     Fixed(DataRange::new(0.0, 10.0, 0.0, 5.0)),
    ///     Fixed(DataRange::new(20.0, -3.0, 1.0, 2.0)),
    /// ];
    /// let all = DataRange::union_all(layers.iter().map(|l| l.data_range())).unwrap();
    /// assert_eq!(all, DataRange::new(-3.0, 20.0, 0.0, 5.0));
    /// ```
    pub fn union_all(ranges: impl IntoIterator<Item = Self>) -> Option<Self> {
        ranges
            .into_iter()
            .map(Self::normalized)
            .reduce(Self::union)
    }
}

/// `min` that returns NaN if either side is NaN.
fn nan_min<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        F::nan()
    } else {
        a.min(b)
    }
}

/// `max` that returns NaN if either side is NaN.
fn nan_max<F: Float>(a: F, b: F) -> F {
    if a.is_nan() || b.is_nan() {
        F::nan()
    } else {
        a.max(b)
    }
}

/// Canvas-space box around a glyph anchored at a data-space position.
///
/// `rect` is relative to the canvas location of `(x, y)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphBox<F> {
    pub x: F,
    pub y: F,
    pub rect: Rectangle<F>,
}
