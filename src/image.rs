//! Raster image plotter.
//!
//! [`ImagePlacement`] stretches a pixel grid over a data-space rectangle.
//! Column `c` starts at `x_min + c·dx` and row `r` at `y_min + r·dy`, where
//! the steps are the absolute data span divided by the pixel count.
//!
//! # Example
//!
//! ```
//! use zenplot::{ImagePlacement, PixelBuffer};
//!
//! let img = PixelBuffer::from_fn(10, 5, |c, r| (c + r) as u8);
//! let placement = ImagePlacement::new(&img, 0.0, 0.0, 100.0, 50.0);
//!
//! assert_eq!(placement.dx(), 10.0);
//! assert_eq!(placement.x_at(9), Ok(90.0));
//! assert!(placement.x_at(10).is_err());
//! ```
//!
//! # Reversed bounds
//!
//! Bounds are stored exactly as given. With `x_min > x_max` the step stays
//! positive and the lookup still starts at `x_min`, so coordinates climb
//! past the visual range instead of walking down it:
//!
//! ```
//! use zenplot::{ImagePlacement, PixelBuffer};
//!
//! let img = PixelBuffer::from_fn(10, 5, |_, _| 0u8);
//! let placement = ImagePlacement::new(&img, 100.0, 50.0, 0.0, 0.0);
//! assert_eq!(placement.x_at(1), Ok(110.0));
//! ```

use num_traits::{Float, NumCast};

use crate::canvas::Canvas;
use crate::error::{Axis, PlacementError};
use crate::geom::{Point, Rectangle};
use crate::grid::PixelGrid;
use crate::plotter::{DataRange, DataRanger, GlyphBox, GlyphBoxer, Plotter};

/// A pixel grid placed into a data-space rectangle.
///
/// Immutable once built. `G` is usually a reference to an image owned
/// elsewhere; any [`PixelGrid`] works, including `&T`.
#[derive(Clone, Debug)]
pub struct ImagePlacement<G, F = f64> {
    grid: G,
    columns: u32,
    rows: u32,
    x_min: F,
    x_max: F,
    dx: F,
    y_min: F,
    y_max: F,
    dy: F,
}

impl<G: PixelGrid, F: Float> ImagePlacement<G, F> {
    /// Place `grid` inside the rectangle spanned by `(x_min, y_min)` and
    /// `(x_max, y_max)` in data space.
    ///
    /// Never fails. Zero-area bounds give a zero step; a grid with zero
    /// columns or rows gives an infinite step, or NaN when the span is
    /// zero as well. Use [`try_new`](Self::try_new) to reject both.
    pub fn new(grid: G, x_min: F, y_min: F, x_max: F, y_max: F) -> Self {
        let columns = grid.columns();
        let rows = grid.rows();
        let dx = (x_max - x_min).abs() / to_float::<F>(columns);
        let dy = (y_max - y_min).abs() / to_float::<F>(rows);

        #[cfg(feature = "tracing")]
        {
            if columns == 0 || rows == 0 || x_min == x_max || y_min == y_max {
                tracing::debug!(columns, rows, "degenerate image placement");
            }
        }

        Self {
            grid,
            columns,
            rows,
            x_min,
            x_max,
            dx,
            y_min,
            y_max,
            dy,
        }
    }

    /// Like [`new`](Self::new), but rejects geometry that cannot map
    /// pixels to distinct data coordinates.
    ///
    /// Checks, in order: zero columns or rows
    /// ([`ZeroGridDimension`](PlacementError::ZeroGridDimension)), NaN or
    /// infinite bounds ([`NonFiniteBounds`](PlacementError::NonFiniteBounds)),
    /// zero width or height ([`DegenerateBounds`](PlacementError::DegenerateBounds)).
    pub fn try_new(
        grid: G,
        x_min: F,
        y_min: F,
        x_max: F,
        y_max: F,
    ) -> Result<Self, PlacementError> {
        if grid.columns() == 0 || grid.rows() == 0 {
            return Err(PlacementError::ZeroGridDimension);
        }
        if ![x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()) {
            return Err(PlacementError::NonFiniteBounds);
        }
        if x_min == x_max || y_min == y_max {
            return Err(PlacementError::DegenerateBounds);
        }
        Ok(Self::new(grid, x_min, y_min, x_max, y_max))
    }

    /// The placed grid.
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Column count read at construction.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Row count read at construction.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Data-space width of one column. Always non-negative.
    pub fn dx(&self) -> F {
        self.dx
    }

    /// Data-space height of one row. Always non-negative.
    pub fn dy(&self) -> F {
        self.dy
    }

    /// Data-space X of the leading edge of `column`.
    ///
    /// Returns [`PlacementError::OutOfRange`] when `column >= columns()`.
    pub fn x_at(&self, column: u32) -> Result<F, PlacementError> {
        if column >= self.columns {
            return Err(PlacementError::OutOfRange {
                axis: Axis::X,
                index: column,
                len: self.columns,
            });
        }
        Ok(self.x_min + to_float::<F>(column) * self.dx)
    }

    /// Data-space Y of the leading edge of `row`.
    ///
    /// Returns [`PlacementError::OutOfRange`] when `row >= rows()`.
    pub fn y_at(&self, row: u32) -> Result<F, PlacementError> {
        if row >= self.rows {
            return Err(PlacementError::OutOfRange {
                axis: Axis::Y,
                index: row,
                len: self.rows,
            });
        }
        Ok(self.y_min + to_float::<F>(row) * self.dy)
    }

    /// Data-space origin of cell `(column, row)`. The column is checked
    /// first.
    pub fn cell_origin(&self, column: u32, row: u32) -> Result<Point<F>, PlacementError> {
        Ok(Point::new(self.x_at(column)?, self.y_at(row)?))
    }

    /// Canvas rectangle the grid is drawn into under the given transforms.
    ///
    /// Corners are `(tr_x(x_min), tr_y(y_min))` and
    /// `(tr_x(x_max), tr_y(y_max))`, not reordered.
    pub fn canvas_rect(&self, tr_x: impl Fn(F) -> F, tr_y: impl Fn(F) -> F) -> Rectangle<F> {
        Rectangle::new(
            Point::new(tr_x(self.x_min), tr_y(self.y_min)),
            Point::new(tr_x(self.x_max), tr_y(self.y_max)),
        )
    }

    /// Draw the whole grid into [`canvas_rect`](Self::canvas_rect) with a
    /// single canvas call.
    pub fn draw<C: Canvas<F>>(
        &self,
        canvas: &mut C,
        tr_x: impl Fn(F) -> F,
        tr_y: impl Fn(F) -> F,
    ) {
        let rect = self.canvas_rect(tr_x, tr_y);

        #[cfg(feature = "tracing")]
        tracing::trace!(columns = self.columns, rows = self.rows, "drawing image");

        canvas.draw_image(rect, &self.grid);
    }

    /// Bounds exactly as passed to the constructor.
    pub fn data_range(&self) -> DataRange<F> {
        DataRange::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

impl<G: PixelGrid, F: Float> Plotter<F> for ImagePlacement<G, F> {
    fn plot<C: Canvas<F>>(
        &self,
        canvas: &mut C,
        tr_x: impl Fn(F) -> F,
        tr_y: impl Fn(F) -> F,
    ) {
        self.draw(canvas, tr_x, tr_y)
    }
}

impl<G: PixelGrid, F: Float> DataRanger<F> for ImagePlacement<G, F> {
    fn data_range(&self) -> DataRange<F> {
        ImagePlacement::data_range(self)
    }
}

/// An image is one scaled blob with no labelled glyphs, so it never asks
/// the host for label margin.
impl<G: PixelGrid, F: Float> GlyphBoxer<F> for ImagePlacement<G, F> {
    fn glyph_boxes(&self) -> &[GlyphBox<F>] {
        &[]
    }
}

/// Exact for every `u32` in `f64`; rounds to nearest in `f32`.
fn to_float<F: Float>(n: u32) -> F {
    <F as NumCast>::from(n).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid that only knows its size.
    struct Blank {
        columns: u32,
        rows: u32,
    }

    impl PixelGrid for Blank {
        type Pixel = ();

        fn columns(&self) -> u32 {
            self.columns
        }

        fn rows(&self) -> u32 {
            self.rows
        }

        fn pixel(&self, column: u32, row: u32) -> Option<()> {
            (column < self.columns && row < self.rows).then_some(())
        }
    }

    static TEN_BY_FIVE: Blank = Blank {
        columns: 10,
        rows: 5,
    };

    /// Counts draw calls and keeps the last one.
    #[derive(Default)]
    struct Recorder {
        calls: usize,
        last: Option<(Rectangle<f64>, u32, u32)>,
    }

    impl Canvas<f64> for Recorder {
        fn draw_image<G: PixelGrid + ?Sized>(&mut self, rect: Rectangle<f64>, grid: &G) {
            self.calls += 1;
            self.last = Some((rect, grid.columns(), grid.rows()));
        }
    }

    fn identity(v: f64) -> f64 {
        v
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn steps_from_bounds() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        assert_eq!(p.columns(), 10);
        assert_eq!(p.rows(), 5);
        assert_eq!(p.dx(), 10.0);
        assert_eq!(p.dy(), 10.0);
    }

    #[test]
    fn steps_use_absolute_span() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 100.0, 50.0, 0.0, 0.0);
        assert_eq!(p.dx(), 10.0);
        assert_eq!(p.dy(), 10.0);
    }

    #[test]
    fn zero_area_bounds_give_zero_step() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 3.0, 7.0, 3.0, 7.0);
        assert_eq!(p.dx(), 0.0);
        assert_eq!(p.dy(), 0.0);
        assert_eq!(p.x_at(9), Ok(3.0));
    }

    #[test]
    fn zero_columns_give_infinite_step() {
        let empty = Blank {
            columns: 0,
            rows: 5,
        };
        let p = ImagePlacement::<_, f64>::new(&empty, 0.0, 0.0, 100.0, 50.0);
        assert!(p.dx().is_infinite());
        assert_eq!(p.dy(), 10.0);
        assert!(p.x_at(0).is_err());
    }

    #[test]
    fn zero_columns_and_span_give_nan_step() {
        let empty = Blank {
            columns: 0,
            rows: 0,
        };
        let p = ImagePlacement::<_, f64>::new(&empty, 1.0, 1.0, 1.0, 1.0);
        assert!(p.dx().is_nan());
        assert!(p.dy().is_nan());
    }

    #[test]
    fn f32_coordinates() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0_f32, 0.0, 5.0, 2.5);
        assert_eq!(p.dx(), 0.5);
        assert_eq!(p.y_at(4), Ok(2.0));
    }

    // ── try_new ─────────────────────────────────────────────────────────

    #[test]
    fn try_new_accepts_reversed_bounds() {
        assert!(ImagePlacement::try_new(&TEN_BY_FIVE, 100.0, 50.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn try_new_rejects_empty_grid() {
        let empty = Blank {
            columns: 4,
            rows: 0,
        };
        assert_eq!(
            ImagePlacement::try_new(&empty, 0.0, 0.0, 1.0, 1.0).err(),
            Some(PlacementError::ZeroGridDimension)
        );
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert_eq!(
            ImagePlacement::try_new(&TEN_BY_FIVE, 0.0, f64::NAN, 1.0, 1.0).err(),
            Some(PlacementError::NonFiniteBounds)
        );
        assert_eq!(
            ImagePlacement::try_new(&TEN_BY_FIVE, 0.0, 0.0, f64::INFINITY, 1.0).err(),
            Some(PlacementError::NonFiniteBounds)
        );
    }

    #[test]
    fn try_new_rejects_zero_area() {
        assert_eq!(
            ImagePlacement::try_new(&TEN_BY_FIVE, 0.0, 2.0, 1.0, 2.0).err(),
            Some(PlacementError::DegenerateBounds)
        );
        assert_eq!(
            ImagePlacement::try_new(&TEN_BY_FIVE, 5.0, 0.0, 5.0, 1.0).err(),
            Some(PlacementError::DegenerateBounds)
        );
    }

    // ── pixel → data lookup ─────────────────────────────────────────────

    #[test]
    fn x_at_every_column() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        for c in 0..10 {
            assert_eq!(p.x_at(c), Ok(c as f64 * 10.0), "column {c}");
        }
    }

    #[test]
    fn x_at_past_end_is_out_of_range() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        assert_eq!(
            p.x_at(10),
            Err(PlacementError::OutOfRange {
                axis: Axis::X,
                index: 10,
                len: 10
            })
        );
        assert!(p.x_at(u32::MAX).is_err());
    }

    #[test]
    fn y_at_past_end_is_out_of_range() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        assert_eq!(p.y_at(4), Ok(40.0));
        assert_eq!(
            p.y_at(5),
            Err(PlacementError::OutOfRange {
                axis: Axis::Y,
                index: 5,
                len: 5
            })
        );
    }

    #[test]
    fn reversed_bounds_walk_away_from_range() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 100.0, 50.0, 0.0, 0.0);
        assert_eq!(p.x_at(0), Ok(100.0));
        assert_eq!(p.x_at(1), Ok(110.0));
        assert_eq!(p.y_at(2), Ok(70.0));
    }

    #[test]
    fn cell_origin_checks_column_first() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        assert_eq!(p.cell_origin(3, 2), Ok(Point::new(30.0, 20.0)));
        assert!(matches!(
            p.cell_origin(10, 5),
            Err(PlacementError::OutOfRange { axis: Axis::X, .. })
        ));
        assert!(matches!(
            p.cell_origin(0, 5),
            Err(PlacementError::OutOfRange { axis: Axis::Y, .. })
        ));
    }

    // ── host queries ────────────────────────────────────────────────────

    #[test]
    fn data_range_is_verbatim() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 100.0, 50.0, 0.0, -1.0);
        assert_eq!(p.data_range(), DataRange::new(100.0, 0.0, 50.0, -1.0));
        assert_eq!(
            DataRanger::data_range(&p),
            DataRange::new(100.0, 0.0, 50.0, -1.0)
        );
    }

    #[test]
    fn glyph_boxes_always_empty() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        assert!(p.glyph_boxes().is_empty());
        let empty = Blank {
            columns: 0,
            rows: 0,
        };
        let q = ImagePlacement::new(&empty, 0.0, 0.0, 0.0, 0.0);
        assert!(q.glyph_boxes().is_empty());
    }

    #[test]
    fn placement_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ImagePlacement<&'static Blank, f64>>();
        assert_send_sync::<ImagePlacement<Blank, f32>>();
    }

    // ── drawing ─────────────────────────────────────────────────────────

    #[test]
    fn draw_identity_transform() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        let mut canvas = Recorder::default();
        p.draw(&mut canvas, identity, identity);
        assert_eq!(canvas.calls, 1);
        assert_eq!(
            canvas.last,
            Some((
                Rectangle::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0)),
                10,
                5
            ))
        );
    }

    #[test]
    fn draw_keeps_flipped_y() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, 0.0, 0.0, 100.0, 50.0);
        let mut canvas = Recorder::default();
        p.plot(&mut canvas, |x: f64| 2.0 * x + 10.0, |y: f64| 400.0 - 4.0 * y);
        let (rect, _, _) = canvas.last.unwrap();
        assert_eq!(rect.min, Point::new(10.0, 400.0));
        assert_eq!(rect.max, Point::new(210.0, 200.0));
        assert!(rect.is_inverted_y());
    }

    #[test]
    fn canvas_rect_matches_draw() {
        let p = ImagePlacement::new(&TEN_BY_FIVE, -1.0, 2.0, 3.0, -4.0);
        let tr = |v: f64| v * 10.0;
        let mut canvas = Recorder::default();
        p.draw(&mut canvas, tr, tr);
        assert_eq!(canvas.last.map(|(r, _, _)| r), Some(p.canvas_rect(tr, tr)));
    }
}
