//! Drawing surface contract.

use crate::geom::Rectangle;
use crate::grid::PixelGrid;

/// A surface that can draw a whole pixel grid scaled into a rectangle.
///
/// `rect` is in canvas space and may be inverted on either axis (see
/// [`Rectangle`]). Implementations either honour the inversion as a
/// mirrored draw or call [`Rectangle::normalized`] first.
pub trait Canvas<F> {
    /// Draw every pixel of `grid` scaled to fill `rect`.
    fn draw_image<G: PixelGrid + ?Sized>(&mut self, rect: Rectangle<F>, grid: &G);
}

impl<F, C: Canvas<F>> Canvas<F> for &mut C {
    fn draw_image<G: PixelGrid + ?Sized>(&mut self, rect: Rectangle<F>, grid: &G) {
        (**self).draw_image(rect, grid)
    }
}
