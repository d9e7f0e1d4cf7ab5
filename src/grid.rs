//! Pixel grid abstraction.
//!
//! The plotter never decodes or resamples pixels; it only needs to know
//! how many columns and rows the image has and to hand the grid to a
//! canvas. [`PixelGrid`] is that contract. Implement it for whatever image
//! type your canvas understands.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::error::PlacementError;

/// A 2-D grid of pixel samples addressed by `(column, row)`.
///
/// Row 0 is the first row of the image as stored. The sizes reported here
/// are read once when a placement is built and assumed not to change.
pub trait PixelGrid {
    /// Sample type.
    type Pixel;

    /// Number of columns (image width).
    fn columns(&self) -> u32;

    /// Number of rows (image height).
    fn rows(&self) -> u32;

    /// Sample at `(column, row)`, or `None` outside the grid.
    fn pixel(&self, column: u32, row: u32) -> Option<Self::Pixel>;
}

impl<T: PixelGrid + ?Sized> PixelGrid for &T {
    type Pixel = T::Pixel;

    fn columns(&self) -> u32 {
        (**self).columns()
    }

    fn rows(&self) -> u32 {
        (**self).rows()
    }

    fn pixel(&self, column: u32, row: u32) -> Option<Self::Pixel> {
        (**self).pixel(column, row)
    }
}

/// Owned row-major pixel buffer.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer<P> {
    columns: u32,
    rows: u32,
    pixels: Vec<P>,
}

#[cfg(feature = "alloc")]
impl<P> PixelBuffer<P> {
    /// Wrap `pixels` as a `columns × rows` grid.
    ///
    /// Fails with [`PlacementError::BufferSize`] unless
    /// `pixels.len() == columns * rows`. A product that overflows `usize`
    /// is reported as `expected: usize::MAX`.
    pub fn new(columns: u32, rows: u32, pixels: Vec<P>) -> Result<Self, PlacementError> {
        let expected = (columns as usize)
            .checked_mul(rows as usize)
            .unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(PlacementError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            columns,
            rows,
            pixels,
        })
    }

    /// Build a grid by evaluating `f(column, row)` for every cell.
    pub fn from_fn(columns: u32, rows: u32, mut f: impl FnMut(u32, u32) -> P) -> Self {
        let pixels = (0..rows)
            .flat_map(|r| (0..columns).map(move |c| (c, r)))
            .map(|(c, r)| f(c, r))
            .collect();
        Self {
            columns,
            rows,
            pixels,
        }
    }

    /// Raw samples in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.pixels
    }
}

#[cfg(feature = "alloc")]
impl<P: Copy> PixelGrid for PixelBuffer<P> {
    type Pixel = P;

    fn columns(&self) -> u32 {
        self.columns
    }

    fn rows(&self) -> u32 {
        self.rows
    }

    fn pixel(&self, column: u32, row: u32) -> Option<P> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.pixels
            .get(row as usize * self.columns as usize + column as usize)
            .copied()
    }
}
