//! Raster image plotter for 2-D charts.
//!
//! Places a pixel grid into a rectangle in data space and asks a canvas to
//! draw it scaled into whatever that rectangle becomes under the host's
//! axis transforms. Pure coordinate mapping: no decoding or resampling,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`image`]: [`ImagePlacement`] construction, pixel → data lookup, drawing
//! - [`plotter`]: Layer traits a chart host drives, and [`DataRange`] folding
//! - [`grid`]: [`PixelGrid`] trait and an owned [`PixelBuffer`]
//! - [`canvas`]: [`Canvas`] trait for drawing a grid scaled into a rectangle
//! - [`geom`]: Canvas-space [`Point`] and [`Rectangle`]
//! - `svg`: Diagram of a placement (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenplot::{Canvas, ImagePlacement, PixelBuffer, PixelGrid, Plotter, Rectangle};
//!
//! struct Log(Vec<Rectangle<f64>>);
//! impl Canvas<f64> for Log {
//!     fn draw_image<G: PixelGrid + ?Sized>(&mut self, rect: Rectangle<f64>, _: &G) {
//!         self.0.push(rect);
//!     }
//! }
//!
//! let img = PixelBuffer::from_fn(10, 5, |c, r| [c as u8, r as u8, 0]);
//! let layer = ImagePlacement::new(&img, 0.0, 0.0, 100.0, 50.0);
//!
//! let mut canvas = Log(Vec::new());
//! layer.plot(&mut canvas, |x: f64| x * 2.0, |y: f64| 200.0 - y * 2.0);
//!
//! assert_eq!(canvas.0.len(), 1);
//! assert_eq!((canvas.0[0].min.y, canvas.0[0].max.y), (200.0, 100.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod canvas;
pub mod error;
pub mod geom;
pub mod grid;
pub mod image;
pub mod plotter;

#[cfg(feature = "svg")]
pub mod svg;

pub use canvas::Canvas;
pub use error::{Axis, PlacementError};
pub use geom::{Point, Rectangle};
#[cfg(feature = "alloc")]
pub use grid::PixelBuffer;
pub use grid::PixelGrid;
pub use image::ImagePlacement;
pub use plotter::{DataRange, DataRanger, GlyphBox, GlyphBoxer, Plotter};
