//! Placement error type.

use core::fmt;

/// Image axis an index refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Columns, mapped onto data-space X.
    X,
    /// Rows, mapped onto data-space Y.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("column"),
            Self::Y => f.write_str("row"),
        }
    }
}

/// Errors from building or querying an [`ImagePlacement`](crate::ImagePlacement).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// A pixel index is outside `0..len` on its axis.
    #[error("{axis} index {index} out of range for image with {len} {axis}s")]
    OutOfRange { axis: Axis, index: u32, len: u32 },
    /// The pixel grid has zero columns or zero rows.
    #[error("pixel grid has zero width or height")]
    ZeroGridDimension,
    /// A data bound is NaN or infinite.
    #[error("data bounds must be finite")]
    NonFiniteBounds,
    /// The data rectangle has zero width or zero height.
    #[error("data bounds enclose zero area")]
    DegenerateBounds,
    /// A pixel buffer was given the wrong number of samples.
    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}
