//! Geometric transforms.
//!
//! # Operations
//!
//! - [`reflect`] - Horizontal mirror (left-right)
//!
//! # Example
//!
//! ```rust
//! use bmpfx_core::Bgr8;
//! use bmpfx_ops::transform::reflect;
//!
//! let mut grid = vec![Bgr8::gray(1), Bgr8::gray(2), Bgr8::gray(3)];
//! reflect(1, 3, &mut grid);
//! assert_eq!(grid, vec![Bgr8::gray(3), Bgr8::gray(2), Bgr8::gray(1)]);
//! ```

use crate::snapshot::Snapshot;
use bmpfx_core::Bgr8;
use tracing::trace;

/// Mirrors the grid left-to-right in place.
///
/// Column `j` of the output is column `width - 1 - j` of the input, for
/// every row. Reads come from a [`Snapshot`] so the traversal order does not
/// matter. Reflecting twice restores the original; a one-column grid is
/// unchanged.
///
/// # Panics
///
/// If `grid.len() != height * width`.
pub fn reflect(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "reflect");
    let snapshot = Snapshot::capture(height, width, grid);

    for (row, line) in grid.chunks_exact_mut(width.max(1)).enumerate() {
        reflect_row(snapshot.row(row), line);
    }
}

/// Writes the mirror of `src` into `dst`.
#[inline]
pub(crate) fn reflect_row(src: &[[u32; 3]], dst: &mut [Bgr8]) {
    for (out, &px) in dst.iter_mut().zip(src.iter().rev()) {
        *out = Bgr8::from_wide(px);
    }
}
