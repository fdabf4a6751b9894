//! Per-pixel color maps: grayscale and sepia.
//!
//! Both are pure functions of a single pixel, so the grid functions are a
//! single in-place pass with no snapshot. The pixel-level functions are
//! public so the [`parallel`](crate::parallel) variants share the exact
//! same arithmetic.
//!
//! # Rounding
//!
//! Intermediates are floating point and rounded with `round()` (half away
//! from zero). Integer division or banker's rounding would diverge on `.5`
//! boundaries.
//!
//! # Example
//!
//! ```rust
//! use bmpfx_core::Bgr8;
//! use bmpfx_ops::color::{grayscale, sepia};
//!
//! let mut grid = vec![Bgr8::rgb(10, 20, 31)];
//! grayscale(1, 1, &mut grid);
//! assert_eq!(grid[0], Bgr8::gray(20)); // 61 / 3 = 20.33
//!
//! let mut grid = vec![Bgr8::WHITE];
//! sepia(1, 1, &mut grid);
//! assert_eq!(grid[0], Bgr8::rgb(255, 255, 239));
//! ```

use crate::snapshot::assert_grid;
use bmpfx_core::Bgr8;
use tracing::trace;

/// Sepia coefficients for the red output, applied to (red, green, blue).
pub const SEPIA_RED: [f64; 3] = [0.393, 0.769, 0.189];
/// Sepia coefficients for the green output, applied to (red, green, blue).
pub const SEPIA_GREEN: [f64; 3] = [0.349, 0.686, 0.168];
/// Sepia coefficients for the blue output, applied to (red, green, blue).
pub const SEPIA_BLUE: [f64; 3] = [0.272, 0.534, 0.131];

/// Rounded mean of the three channels.
#[inline]
pub fn gray_value(px: Bgr8) -> u8 {
    let sum = u32::from(px.blue) + u32::from(px.green) + u32::from(px.red);
    // mean of three u8 values stays in 0..=255
    (sum as f32 / 3.0).round() as u8
}

/// Grayscale version of one pixel.
#[inline]
pub fn gray_pixel(px: Bgr8) -> Bgr8 {
    Bgr8::gray(gray_value(px))
}

/// Sepia version of one pixel.
///
/// All three outputs are computed from the original channels before any is
/// written.
#[inline]
pub fn sepia_pixel(px: Bgr8) -> Bgr8 {
    let rgb = [f64::from(px.red), f64::from(px.green), f64::from(px.blue)];
    Bgr8::rgb(
        sepia_channel(SEPIA_RED, rgb),
        sepia_channel(SEPIA_GREEN, rgb),
        sepia_channel(SEPIA_BLUE, rgb),
    )
}

/// Weighted sum, rounded, capped at 255.
///
/// Only the upper bound is capped: coefficients and inputs are non-negative,
/// so the sum never goes below zero.
#[inline]
fn sepia_channel(k: [f64; 3], rgb: [f64; 3]) -> u8 {
    let v = (k[0] * rgb[0] + k[1] * rgb[1] + k[2] * rgb[2]).round() as u32;
    if v > 255 { 255 } else { v as u8 }
}

/// Converts the grid to grayscale in place.
///
/// Every channel becomes `round((blue + green + red) / 3)`.
///
/// # Panics
///
/// If `grid.len() != height * width`.
pub fn grayscale(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "grayscale");
    assert_grid(height, width, grid);

    for px in grid.iter_mut() {
        *px = gray_pixel(*px);
    }
}

/// Applies the sepia tone map in place.
///
/// # Panics
///
/// If `grid.len() != height * width`.
pub fn sepia(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "sepia");
    assert_grid(height, width, grid);

    for px in grid.iter_mut() {
        *px = sepia_pixel(*px);
    }
}
