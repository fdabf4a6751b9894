//! Row-parallel versions of the four transforms using Rayon.
//!
//! Same signatures and byte-identical output as the serial functions.
//! Grayscale and sepia have no cross-pixel dependency and split rows
//! directly. Reflect and blur first build the whole [`Snapshot`]; only
//! after it is complete does the parallel write phase start, with every
//! worker reading the snapshot and writing its own row.
//!
//! # Example
//!
//! ```rust
//! use bmpfx_core::Bgr8;
//! use bmpfx_ops::parallel;
//!
//! let mut grid = vec![Bgr8::rgb(90, 60, 30); 64 * 48];
//! parallel::blur(48, 64, &mut grid);
//! assert!(grid.iter().all(|&p| p == Bgr8::rgb(90, 60, 30)));
//! ```

use crate::color::{gray_pixel, sepia_pixel};
use crate::filter::blur_row;
use crate::snapshot::{assert_grid, Snapshot};
use crate::transform::reflect_row;
use bmpfx_core::Bgr8;
use rayon::prelude::*;
use tracing::trace;

/// Parallel [`grayscale`](crate::color::grayscale).
pub fn grayscale(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "parallel::grayscale");
    assert_grid(height, width, grid);
    map_rows(width, grid, gray_pixel);
}

/// Parallel [`sepia`](crate::color::sepia).
pub fn sepia(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "parallel::sepia");
    assert_grid(height, width, grid);
    map_rows(width, grid, sepia_pixel);
}

/// Parallel [`reflect`](crate::transform::reflect).
pub fn reflect(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "parallel::reflect");
    let snapshot = Snapshot::capture(height, width, grid);
    if grid.is_empty() {
        return;
    }

    grid.par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, line)| reflect_row(snapshot.row(row), line));
}

/// Parallel [`blur`](crate::filter::blur).
pub fn blur(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "parallel::blur");
    let snapshot = Snapshot::capture(height, width, grid);
    if grid.is_empty() {
        return;
    }

    grid.par_chunks_mut(width)
        .enumerate()
        .for_each(|(x, line)| blur_row(&snapshot, x, line));
}

/// Applies `f` to every pixel, one row per task.
fn map_rows(width: usize, grid: &mut [Bgr8], f: fn(Bgr8) -> Bgr8) {
    if grid.is_empty() {
        return;
    }
    grid.par_chunks_mut(width).for_each(|line| {
        for px in line.iter_mut() {
            *px = f(*px);
        }
    });
}
