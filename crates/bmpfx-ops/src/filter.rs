//! Neighborhood filters.
//!
//! [`blur`] is a 3x3 box blur whose kernel is cropped at the image border:
//! a pixel averages itself and whichever of its eight neighbors exist, and
//! the divisor is the number of pixels actually summed.
//!
//! ```text
//!   corner: 4 pixels   edge: 6 pixels   interior: 9 pixels
//!   +---+---+          +---+---+---+    +---+---+---+
//!   | * |   |          |   | * |   |    |   |   |   |
//!   +---+---+          +---+---+---+    +---+---+---+
//!   |   |   |          |   |   |   |    |   | * |   |
//!   +---+---+          +---+---+---+    +---+---+---+
//!                                       |   |   |   |
//!                                       +---+---+---+
//! ```
//!
//! There is no padding, mirroring or wrapping. Degenerate grids fall out of
//! the same rule: a 1xN row averages 2 or 3 pixels, a 1x1 image keeps its
//! value.
//!
//! # Example
//!
//! ```rust
//! use bmpfx_core::Bgr8;
//! use bmpfx_ops::filter::blur;
//!
//! // 2x2: every pixel is a corner and sees all four
//! let mut grid = vec![Bgr8::gray(0), Bgr8::gray(0), Bgr8::gray(0), Bgr8::gray(255)];
//! blur(2, 2, &mut grid);
//! assert!(grid.iter().all(|&p| p == Bgr8::gray(64)));
//! ```

use crate::snapshot::Snapshot;
use bmpfx_core::Bgr8;
use tracing::trace;

/// Box-blurs the grid in place with a boundary-cropped 3x3 kernel.
///
/// Each channel of each output pixel is
/// `round(sum / count)` over the original values in rows
/// `max(0, x-1)..=min(height-1, x+1)` and columns
/// `max(0, y-1)..=min(width-1, y+1)`.
///
/// # Panics
///
/// If `grid.len() != height * width`.
pub fn blur(height: usize, width: usize, grid: &mut [Bgr8]) {
    trace!(height, width, "blur");
    let snapshot = Snapshot::capture(height, width, grid);

    for (x, line) in grid.chunks_exact_mut(width.max(1)).enumerate() {
        blur_row(&snapshot, x, line);
    }
}

/// Blurs row `x` of `snapshot` into `dst`.
#[inline]
pub(crate) fn blur_row(snapshot: &Snapshot, x: usize, dst: &mut [Bgr8]) {
    for (y, px) in dst.iter_mut().enumerate() {
        *px = blur_pixel(snapshot, x, y);
    }
}

/// Average of the cropped 3x3 neighborhood around `(x, y)`.
///
/// # Panics
///
/// If `x >= snapshot.height()` or `y >= snapshot.width()`, which includes
/// every position of an empty snapshot.
pub fn blur_pixel(snapshot: &Snapshot, x: usize, y: usize) -> Bgr8 {
    assert!(
        x < snapshot.height() && y < snapshot.width(),
        "pixel ({x}, {y}) outside {}x{} snapshot",
        snapshot.width(),
        snapshot.height()
    );
    let rows = x.saturating_sub(1)..=(x + 1).min(snapshot.height() - 1);
    let cols = y.saturating_sub(1)..=(y + 1).min(snapshot.width() - 1);

    let mut sum = [0u32; 3];
    let mut count = 0u32;
    for r in rows {
        for c in cols.clone() {
            let px = snapshot.at(r, c);
            sum[0] += px[0];
            sum[1] += px[1];
            sum[2] += px[2];
            count += 1;
        }
    }

    Bgr8::from_wide(sum.map(|s| average(s, count)))
}

/// `round(sum / count)` in single precision.
#[inline]
fn average(sum: u32, count: u32) -> u32 {
    (sum as f32 / count as f32).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(values: &[u8]) -> Vec<Bgr8> {
        values.iter().map(|&v| Bgr8::gray(v)).collect()
    }

    fn blues(grid: &[Bgr8]) -> Vec<u8> {
        grid.iter().map(|p| p.blue).collect()
    }

    #[test]
    fn test_interior_uses_nine() {
        #[rustfmt::skip]
        let mut grid = grid_from(&[
            10, 20, 30,
            40, 50, 60,
            70, 80, 91,
        ]);
        blur(3, 3, &mut grid);
        // 451 / 9 = 50.11
        assert_eq!(grid[4], Bgr8::gray(50));
    }

    #[test]
    fn test_edges_use_six_and_corners_four() {
        #[rustfmt::skip]
        let mut grid = grid_from(&[
            10, 20, 30,
            40, 50, 60,
            70, 80, 90,
        ]);
        blur(3, 3, &mut grid);
        #[rustfmt::skip]
        let expected = [
            30, 35, 40,   // 120/4, 210/6, 160/4
            45, 50, 55,   // 270/6, 450/9, 330/6
            60, 65, 70,   // 240/4, 390/6, 280/4
        ];
        assert_eq!(blues(&grid), expected);
    }

    #[test]
    fn test_corner_spike_divides_by_four() {
        let mut grid = vec![Bgr8::BLACK; 9];
        grid[0] = Bgr8::WHITE;
        blur(3, 3, &mut grid);

        // corner itself and its neighbors
        assert_eq!(grid[0], Bgr8::gray(64)); // 255 / 4 = 63.75
        assert_eq!(grid[1], Bgr8::gray(43)); // 255 / 6 = 42.5
        assert_eq!(grid[3], Bgr8::gray(43));
        assert_eq!(grid[4], Bgr8::gray(28)); // 255 / 9 = 28.33
        // not adjacent to the spike
        for i in [2, 5, 6, 7, 8] {
            assert_eq!(grid[i], Bgr8::BLACK, "pixel {i}");
        }
    }

    #[test]
    fn test_channels_are_independent() {
        let mut grid = vec![Bgr8::BLACK; 9];
        grid[8] = Bgr8::new(255, 0, 0);
        blur(3, 3, &mut grid);
        assert_eq!(grid[8], Bgr8::new(64, 0, 0));
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 2x2 corners sum to 2 over 4 -> 0.5 -> 1
        let mut grid = grid_from(&[1, 1, 0, 0]);
        blur(2, 2, &mut grid);
        assert_eq!(blues(&grid), [1, 1, 1, 1]);
    }

    #[test]
    fn test_single_pixel_unchanged() {
        let mut grid = vec![Bgr8::rgb(12, 34, 56)];
        blur(1, 1, &mut grid);
        assert_eq!(grid, vec![Bgr8::rgb(12, 34, 56)]);
    }

    #[test]
    fn test_single_row() {
        let mut grid = grid_from(&[0, 30, 60, 90]);
        blur(1, 4, &mut grid);
        // 30/2, 90/3, 180/3, 150/2
        assert_eq!(blues(&grid), [15, 30, 60, 75]);
    }

    #[test]
    fn test_single_column() {
        let mut grid = grid_from(&[0, 30, 60, 90]);
        blur(4, 1, &mut grid);
        assert_eq!(blues(&grid), [15, 30, 60, 75]);
    }

    #[test]
    fn test_constant_image_unchanged() {
        let mut grid = vec![Bgr8::rgb(17, 99, 201); 5 * 4];
        blur(5, 4, &mut grid);
        assert!(grid.iter().all(|&p| p == Bgr8::rgb(17, 99, 201)));
    }

    #[test]
    fn test_empty() {
        let mut grid: Vec<Bgr8> = Vec::new();
        blur(0, 0, &mut grid);
        blur(0, 5, &mut grid);
        blur(5, 0, &mut grid);
        assert!(grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "outside 0x0 snapshot")]
    fn test_blur_pixel_on_empty_snapshot() {
        let snapshot = Snapshot::capture(0, 0, &[]);
        blur_pixel(&snapshot, 0, 0);
    }

    #[test]
    #[should_panic(expected = "outside 3x2 snapshot")]
    fn test_blur_pixel_past_last_row() {
        let grid = vec![Bgr8::WHITE; 6];
        let snapshot = Snapshot::capture(2, 3, &grid);
        blur_pixel(&snapshot, 4, 0);
    }
}
