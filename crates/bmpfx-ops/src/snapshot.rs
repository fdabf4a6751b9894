//! Read-only copy of a grid taken before an in-place write.
//!
//! Any transform whose output at one position reads input at another
//! position (reflect, blur) must read from an untouched copy, otherwise
//! earlier writes leak into later reads. [`Snapshot`] is that copy: an owned
//! buffer of channel values widened to `u32`, built in full before the
//! first write and dropped when the transform returns.

use bmpfx_core::Bgr8;

/// Widened, immutable copy of a `height` x `width` grid.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: usize,
    height: usize,
    data: Vec<[u32; 3]>,
}

impl Snapshot {
    /// Copies every pixel of `grid`.
    ///
    /// The returned value is complete when this function returns, so it can
    /// be shared read-only across worker threads for the write phase.
    pub fn capture(height: usize, width: usize, grid: &[Bgr8]) -> Self {
        assert_grid(height, width, grid);
        Self {
            width,
            height,
            data: grid.iter().map(|px| px.widen()).collect(),
        }
    }

    /// Image width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channels at `(row, col)` in blue, green, red order.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> [u32; 3] {
        self.data[row * self.width + col]
    }

    /// One row of widened channels.
    #[inline]
    pub fn row(&self, row: usize) -> &[[u32; 3]] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }
}

/// Checks the grid precondition shared by every transform.
///
/// A mismatch is a caller bug (the I/O layer validates dimensions before any
/// transform runs), so it panics rather than returning an error.
#[inline]
pub(crate) fn assert_grid(height: usize, width: usize, grid: &[Bgr8]) {
    assert_eq!(
        Some(grid.len()),
        height.checked_mul(width),
        "grid of {} pixels does not match {}x{}",
        grid.len(),
        width,
        height
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_widens() {
        let grid = [Bgr8::new(1, 2, 3), Bgr8::new(255, 254, 253)];
        let snap = Snapshot::capture(1, 2, &grid);
        assert_eq!(snap.at(0, 1), [255, 254, 253]);
        assert_eq!(snap.row(0).len(), 2);
    }

    #[test]
    fn test_capture_is_independent_of_grid() {
        let mut grid = vec![Bgr8::gray(7); 4];
        let snap = Snapshot::capture(2, 2, &grid);
        grid[3] = Bgr8::WHITE;
        assert_eq!(snap.at(1, 1), [7, 7, 7]);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_mismatched_grid_panics() {
        let grid = vec![Bgr8::BLACK; 5];
        let _ = Snapshot::capture(2, 3, &grid);
    }
}
