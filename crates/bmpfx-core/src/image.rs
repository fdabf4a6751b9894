//! Row-major image buffer.
//!
//! [`Image`] owns a contiguous `Vec<Bgr8>` of `height` rows by `width`
//! columns, top row first:
//!
//! ```text
//! data: [px(0,0) px(0,1) ... px(0,w-1)]   <- row 0
//!       [px(1,0) px(1,1) ... px(1,w-1)]   <- row 1
//!       ...
//! ```
//!
//! The buffer length always equals `width * height`. Constructors check it
//! so that the transforms in `bmpfx-ops`, which take raw
//! `(height, width, &mut [Bgr8])` grids, never see a mismatched buffer.
//! Zero-sized images are allowed; every transform leaves them untouched.
//!
//! Coordinates are `(row, col)` throughout, matching the transform code.

use crate::{Bgr8, Error, Result};

/// Owned row-major grid of [`Bgr8`] pixels.
///
/// # Example
///
/// ```rust
/// use bmpfx_core::{Bgr8, Image};
///
/// let mut img = Image::filled(3, 2, Bgr8::gray(9)).unwrap();
/// assert_eq!(img.dimensions(), (3, 2));
///
/// img.row_mut(1)[0] = Bgr8::WHITE;
/// assert_eq!(img.get(1, 0), Some(Bgr8::WHITE));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    data: Vec<Bgr8>,
}

impl Image {
    /// Creates a black image.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if `width * height` overflows
    /// - [`Error::AllocationFailed`] if the buffer cannot be reserved
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, Bgr8::BLACK)
    }

    /// Creates an image with every pixel set to `px`.
    ///
    /// The allocation is fallible so an oversized request surfaces as an
    /// error rather than an abort.
    pub fn filled(width: usize, height: usize, px: Bgr8) -> Result<Self> {
        let len = pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| Error::allocation_failed(len, e.to_string()))?;
        data.resize(len, px);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, data: Vec<Bgr8>) -> Result<Self> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(Error::dimension_mismatch(width, height, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image by evaluating `f(row, col)` for every pixel.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Bgr8,
    ) -> Result<Self> {
        let mut img = Self::new(width, height)?;
        for (row, line) in img.rows_mut().enumerate() {
            for (col, px) in line.iter_mut().enumerate() {
                *px = f(row, col);
            }
        }
        Ok(img)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Bgr8] {
        &self.data
    }

    /// All pixels, row-major, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Bgr8] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<Bgr8> {
        self.data
    }

    /// Splits the image into the `(height, width, grid)` triple the
    /// transforms take.
    #[inline]
    pub fn as_grid_mut(&mut self) -> (usize, usize, &mut [Bgr8]) {
        (self.height, self.width, &mut self.data)
    }

    /// Pixel at `(row, col)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Bgr8> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Sets the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] outside the image.
    pub fn set(&mut self, row: usize, col: usize, px: Bgr8) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::out_of_bounds(row, col, self.width, self.height));
        }
        self.data[row * self.width + col] = px;
        Ok(())
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// If `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[Bgr8] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    /// One row of pixels, mutable.
    ///
    /// # Panics
    ///
    /// If `row >= height`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [Bgr8] {
        let start = row * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Bgr8]> {
        // width 0 means an empty buffer, so the chunk size is never used
        self.data.chunks(self.width.max(1))
    }

    /// Iterates rows top to bottom, mutable.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [Bgr8]> {
        self.data.chunks_mut(self.width.max(1))
    }
}

/// `width * height` with overflow checking.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows usize"))
}
