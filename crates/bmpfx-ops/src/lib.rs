//! # bmpfx-ops
//!
//! In-place pixel transforms over BGR grids.
//!
//! Every transform has the same shape,
//! `fn(height, width, &mut [Bgr8])`, mutates the grid in place and cannot
//! fail on a grid whose length is `height * width`.
//!
//! # Modules
//!
//! - [`color`] - [`grayscale`](color::grayscale), [`sepia`](color::sepia)
//! - [`transform`] - [`reflect`](transform::reflect)
//! - [`filter`] - [`blur`](filter::blur), 3x3 box blur cropped at borders
//! - [`snapshot`] - read-only copy used by reflect and blur
//! - `parallel` - Rayon row-parallel variants (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use bmpfx_core::{Bgr8, Image};
//! use bmpfx_ops::Filter;
//!
//! let mut img = Image::filled(4, 4, Bgr8::rgb(200, 100, 0)).unwrap();
//! Filter::Grayscale.apply(&mut img);
//! assert!(img.pixels().iter().all(|p| *p == Bgr8::gray(100)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod color;
pub mod filter;
pub mod snapshot;
pub mod transform;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};

use bmpfx_core::{Bgr8, Image};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One of the four transforms, selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Rounded channel mean in all three channels.
    Grayscale,
    /// Fixed sepia tone matrix, capped at 255.
    Sepia,
    /// Horizontal mirror.
    Reflect,
    /// Boundary-cropped 3x3 box blur.
    Blur,
}

impl Filter {
    /// Every filter, in flag order `b g r s`.
    pub const ALL: [Filter; 4] = [Filter::Blur, Filter::Grayscale, Filter::Reflect, Filter::Sepia];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Filter::Grayscale => "grayscale",
            Filter::Sepia => "sepia",
            Filter::Reflect => "reflect",
            Filter::Blur => "blur",
        }
    }

    /// Single-letter command-line flag.
    pub fn flag(self) -> char {
        match self {
            Filter::Grayscale => 'g',
            Filter::Sepia => 's',
            Filter::Reflect => 'r',
            Filter::Blur => 'b',
        }
    }

    /// Looks a filter up by its flag letter.
    pub fn from_flag(flag: char) -> OpsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.flag() == flag)
            .ok_or_else(|| OpsError::UnknownFilter(format!("-{flag}")))
    }

    /// The serial transform function.
    pub fn function(self) -> fn(usize, usize, &mut [Bgr8]) {
        match self {
            Filter::Grayscale => color::grayscale,
            Filter::Sepia => color::sepia,
            Filter::Reflect => transform::reflect,
            Filter::Blur => filter::blur,
        }
    }

    /// The Rayon transform function.
    #[cfg(feature = "parallel")]
    pub fn parallel_function(self) -> fn(usize, usize, &mut [Bgr8]) {
        match self {
            Filter::Grayscale => parallel::grayscale,
            Filter::Sepia => parallel::sepia,
            Filter::Reflect => parallel::reflect,
            Filter::Blur => parallel::blur,
        }
    }

    /// Applies the filter to an image in place.
    pub fn apply(self, image: &mut Image) {
        debug!(filter = self.name(), width = image.width(), height = image.height(), "apply");
        let (height, width, grid) = image.as_grid_mut();
        (self.function())(height, width, grid);
    }

    /// Applies the Rayon variant of the filter to an image in place.
    #[cfg(feature = "parallel")]
    pub fn apply_parallel(self, image: &mut Image) {
        debug!(filter = self.name(), width = image.width(), height = image.height(), "apply_parallel");
        let (height, width, grid) = image.as_grid_mut();
        (self.parallel_function())(height, width, grid);
    }

    /// Applies the filter to a raw grid after checking its length.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidDimensions`] if `grid.len() != height * width`.
    pub fn apply_grid(self, height: usize, width: usize, grid: &mut [Bgr8]) -> OpsResult<()> {
        if height.checked_mul(width) != Some(grid.len()) {
            return Err(OpsError::InvalidDimensions(format!(
                "{}x{} grid needs {} pixels, got {}",
                width,
                height,
                height.saturating_mul(width),
                grid.len()
            )));
        }
        (self.function())(height, width, grid);
        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grayscale" | "greyscale" | "gray" | "grey" | "g" => Ok(Filter::Grayscale),
            "sepia" | "s" => Ok(Filter::Sepia),
            "reflect" | "mirror" | "r" => Ok(Filter::Reflect),
            "blur" | "box" | "b" => Ok(Filter::Blur),
            _ => Err(OpsError::UnknownFilter(s.to_string())),
        }
    }
}
