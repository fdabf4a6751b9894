//! # bmpfx-core
//!
//! Core types shared by every bmpfx crate.
//!
//! - [`Bgr8`] - 8-bit pixel triple in blue, green, red order
//! - [`Image`] - Row-major pixel grid that owns its buffer
//! - [`Error`] - Buffer construction and access errors
//!
//! ## Crate Structure
//!
//! ```text
//! bmpfx-core (this crate)
//!    ^
//!    |
//!    +-- bmpfx-ops (grayscale, sepia, reflect, blur)
//!    +-- bmpfx-io  (24-bit BMP reader/writer)
//!    +-- bmpfx-cli (command-line driver)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bmpfx_core::{Bgr8, Image};
//!
//! let mut img = Image::new(4, 2).unwrap();
//! img.set(1, 3, Bgr8::rgb(255, 0, 0)).unwrap();
//! assert_eq!(img.get(1, 3), Some(Bgr8::rgb(255, 0, 0)));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::Bgr8;

/// Prelude module for convenient imports.
///
/// ```
/// use bmpfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::pixel::Bgr8;
}
