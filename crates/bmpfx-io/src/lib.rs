//! # bmpfx-io
//!
//! Reading and writing of 24-bit uncompressed Windows bitmaps.
//!
//! - [`ImageReader`] / [`ImageWriter`] - Traits shared by readers and writers
//! - [`BmpReader`] / [`BmpWriter`] - The BMP implementation, also usable on
//!   any `Read` / `Write` through `read_from` / `write_to`
//! - [`read`] / [`write`] - Path-based shortcuts
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bmpfx_io::{read, write};
//!
//! let mut bitmap = read("courtyard.bmp")?;
//! bmpfx_ops::Filter::Sepia.apply(&mut bitmap.image);
//! write("sepia.bmp", &bitmap)?;
//! ```
//!
//! Anything other than a 54-byte header with 24 bits per pixel and no
//! compression is rejected with [`IoError::UnsupportedFormat`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod traits;

pub mod bmp;

pub use bmp::{read, write, Bitmap, BmpInfo, BmpReader, BmpWriter};
pub use error::{IoError, IoResult};
pub use traits::{ImageReader, ImageWriter};
