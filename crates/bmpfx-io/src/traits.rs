//! I/O traits for bitmap readers and writers.

use crate::{Bitmap, IoResult};
use std::path::Path;

/// Trait for bitmap readers.
pub trait ImageReader {
    /// Reads a bitmap from a file path.
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Bitmap>;

    /// Reads a bitmap from memory.
    fn read_from_memory(&self, data: &[u8]) -> IoResult<Bitmap>;
}

/// Trait for bitmap writers.
pub trait ImageWriter {
    /// Writes a bitmap to a file path.
    fn write<P: AsRef<Path>>(&self, path: P, bitmap: &Bitmap) -> IoResult<()>;

    /// Writes a bitmap to memory.
    fn write_to_memory(&self, bitmap: &Bitmap) -> IoResult<Vec<u8>>;
}
