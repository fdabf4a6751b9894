//! Windows BMP support (24-bit, uncompressed).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bmpfx_io::bmp;
//!
//! let mut bitmap = bmp::read("photo.bmp")?;
//! bitmap.image.set(0, 0, bmpfx_core::Bgr8::WHITE)?;
//! bmp::write("out.bmp", &bitmap)?;
//! ```
//!
//! # Format Details
//!
//! Only the layout the filters were written for is accepted:
//!
//! | Field | Required value |
//! |-------|----------------|
//! | `bfType` | `"BM"` |
//! | `bfOffBits` | 54 (no palette, no gap) |
//! | `biSize` | 40 (`BITMAPINFOHEADER`) |
//! | `biBitCount` | 24 |
//! | `biCompression` | 0 (`BI_RGB`) |
//!
//! Pixels are stored B, G, R; each scanline is padded with zeros to a
//! multiple of 4 bytes. A positive `biHeight` stores rows bottom-up, a
//! negative one top-down. Decoding always yields a top-down
//! [`Image`]; the orientation is kept in [`BmpInfo`] and restored on write,
//! together with the resolution and palette-count fields.

use crate::{ImageReader, ImageWriter, IoError, IoResult};
use bmpfx_core::{Bgr8, Error as CoreError, Image};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;
use tracing::{debug, trace};

// === Constants ===

/// `"BM"` read as a little-endian u16.
const MAGIC: u16 = 0x4D42;
/// BITMAPFILEHEADER size.
const FILE_HEADER_SIZE: u32 = 14;
/// BITMAPINFOHEADER size.
const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the pixel array when nothing sits between header and pixels.
const PIXEL_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Only 24-bit pixels are supported.
const BITS_PER_PIXEL: u16 = 24;
/// BI_RGB.
const COMPRESSION_NONE: u32 = 0;
/// 72 DPI, the usual default written by image editors.
const DEFAULT_PELS_PER_METER: i32 = 2835;

// === Public types ===

/// Header fields that survive a decode/encode round-trip.
///
/// Width, height and sizes are derived from the [`Image`] on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfo {
    /// Rows stored top-down (negative `biHeight`).
    pub top_down: bool,
    /// Horizontal resolution.
    pub x_pels_per_meter: i32,
    /// Vertical resolution.
    pub y_pels_per_meter: i32,
    /// `biClrUsed`.
    pub colors_used: u32,
    /// `biClrImportant`.
    pub colors_important: u32,
}

impl Default for BmpInfo {
    fn default() -> Self {
        Self {
            top_down: false,
            x_pels_per_meter: DEFAULT_PELS_PER_METER,
            y_pels_per_meter: DEFAULT_PELS_PER_METER,
            colors_used: 0,
            colors_important: 0,
        }
    }
}

/// A decoded bitmap: top-down pixels plus the header fields to write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Pixels, top row first.
    pub image: Image,
    /// Header fields restored on write.
    pub info: BmpInfo,
}

impl Bitmap {
    /// Wraps an image with default header fields (bottom-up, 72 DPI).
    pub fn new(image: Image) -> Self {
        Self {
            image,
            info: BmpInfo::default(),
        }
    }
}

// === Headers ===

/// BITMAPFILEHEADER.
#[derive(Debug, Clone, Copy)]
struct FileHeader {
    kind: u16,
    file_size: u32,
    pixel_offset: u32,
}

impl FileHeader {
    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let kind = reader.read_u16::<LittleEndian>()?;
        let file_size = reader.read_u32::<LittleEndian>()?;
        let _reserved1 = reader.read_u16::<LittleEndian>()?;
        let _reserved2 = reader.read_u16::<LittleEndian>()?;
        let pixel_offset = reader.read_u32::<LittleEndian>()?;
        Ok(Self {
            kind,
            file_size,
            pixel_offset,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<LittleEndian>(self.kind)?;
        writer.write_u32::<LittleEndian>(self.file_size)?;
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u32::<LittleEndian>(self.pixel_offset)
    }
}

/// BITMAPINFOHEADER.
#[derive(Debug, Clone, Copy)]
struct InfoHeader {
    size: u32,
    width: i32,
    height: i32,
    planes: u16,
    bit_count: u16,
    compression: u32,
    image_size: u32,
    x_pels_per_meter: i32,
    y_pels_per_meter: i32,
    colors_used: u32,
    colors_important: u32,
}

impl InfoHeader {
    fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        Ok(Self {
            size: reader.read_u32::<LittleEndian>()?,
            width: reader.read_i32::<LittleEndian>()?,
            height: reader.read_i32::<LittleEndian>()?,
            planes: reader.read_u16::<LittleEndian>()?,
            bit_count: reader.read_u16::<LittleEndian>()?,
            compression: reader.read_u32::<LittleEndian>()?,
            image_size: reader.read_u32::<LittleEndian>()?,
            x_pels_per_meter: reader.read_i32::<LittleEndian>()?,
            y_pels_per_meter: reader.read_i32::<LittleEndian>()?,
            colors_used: reader.read_u32::<LittleEndian>()?,
            colors_important: reader.read_u32::<LittleEndian>()?,
        })
    }

    fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LittleEndian>(self.size)?;
        writer.write_i32::<LittleEndian>(self.width)?;
        writer.write_i32::<LittleEndian>(self.height)?;
        writer.write_u16::<LittleEndian>(self.planes)?;
        writer.write_u16::<LittleEndian>(self.bit_count)?;
        writer.write_u32::<LittleEndian>(self.compression)?;
        writer.write_u32::<LittleEndian>(self.image_size)?;
        writer.write_i32::<LittleEndian>(self.x_pels_per_meter)?;
        writer.write_i32::<LittleEndian>(self.y_pels_per_meter)?;
        writer.write_u32::<LittleEndian>(self.colors_used)?;
        writer.write_u32::<LittleEndian>(self.colors_important)
    }
}

/// Bytes per scanline including padding to a 4-byte boundary.
pub fn row_stride(width: usize) -> Option<usize> {
    width.checked_mul(3)?.checked_add(3).map(|n| n & !3)
}

/// Maps `UnexpectedEof` to a decode error naming what was cut short.
fn truncated(what: &'static str) -> impl FnOnce(io::Error) -> IoError {
    move |e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            IoError::DecodeError(format!("truncated {what}"))
        } else {
            IoError::Io(e)
        }
    }
}

// === BmpReader ===

/// BMP reader.
///
/// # Example
///
/// ```rust
/// use bmpfx_io::{BmpReader, ImageReader};
///
/// let reader = BmpReader::new();
/// assert!(reader.can_read(b"BM\x36\x00"));
/// assert!(!reader.can_read(b"\x89PNG"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpReader;

impl BmpReader {
    /// Creates a new BMP reader.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` if `header` starts with the BMP magic.
    pub fn can_read(&self, header: &[u8]) -> bool {
        header.len() >= 2 && u16::from_le_bytes([header[0], header[1]]) == MAGIC
    }

    /// Decodes a bitmap from any byte source positioned at the file start.
    pub fn read_from<R: Read>(&self, reader: &mut R) -> IoResult<Bitmap> {
        let file = FileHeader::read(reader).map_err(truncated("file header"))?;
        let info = InfoHeader::read(reader).map_err(truncated("info header"))?;
        debug!(
            width = info.width,
            height = info.height,
            bits = info.bit_count,
            compression = info.compression,
            offset = file.pixel_offset,
            "BMP header"
        );

        if file.kind != MAGIC
            || file.pixel_offset != PIXEL_OFFSET
            || info.size != INFO_HEADER_SIZE
            || info.bit_count != BITS_PER_PIXEL
            || info.compression != COMPRESSION_NONE
        {
            return Err(IoError::UnsupportedFormat(format!(
                "expected 24-bit uncompressed BMP 4.0 (type 0x{:04X}, offset {}, header {}, {} bpp, compression {})",
                file.kind, file.pixel_offset, info.size, info.bit_count, info.compression
            )));
        }
        if info.width < 0 {
            return Err(IoError::InvalidFile(format!("negative width {}", info.width)));
        }

        let width = info.width as usize;
        let height = info.height.unsigned_abs() as usize;
        let top_down = info.height < 0;
        let stride = row_stride(width)
            .ok_or_else(|| IoError::InvalidFile(format!("row size overflows for width {width}")))?;

        // Allocation follows the bytes read, never the claimed dimensions.
        let mut data: Vec<Bgr8> = Vec::new();
        let mut line = Vec::new();
        if stride > 0 {
            for _ in 0..height {
                line.clear();
                Read::take(&mut *reader, stride as u64).read_to_end(&mut line)?;
                if line.len() < stride {
                    return Err(IoError::DecodeError("truncated pixel data".into()));
                }
                data.try_reserve(width).map_err(|e| {
                    CoreError::allocation_failed(width.saturating_mul(height), e.to_string())
                })?;
                data.extend(
                    line.chunks_exact(3)
                        .take(width)
                        .map(|bgr| Bgr8::new(bgr[0], bgr[1], bgr[2])),
                );
            }
        }
        if !top_down {
            // bottom-up: reverse row order, keeping each row's pixel order
            data.reverse();
            for row in data.chunks_exact_mut(width.max(1)) {
                row.reverse();
            }
        }
        let image = Image::from_pixels(width, height, data)?;
        trace!(width, height, top_down, "decoded BMP");

        Ok(Bitmap {
            image,
            info: BmpInfo {
                top_down,
                x_pels_per_meter: info.x_pels_per_meter,
                y_pels_per_meter: info.y_pels_per_meter,
                colors_used: info.colors_used,
                colors_important: info.colors_important,
            },
        })
    }
}

impl ImageReader for BmpReader {
    fn read<P: AsRef<Path>>(&self, path: P) -> IoResult<Bitmap> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }

    fn read_from_memory(&self, data: &[u8]) -> IoResult<Bitmap> {
        let mut cursor = Cursor::new(data);
        self.read_from(&mut cursor)
    }
}

// === BmpWriter ===

/// BMP writer.
///
/// Always writes 24-bit BI_RGB with a 54-byte header; row order follows
/// [`BmpInfo::top_down`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpWriter;

impl BmpWriter {
    /// Creates a new BMP writer.
    pub fn new() -> Self {
        Self
    }

    /// Encodes a bitmap into any byte sink.
    pub fn write_to<W: Write>(&self, writer: &mut W, bitmap: &Bitmap) -> IoResult<()> {
        let image = &bitmap.image;
        let (width, height) = image.dimensions();
        let stride = row_stride(width)
            .ok_or_else(|| IoError::EncodeError(format!("row size overflows for width {width}")))?;

        let too_large = || IoError::EncodeError(format!("{width}x{height} is too large for BMP"));
        let image_size = stride
            .checked_mul(height)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size.checked_add(PIXEL_OFFSET).ok_or_else(too_large)?;
        let bi_width = i32::try_from(width).map_err(|_| too_large())?;
        let bi_height = i32::try_from(height).map_err(|_| too_large())?;

        let info = bitmap.info;
        FileHeader {
            kind: MAGIC,
            file_size,
            pixel_offset: PIXEL_OFFSET,
        }
        .write(writer)?;
        InfoHeader {
            size: INFO_HEADER_SIZE,
            width: bi_width,
            height: if info.top_down { -bi_height } else { bi_height },
            planes: 1,
            bit_count: BITS_PER_PIXEL,
            compression: COMPRESSION_NONE,
            image_size,
            x_pels_per_meter: info.x_pels_per_meter,
            y_pels_per_meter: info.y_pels_per_meter,
            colors_used: info.colors_used,
            colors_important: info.colors_important,
        }
        .write(writer)?;

        let mut line = vec![0u8; stride];
        for file_row in 0..height {
            let row = if info.top_down { file_row } else { height - 1 - file_row };
            for (bgr, px) in line.chunks_exact_mut(3).zip(image.row(row)) {
                bgr.copy_from_slice(&px.channels());
            }
            writer.write_all(&line)?;
        }
        trace!(width, height, top_down = info.top_down, file_size, "encoded BMP");

        Ok(())
    }
}

impl ImageWriter for BmpWriter {
    fn write<P: AsRef<Path>>(&self, path: P, bitmap: &Bitmap) -> IoResult<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, bitmap)?;
        writer.flush()?;
        Ok(())
    }

    fn write_to_memory(&self, bitmap: &Bitmap) -> IoResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, bitmap)?;
        Ok(buffer)
    }
}

// === Convenience functions ===

/// Reads a BMP file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    BmpReader::new().read(path)
}

/// Writes a BMP file.
pub fn write<P: AsRef<Path>>(path: P, bitmap: &Bitmap) -> IoResult<()> {
    BmpWriter::new().write(path, bitmap)
}
