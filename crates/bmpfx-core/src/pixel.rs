//! Pixel triple used by every bmpfx image.
//!
//! BMP files store 24-bit pixels in reversed channel order, so [`Bgr8`]
//! keeps the same field order: blue, green, red. There is no alpha.
//!
//! # Memory Layout
//!
//! `#[repr(C)]` with three `u8` fields, so a `[Bgr8]` has the same layout
//! as the packed BGR bytes of a BMP scanline (minus row padding).
//!
//! # Used By
//!
//! - `bmpfx-ops` - per-pixel and neighborhood transforms
//! - `bmpfx-io` - BMP reader/writer

use std::fmt;

/// An 8-bit-per-channel pixel in blue, green, red order.
///
/// # Example
///
/// ```
/// use bmpfx_core::Bgr8;
///
/// let orange = Bgr8::rgb(255, 128, 0);
/// assert_eq!(orange.blue, 0);
/// assert_eq!(orange.channels(), [0, 128, 255]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgr8 {
    /// Blue channel (0-255)
    pub blue: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Red channel (0-255)
    pub red: u8,
}

impl Bgr8 {
    /// All channels zero.
    pub const BLACK: Self = Self::gray(0);

    /// All channels 255.
    pub const WHITE: Self = Self::gray(255);

    /// Creates a pixel from channels in storage order (blue, green, red).
    #[inline]
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// Creates a pixel from channels in conventional (red, green, blue) order.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { blue, green, red }
    }

    /// Creates a pixel with the same value in all three channels.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Channels in storage order `[blue, green, red]`.
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Builds a pixel from channels in storage order `[blue, green, red]`.
    #[inline]
    pub const fn from_channels(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Channels widened to `u32`, in storage order.
    ///
    /// Used for snapshots and neighborhood sums so intermediate totals
    /// cannot overflow.
    #[inline]
    pub const fn widen(self) -> [u32; 3] {
        [self.blue as u32, self.green as u32, self.red as u32]
    }

    /// Narrows a widened triple back into a pixel.
    ///
    /// Values above 255 saturate; callers only pass values that came from
    /// [`widen`](Self::widen) or averages of them.
    #[inline]
    pub fn from_wide(c: [u32; 3]) -> Self {
        let narrow = |v: u32| u8::try_from(v).unwrap_or(u8::MAX);
        Self::new(narrow(c[0]), narrow(c[1]), narrow(c[2]))
    }

    /// Returns `true` when all three channels are equal.
    #[inline]
    pub const fn is_gray(self) -> bool {
        self.blue == self.green && self.green == self.red
    }
}

impl From<[u8; 3]> for Bgr8 {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::from_channels(c)
    }
}

impl From<Bgr8> for [u8; 3] {
    #[inline]
    fn from(px: Bgr8) -> Self {
        px.channels()
    }
}

impl fmt::Display for Bgr8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r={}, g={}, b={})", self.red, self.green, self.blue)
    }
}
