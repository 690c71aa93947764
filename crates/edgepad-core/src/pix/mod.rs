//! PixelBuffer - The owned raster container
//!
//! A `PixelBuffer` owns one contiguous byte buffer plus its width, height
//! and channel count.
//!
//! # Pixel layout
//!
//! - Rows are stored top to bottom with no padding between them
//! - Pixel `(x, y)` starts at byte `(y * width + x) * channels`
//! - Each pixel is `channels` bytes; channel order is opaque and never
//!   interpreted (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA are typical)
//!
//! # Ownership model
//!
//! `PixelBuffer` deliberately does not implement `Clone`. Ownership moves,
//! and a second copy of the pixel data only exists after an explicit call
//! to [`PixelBuffer::duplicate`]. [`PixelBuffer::take`] moves the buffer out
//! of a place that cannot be consumed by value and leaves the empty state
//! behind.

mod access;
mod border;

pub use border::clamp_index;

use crate::error::{Error, Result};

/// Owned pixel buffer with width, height and channel count.
///
/// The empty state (`width == height == channels == 0`, no bytes) is a
/// valid value: it is what [`Default`] produces and what [`take`] leaves
/// behind.
///
/// # Examples
///
/// ```
/// use edgepad_core::PixelBuffer;
///
/// let pix = PixelBuffer::new(640, 480, 3).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.data().len(), 640 * 480 * 3);
/// assert!(!pix.is_empty());
///
/// assert!(PixelBuffer::empty().is_empty());
/// ```
///
/// [`take`]: PixelBuffer::take
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per pixel
    channels: u32,
    /// Row-major pixel bytes, `width * height * channels` long
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer with the specified dimensions and channel count.
    ///
    /// The pixel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is 0.
    /// - [`Error::InvalidChannels`] if channels is 0.
    /// - [`Error::AllocationFailed`] if the byte count overflows or the
    ///   allocation cannot be satisfied.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        let len = Self::byte_len(width, height, channels)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed)?;
        data.resize(len, 0);

        Ok(PixelBuffer {
            width,
            height,
            channels,
            data,
        })
    }

    /// The empty buffer: no pixels, no backing bytes.
    pub const fn empty() -> Self {
        PixelBuffer {
            width: 0,
            height: 0,
            channels: 0,
            data: Vec::new(),
        }
    }

    /// Adopt an existing byte vector as pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len()` differs from
    /// `width * height * channels`, and the same errors as [`new`] for
    /// invalid geometry.
    ///
    /// [`new`]: PixelBuffer::new
    pub fn from_raw(width: u32, height: u32, channels: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(PixelBuffer {
            width,
            height,
            channels,
            data,
        })
    }

    /// Give up the buffer and return `(width, height, channels, data)`.
    pub fn into_raw(self) -> (u32, u32, u32, Vec<u8>) {
        (self.width, self.height, self.channels, self.data)
    }

    /// Byte length for the given geometry, validated.
    fn byte_len(width: u32, height: u32, channels: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or(Error::AllocationFailed)
    }

    /// Move the buffer out, leaving `self` in the empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgepad_core::PixelBuffer;
    ///
    /// let mut slot = PixelBuffer::new(2, 2, 1).unwrap();
    /// let owned = slot.take();
    /// assert!(slot.is_empty());
    /// assert_eq!(owned.width(), 2);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Make an independent copy of this buffer.
    ///
    /// This is the only way to obtain two buffers holding the same pixels.
    /// Duplicating the empty buffer yields the empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the copy cannot be allocated.
    pub fn duplicate(&self) -> Result<Self> {
        if self.is_empty() {
            return Ok(Self::empty());
        }

        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| Error::AllocationFailed)?;
        data.extend_from_slice(&self.data);

        Ok(PixelBuffer {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the number of bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Check whether this buffer owns no pixel data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get raw access to the pixel bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable raw access to the pixel bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Get the mutable bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of range (height {})", self.height);
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    /// Check if two buffers have the same width, height, and channel count.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }
}
