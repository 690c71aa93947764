//! Pixel access functions
//!
//! Getting, setting and copying individual pixels. A pixel is always
//! handled as a slice of `channels` bytes.

use super::PixelBuffer;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// Byte offset of pixel `(x, y)`. Callers check bounds.
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Get the bytes of pixel `(x, y)`.
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixel_unchecked(x, y))
    }

    /// Get the bytes of pixel `(x, y)` without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[u8] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        let start = self.pixel_offset(x, y);
        &self.data[start..start + self.channels as usize]
    }

    /// Set pixel `(x, y)` to `value`.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    /// - [`Error::SizeMismatch`] if `value.len()` differs from the channel
    ///   count.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[u8]) -> Result<()> {
        if x >= self.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height as usize,
            });
        }
        if value.len() != self.channels as usize {
            return Err(Error::SizeMismatch {
                expected: self.channels as usize,
                actual: value.len(),
            });
        }

        let start = self.pixel_offset(x, y);
        self.data[start..start + value.len()].copy_from_slice(value);
        Ok(())
    }

    /// Set every pixel to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `value.len()` differs from the
    /// channel count.
    pub fn fill(&mut self, value: &[u8]) -> Result<()> {
        if value.len() != self.channels as usize {
            return Err(Error::SizeMismatch {
                expected: self.channels as usize,
                actual: value.len(),
            });
        }
        for px in self.data.chunks_exact_mut(value.len()) {
            px.copy_from_slice(value);
        }
        Ok(())
    }

    /// Copy pixel `(src_x, src_y)` of `self` into pixel `(dst_x, dst_y)` of
    /// `dst`.
    ///
    /// Exactly `channels` bytes are copied.
    ///
    /// # Panics
    ///
    /// Panics if the channel counts differ or either coordinate lies
    /// outside its buffer. These conditions can only come from wrong
    /// coordinate arithmetic in the caller.
    pub fn copy_pixel(
        &self,
        src_x: u32,
        src_y: u32,
        dst: &mut PixelBuffer,
        dst_x: u32,
        dst_y: u32,
    ) {
        assert_eq!(
            self.channels, dst.channels,
            "copy_pixel: channel count mismatch"
        );
        assert!(
            src_x < self.width && src_y < self.height,
            "copy_pixel: source ({src_x}, {src_y}) out of range for {}x{}",
            self.width,
            self.height
        );
        assert!(
            dst_x < dst.width && dst_y < dst.height,
            "copy_pixel: destination ({dst_x}, {dst_y}) out of range for {}x{}",
            dst.width,
            dst.height
        );

        let n = self.channels as usize;
        let src = self.pixel_offset(src_x, src_y);
        let dst_off = dst.pixel_offset(dst_x, dst_y);
        dst.data[dst_off..dst_off + n].copy_from_slice(&self.data[src..src + n]);
    }
}
