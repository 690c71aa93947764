//! Border operations for images
//!
//! Adding a border filled by edge replication, and removing a border:
//!
//! - Uniform borders (same size on all sides)
//! - General borders (different size per side)
//!
//! Replication follows the edge-clamp rule: destination pixel `(dx, dy)`
//! takes source pixel `(clamp(dx - left), clamp(dy - top))`, where `clamp`
//! pins an index into `0..len` (see [`clamp_index`]). Corner blocks
//! therefore repeat the corner pixel and edge strips repeat the adjacent
//! row or column.

use super::PixelBuffer;
use crate::error::{Error, Result};

/// Pin a possibly out-of-range index into `0..len`.
///
/// # Panics
///
/// Panics if `len == 0`.
///
/// # Examples
///
/// ```
/// use edgepad_core::clamp_index;
///
/// assert_eq!(clamp_index(-3, 5), 0);
/// assert_eq!(clamp_index(2, 5), 2);
/// assert_eq!(clamp_index(9, 5), 4);
/// ```
#[inline]
pub fn clamp_index(i: i64, len: u32) -> u32 {
    assert!(len > 0, "clamp_index: empty range");
    i.clamp(0, i64::from(len) - 1) as u32
}

impl PixelBuffer {
    /// Add a uniform border filled by replicating the nearest edge pixel.
    ///
    /// Creates a new buffer with `margin` pixels of border on all sides.
    /// A margin of 0 yields an exact copy of the source.
    ///
    /// # Returns
    ///
    /// New buffer with dimensions `(width + 2*margin, height + 2*margin)`
    /// and the same channel count.
    ///
    /// # Errors
    ///
    /// - [`Error::NullInput`] if the source is empty.
    /// - [`Error::InvalidDimension`] if the result dimensions overflow.
    /// - [`Error::AllocationFailed`] if the result cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgepad_core::PixelBuffer;
    ///
    /// let src = PixelBuffer::from_raw(2, 1, 1, vec![10, 20]).unwrap();
    /// let dst = src.expand_by_replication(1).unwrap();
    /// assert_eq!(dst.width(), 4);
    /// assert_eq!(dst.height(), 3);
    /// assert_eq!(dst.row(0), &[10, 10, 20, 20]);
    /// ```
    pub fn expand_by_replication(&self, margin: u32) -> Result<PixelBuffer> {
        self.expand_by_replication_general(margin, margin, margin, margin)
    }

    /// Add a replicated border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New buffer with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Same as [`expand_by_replication`](PixelBuffer::expand_by_replication).
    pub fn expand_by_replication_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
    ) -> Result<PixelBuffer> {
        if self.is_empty() {
            return Err(Error::NullInput("expand_by_replication: empty source"));
        }

        let w = self.width;
        let h = self.height;
        let overflow = || Error::InvalidDimension {
            width: w,
            height: h,
        };
        let wd = w
            .checked_add(left)
            .and_then(|v| v.checked_add(right))
            .ok_or_else(overflow)?;
        let hd = h
            .checked_add(top)
            .and_then(|v| v.checked_add(bot))
            .ok_or_else(overflow)?;

        let mut dst = PixelBuffer::new(wd, hd, self.channels)?;

        // Rows that map to a source row one-to-one
        let left_bytes = left as usize * self.channels as usize;
        let src_stride = self.stride();
        for sy in 0..h {
            let dy = sy + top;
            for dx in 0..left {
                self.copy_pixel(0, sy, &mut dst, dx, dy);
            }
            dst.row_mut(dy)[left_bytes..left_bytes + src_stride].copy_from_slice(self.row(sy));
            for dx in (left + w)..wd {
                self.copy_pixel(w - 1, sy, &mut dst, dx, dy);
            }
        }

        // Top and bottom strips repeat the first and last assembled rows
        let dst_stride = dst.stride();
        let first = top as usize * dst_stride;
        for dy in 0..top as usize {
            dst.data.copy_within(first..first + dst_stride, dy * dst_stride);
        }
        let last = (top + h - 1) as usize * dst_stride;
        for dy in (top + h) as usize..hd as usize {
            dst.data.copy_within(last..last + dst_stride, dy * dst_stride);
        }

        Ok(dst)
    }

    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New buffer with dimensions `(width - 2*margin, height - 2*margin)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the border is at least as
    /// large as the image, and [`Error::NullInput`] for an empty source.
    pub fn remove_border(&self, margin: u32) -> Result<PixelBuffer> {
        self.remove_border_general(margin, margin, margin, margin)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Returns
    ///
    /// New buffer with dimensions `(width - left - right, height - top - bot)`.
    ///
    /// # Errors
    ///
    /// Same as [`remove_border`](PixelBuffer::remove_border).
    pub fn remove_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
    ) -> Result<PixelBuffer> {
        if self.is_empty() {
            return Err(Error::NullInput("remove_border: empty source"));
        }

        let horiz = u64::from(left) + u64::from(right);
        let vert = u64::from(top) + u64::from(bot);
        if horiz >= u64::from(self.width) || vert >= u64::from(self.height) {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) too large for {}x{} image",
                self.width, self.height
            )));
        }

        let wd = self.width - left - right;
        let hd = self.height - top - bot;
        let mut dst = PixelBuffer::new(wd, hd, self.channels)?;

        let start = left as usize * self.channels as usize;
        let len = dst.stride();
        for dy in 0..hd {
            dst.row_mut(dy)
                .copy_from_slice(&self.row(dy + top)[start..start + len]);
        }

        Ok(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buffer whose every byte differs from its neighbours'.
    fn numbered(w: u32, h: u32, c: u32) -> PixelBuffer {
        let len = (w * h * c) as usize;
        PixelBuffer::from_raw(w, h, c, (0..len).map(|i| (i % 251) as u8).collect()).unwrap()
    }

    /// Direct per-pixel evaluation of the clamp formula.
    fn expand_reference(src: &PixelBuffer, l: u32, r: u32, t: u32, b: u32) -> PixelBuffer {
        let wd = src.width() + l + r;
        let hd = src.height() + t + b;
        let mut dst = PixelBuffer::new(wd, hd, src.channels()).unwrap();
        for dy in 0..hd {
            for dx in 0..wd {
                let sx = clamp_index(i64::from(dx) - i64::from(l), src.width());
                let sy = clamp_index(i64::from(dy) - i64::from(t), src.height());
                dst.set_pixel(dx, dy, src.pixel_unchecked(sx, sy)).unwrap();
            }
        }
        dst
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-1, 5), 0);
        assert_eq!(clamp_index(0, 5), 0);
        assert_eq!(clamp_index(4, 5), 4);
        assert_eq!(clamp_index(5, 5), 4);
        assert_eq!(clamp_index(i64::MAX, 5), 4);
        for i in -8..=8 {
            assert_eq!(clamp_index(i, 1), 0);
        }
    }

    #[test]
    fn test_expand_matches_clamp_formula() {
        for &(w, h) in &[(1, 1), (1, 5), (5, 1), (2, 2), (3, 7), (8, 4)] {
            for c in 1..=4 {
                let src = numbered(w, h, c);
                for margin in 0..=4 {
                    let got = src.expand_by_replication(margin).unwrap();
                    let want = expand_reference(&src, margin, margin, margin, margin);
                    assert_eq!(got, want, "w={w} h={h} c={c} margin={margin}");
                }
            }
        }
    }

    #[test]
    fn test_expand_general_matches_clamp_formula() {
        let src = numbered(4, 3, 3);
        for &(l, r, t, b) in &[(0, 1, 2, 3), (3, 0, 0, 1), (1, 2, 0, 0), (0, 0, 4, 0)] {
            let got = src.expand_by_replication_general(l, r, t, b).unwrap();
            let want = expand_reference(&src, l, r, t, b);
            assert_eq!(got, want, "borders=({l}, {r}, {t}, {b})");
        }
    }

    #[test]
    fn test_expand_zero_margin_is_identity() {
        let src = numbered(5, 3, 4);
        let dst = src.expand_by_replication(0).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn test_expand_dimensions() {
        let src = numbered(7, 3, 2);
        let dst = src.expand_by_replication(5).unwrap();
        assert_eq!(dst.width(), 17);
        assert_eq!(dst.height(), 13);
        assert_eq!(dst.channels(), 2);
    }

    #[test]
    fn test_expand_single_pixel_is_uniform() {
        let src = PixelBuffer::from_raw(1, 1, 3, vec![11, 22, 33]).unwrap();
        let dst = src.expand_by_replication(3).unwrap();
        assert_eq!(dst.width(), 7);
        assert_eq!(dst.height(), 7);
        assert!(dst.data().chunks_exact(3).all(|px| px == [11, 22, 33]));
    }

    #[test]
    fn test_expand_corners_and_edges() {
        let src = numbered(3, 3, 1);
        let m = 2;
        let dst = src.expand_by_replication(m).unwrap();

        for dy in 0..m {
            for dx in 0..m {
                assert_eq!(dst.pixel(dx, dy), src.pixel(0, 0));
                assert_eq!(dst.pixel(3 + m + dx, dy), src.pixel(2, 0));
                assert_eq!(dst.pixel(dx, 3 + m + dy), src.pixel(0, 2));
                assert_eq!(dst.pixel(3 + m + dx, 3 + m + dy), src.pixel(2, 2));
            }
        }
        for y in 0..3 {
            for dx in 0..m {
                assert_eq!(dst.pixel(dx, y + m), src.pixel(0, y));
                assert_eq!(dst.pixel(3 + m + dx, y + m), src.pixel(2, y));
            }
        }
        for x in 0..3 {
            for dy in 0..m {
                assert_eq!(dst.pixel(x + m, dy), src.pixel(x, 0));
                assert_eq!(dst.pixel(x + m, 3 + m + dy), src.pixel(x, 2));
            }
        }
    }

    #[test]
    fn test_expand_empty_source() {
        let src = PixelBuffer::empty();
        assert!(matches!(
            src.expand_by_replication(2),
            Err(Error::NullInput(_))
        ));
    }

    #[test]
    fn test_expand_overflow() {
        let src = numbered(2, 2, 1);
        assert!(matches!(
            src.expand_by_replication(u32::MAX / 2 + 1),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_remove_border_inverts_expand() {
        let src = numbered(6, 4, 3);
        for margin in 0..=3 {
            let expanded = src.expand_by_replication(margin).unwrap();
            let restored = expanded.remove_border(margin).unwrap();
            assert_eq!(restored, src);
        }
        let expanded = src.expand_by_replication_general(1, 2, 3, 0).unwrap();
        let restored = expanded.remove_border_general(1, 2, 3, 0).unwrap();
        assert_eq!(restored, src);
    }

    #[test]
    fn test_remove_border_too_large() {
        let src = numbered(4, 4, 1);
        assert!(matches!(
            src.remove_border(2),
            Err(Error::InvalidParameter(_))
        ));
        assert!(src.remove_border_general(3, 0, 0, 0).is_ok());
        assert!(src.remove_border_general(4, 0, 0, 0).is_err());
    }
}
