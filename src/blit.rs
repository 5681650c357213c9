//! Byte-level copies between pixel buffers.
//!
//! These skip per-pixel addressing entirely: whole rows (or whole byte ranges)
//! move with `copy_from_slice`. Unlike drawing, a bad region is reported as an
//! error rather than clipped.

use std::ops::{Range, RangeInclusive};

use crate::error::{Error, Result};
use crate::geometry::Bounds;
use crate::pixel_buffer::PixelBuffer;

impl PixelBuffer<'_> {
    /// Copy the common prefix of `src`'s bytes into this buffer.
    ///
    /// Returns the number of bytes copied. Layouts are not compared.
    pub fn copy_from(&mut self, src: &PixelBuffer<'_>) -> usize {
        let n = self.as_bytes().len().min(src.as_bytes().len());
        self.as_bytes_mut()[..n].copy_from_slice(&src.as_bytes()[..n]);
        log::trace!("copied {n} bytes");
        n
    }

    /// Copy the byte range `range` from `src` to the same range here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the range is inverted or exceeds either buffer.
    pub fn copy_range_from(&mut self, src: &PixelBuffer<'_>, range: Range<usize>) -> Result<()> {
        let limit = self.as_bytes().len().min(src.as_bytes().len());
        if range.start > range.end || range.end > limit {
            return Err(Error::OutOfRange(format!(
                "bytes {}..{} with {limit} bytes available",
                range.start, range.end
            )));
        }

        log::trace!("copying bytes {}..{}", range.start, range.end);
        self.as_bytes_mut()[range.clone()].copy_from_slice(&src.as_bytes()[range]);
        Ok(())
    }

    /// Copy the rows `rows` (inclusive, pixel coordinates) from `src`.
    ///
    /// An empty range copies nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] unless both buffers share stride,
    /// bounds and bytes-per-pixel, and [`Error::OutOfRange`] for rows outside
    /// the bounds.
    pub fn copy_rows_from(
        &mut self,
        src: &PixelBuffer<'_>,
        rows: RangeInclusive<i32>,
    ) -> Result<()> {
        ensure_same_layout(self, src)?;
        let (first, last) = (*rows.start(), *rows.end());
        if first > last {
            return Ok(());
        }

        let b = self.bounds();
        if first < b.min_y || last >= b.max_y {
            return Err(Error::OutOfRange(format!(
                "rows {first}..={last} outside {}..{}",
                b.min_y, b.max_y
            )));
        }

        let start = self.offset(b.min_x, first) as usize;
        let end = (self.offset(b.min_x, last) as usize + self.stride())
            .min(self.as_bytes().len())
            .min(src.as_bytes().len());

        log::trace!("copying rows {first}..={last} ({} bytes)", end - start);
        self.as_bytes_mut()[start..end].copy_from_slice(&src.as_bytes()[start..end]);
        Ok(())
    }

    /// Copy the pixels inside `rect` from `src` to the same place here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] unless both buffers share stride,
    /// bounds and bytes-per-pixel, and [`Error::OutOfRange`] if `rect` is not
    /// inside the bounds.
    pub fn copy_rect_from(&mut self, src: &PixelBuffer<'_>, rect: Bounds) -> Result<()> {
        ensure_same_layout(self, src)?;
        if !self.bounds().contains_bounds(&rect) {
            return Err(Error::OutOfRange(format!(
                "{rect:?} not inside {:?}",
                self.bounds()
            )));
        }
        if rect.is_empty() {
            return Ok(());
        }

        let row_bytes = rect.width() as usize * self.bytes_per_pixel();
        for y in rect.min_y..rect.max_y {
            let start = self.offset(rect.min_x, y) as usize;
            self.as_bytes_mut()[start..start + row_bytes]
                .copy_from_slice(&src.as_bytes()[start..start + row_bytes]);
        }
        log::trace!("copied rect {rect:?}");
        Ok(())
    }

    /// Copy all of `src` so that its top-left pixel lands on `(x, y)`.
    ///
    /// Strides may differ; bytes-per-pixel must match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LayoutMismatch`] for differing bytes-per-pixel and
    /// [`Error::OutOfRange`] if the placed image would leave the bounds.
    pub fn place_at(&mut self, src: &PixelBuffer<'_>, x: i32, y: i32) -> Result<()> {
        if self.bytes_per_pixel() != src.bytes_per_pixel() {
            return Err(Error::LayoutMismatch(format!(
                "{} vs {} bytes per pixel",
                self.bytes_per_pixel(),
                src.bytes_per_pixel()
            )));
        }

        let b = self.bounds();
        let (w, h) = (src.width(), src.height());
        let fits = i64::from(x) >= i64::from(b.min_x)
            && i64::from(y) >= i64::from(b.min_y)
            && i64::from(x) + w <= i64::from(b.max_x)
            && i64::from(y) + h <= i64::from(b.max_y);
        if !fits {
            return Err(Error::OutOfRange(format!(
                "{w}x{h} at ({x}, {y}) not inside {b:?}"
            )));
        }

        let s = src.bounds();
        let row_bytes = w as usize * src.bytes_per_pixel();
        for row in 0..h as i32 {
            let dst_start = self.offset(x, y + row) as usize;
            let src_start = src.offset(s.min_x, s.min_y + row) as usize;
            self.as_bytes_mut()[dst_start..dst_start + row_bytes]
                .copy_from_slice(&src.as_bytes()[src_start..src_start + row_bytes]);
        }
        log::trace!("placed {w}x{h} at ({x}, {y})");
        Ok(())
    }
}

fn ensure_same_layout(dst: &PixelBuffer<'_>, src: &PixelBuffer<'_>) -> Result<()> {
    if dst.stride() != src.stride()
        || dst.bounds() != src.bounds()
        || dst.bytes_per_pixel() != src.bytes_per_pixel()
    {
        return Err(Error::LayoutMismatch(format!(
            "stride {}/{}, bounds {:?}/{:?}, {}/{} bytes per pixel",
            dst.stride(),
            src.stride(),
            dst.bounds(),
            src.bounds(),
            dst.bytes_per_pixel(),
            src.bytes_per_pixel()
        )));
    }
    Ok(())
}
