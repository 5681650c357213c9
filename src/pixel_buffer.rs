//! Borrowed packed pixel buffer.
//!
//! [`PixelBuffer`] wraps a caller-owned byte array with a stride, bounds and a
//! fixed bytes-per-pixel. It never allocates. Writes go straight to the bytes,
//! skipping any color conversion.
//!
//! # Clipping
//!
//! [`PixelBuffer::write_pixel`] is built for very high call rates and reports
//! nothing: an oversized pattern or an offset outside the byte array is a no-op.
//! The check is on the byte offset, not on the rectangle, so a column just past
//! the right edge lands at the start of the next row. Use
//! [`PixelBuffer::try_write_pixel`] where strict rectangle checks are wanted.

use crate::error::{Error, Result};
use crate::geometry::Bounds;
use crate::source::PixelSource;

/// Mutable view of a packed pixel array.
///
/// The pixel at `(x, y)` starts at byte
/// `(y - min_y) * stride + (x - min_x) * bytes_per_pixel`.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    /// Packed pixel bytes, owned by the caller.
    data: &'a mut [u8],
    /// Byte distance between row starts (may include padding).
    stride: usize,
    /// Addressable window in pixel coordinates.
    bounds: Bounds,
    /// Fixed pixel width in bytes.
    bpp: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data`, inferring bytes-per-pixel as `len / (width * height)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are empty, the division is not exact, or
    /// the stride and length cannot hold every pixel.
    ///
    /// # Example
    ///
    /// ```
    /// use pixbuf_raster::geometry::Bounds;
    /// use pixbuf_raster::pixel_buffer::PixelBuffer;
    ///
    /// let mut data = vec![0u8; 10 * 10 * 4];
    /// let buf = PixelBuffer::new(&mut data, 40, Bounds::from_size(10, 10)).unwrap();
    /// assert_eq!(buf.bytes_per_pixel(), 4);
    /// ```
    pub fn new(data: &'a mut [u8], stride: usize, bounds: Bounds) -> Result<Self> {
        let bpp = infer_bytes_per_pixel(data.len(), bounds)?;
        Self::with_bytes_per_pixel(data, stride, bounds, bpp)
    }

    /// Wrap `data` with an explicit bytes-per-pixel.
    ///
    /// Needed when rows carry padding, where `len / (width * height)` is wrong.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are empty, `bpp` is zero, or the stride
    /// and length cannot hold every pixel.
    pub fn with_bytes_per_pixel(
        data: &'a mut [u8],
        stride: usize,
        bounds: Bounds,
        bpp: usize,
    ) -> Result<Self> {
        if let Err(e) = validate_layout(data.len(), stride, bounds, bpp) {
            log::warn!("rejecting pixel layout: {e}");
            return Err(e);
        }

        log::debug!(
            "pixel buffer {}x{} at ({}, {}), stride {stride}, {bpp} bytes/pixel",
            bounds.width(),
            bounds.height(),
            bounds.min_x,
            bounds.min_y,
        );

        Ok(Self {
            data,
            stride,
            bounds,
            bpp,
        })
    }

    /// Adapt an external image container.
    ///
    /// Bytes-per-pixel comes from [`PixelSource::bytes_per_pixel`] when the
    /// source reports it, and is inferred otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleSource`] naming the source type when its
    /// layout is unusable.
    pub fn from_source<S: PixelSource + ?Sized>(source: &'a mut S) -> Result<Self> {
        let stride = source.stride();
        let bounds = source.bounds();
        let reported = source.bytes_per_pixel();
        let data = source.pixels_mut();

        let wrap = |reason: Error| Error::IncompatibleSource {
            source_type: std::any::type_name::<S>(),
            reason: Box::new(reason),
        };

        let bpp = match reported {
            Some(bpp) => bpp,
            None => infer_bytes_per_pixel(data.len(), bounds).map_err(wrap)?,
        };
        Self::with_bytes_per_pixel(data, stride, bounds, bpp).map_err(wrap)
    }

    /// Byte distance between row starts.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Addressable window.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Bytes per pixel.
    #[must_use]
    pub const fn bytes_per_pixel(&self) -> usize {
        self.bpp
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.bounds.width()
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.bounds.height()
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &*self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }

    /// Byte offset of `(x, y)`. Not bounds checked; may be negative.
    #[inline]
    #[must_use]
    pub fn offset(&self, x: i32, y: i32) -> isize {
        let row = (y as isize - self.bounds.min_y as isize).saturating_mul(self.stride as isize);
        let col = (x as isize - self.bounds.min_x as isize).saturating_mul(self.bpp as isize);
        row.saturating_add(col)
    }

    /// Copy `pattern` into the pixel at `(x, y)`.
    ///
    /// Only the leading `pattern.len()` bytes of the pixel change. Does nothing
    /// if the pattern is longer than a pixel or the bytes fall outside the array.
    #[inline]
    pub fn write_pixel(&mut self, x: i32, y: i32, pattern: &[u8]) {
        if pattern.len() > self.bpp {
            return;
        }

        let o = self.offset(x, y);
        if o < 0 {
            return;
        }
        let o = o as usize;

        if let Some(dst) = self.data.get_mut(o..o + pattern.len()) {
            dst.copy_from_slice(pattern);
        }
    }

    /// Checked variant of [`write_pixel`](Self::write_pixel).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PatternTooLong`] or [`Error::OutOfBounds`] instead of
    /// skipping the write. Points outside the rectangle are rejected even when
    /// their offset is inside the array.
    pub fn try_write_pixel(&mut self, x: i32, y: i32, pattern: &[u8]) -> Result<()> {
        if pattern.len() > self.bpp {
            return Err(Error::PatternTooLong {
                len: pattern.len(),
                bytes_per_pixel: self.bpp,
            });
        }
        if !self.bounds.contains(x, y) {
            return Err(Error::OutOfBounds { x, y });
        }

        self.write_pixel(x, y, pattern);
        Ok(())
    }

    /// Bytes of the pixel at `(x, y)`, or `None` outside the bounds.
    #[must_use]
    pub fn read_pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let o = self.offset(x, y) as usize;
        self.data.get(o..o + self.bpp)
    }

    /// Write `pattern` into every pixel inside the bounds, skipping row padding.
    pub fn fill(&mut self, pattern: &[u8]) {
        if pattern.is_empty() || pattern.len() > self.bpp {
            return;
        }

        let row_bytes = self.width() as usize * self.bpp;
        let rows = self.height() as usize;
        for row in self.data.chunks_mut(self.stride).take(rows) {
            let Some(row) = row.get_mut(..row_bytes) else {
                break;
            };
            for px in row.chunks_exact_mut(self.bpp) {
                px[..pattern.len()].copy_from_slice(pattern);
            }
        }
    }

    /// Split into two buffers over rows `[min_y, y)` and `[y, max_y)`.
    ///
    /// `y` is clamped to the bounds, so one half may be empty. The halves share
    /// no bytes and can be drawn on from different threads.
    #[must_use]
    pub fn split_at_row(self, y: i32) -> (PixelBuffer<'a>, PixelBuffer<'a>) {
        let Self {
            data,
            stride,
            bounds,
            bpp,
        } = self;

        let y = y.clamp(bounds.min_y, bounds.max_y);
        let at = ((i64::from(y) - i64::from(bounds.min_y)) as usize * stride).min(data.len());
        let (top, bottom) = data.split_at_mut(at);

        (
            PixelBuffer {
                data: top,
                stride,
                bounds: Bounds { max_y: y, ..bounds },
                bpp,
            },
            PixelBuffer {
                data: bottom,
                stride,
                bounds: Bounds { min_y: y, ..bounds },
                bpp,
            },
        )
    }
}

/// `len / (width * height)`, requiring an exact, non-zero quotient.
fn infer_bytes_per_pixel(len: usize, bounds: Bounds) -> Result<usize> {
    if bounds.is_empty() {
        return Err(Error::InvalidDimensions {
            width: bounds.width(),
            height: bounds.height(),
        });
    }

    let pixels = usize::try_from(bounds.width())
        .ok()
        .zip(usize::try_from(bounds.height()).ok())
        .and_then(|(w, h)| w.checked_mul(h));
    // More pixels than addressable bytes can never divide evenly.
    let Some(pixels) = pixels else {
        return Err(Error::UnevenPixelSize {
            len,
            pixels: usize::MAX,
        });
    };
    if len == 0 || len % pixels != 0 {
        return Err(Error::UnevenPixelSize { len, pixels });
    }
    Ok(len / pixels)
}

fn validate_layout(len: usize, stride: usize, bounds: Bounds, bpp: usize) -> Result<()> {
    if bounds.is_empty() {
        return Err(Error::InvalidDimensions {
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    if bpp == 0 {
        return Err(Error::InvalidBytesPerPixel);
    }

    let overflow = Error::LayoutOverflow {
        stride,
        bytes_per_pixel: bpp,
    };
    // Offsets are computed in isize.
    if isize::try_from(stride).is_err() {
        return Err(overflow);
    }

    let width = usize::try_from(bounds.width()).map_err(|_| overflow.clone())?;
    let height = usize::try_from(bounds.height()).map_err(|_| overflow.clone())?;

    let Some(row_bytes) = width.checked_mul(bpp) else {
        return Err(overflow);
    };
    if stride < row_bytes {
        return Err(Error::StrideTooSmall { stride, row_bytes });
    }

    // Last pixel of the last row must fit.
    let Some(required) = stride
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(row_bytes))
    else {
        return Err(overflow);
    };
    if len < required {
        return Err(Error::BufferTooShort { len, required });
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Offsets follow `(y - min_y) * stride + (x - min_x) * bpp`.
        #[test]
        fn prop_offset_matches_formula(
            min_x in -1000..1000i32,
            min_y in -1000..1000i32,
            bpp in 1usize..=8,
            padding in 0usize..16,
            x in -2000..2000i32,
            y in -2000..2000i32,
        ) {
            let (w, h) = (8, 4);
            let stride = w * bpp + padding;
            let mut data = vec![0u8; stride * h];
            let bounds = Bounds::new(min_x, min_y, min_x + w as i32, min_y + h as i32);
            let buf = PixelBuffer::with_bytes_per_pixel(&mut data, stride, bounds, bpp).unwrap();

            let expected = (i64::from(y) - i64::from(min_y)) * stride as i64
                + (i64::from(x) - i64::from(min_x)) * bpp as i64;
            prop_assert_eq!(buf.offset(x, y) as i64, expected);
        }

        /// Every in-bounds pixel maps to a distinct slot inside the array.
        #[test]
        fn prop_in_bounds_offsets_fit(
            w in 1i32..16,
            h in 1i32..16,
            bpp in 1usize..=4,
            padding in 0usize..8,
        ) {
            let stride = w as usize * bpp + padding;
            let mut data = vec![0u8; stride * h as usize];
            let buf = PixelBuffer::with_bytes_per_pixel(
                &mut data,
                stride,
                Bounds::from_size(w, h),
                bpp,
            )
            .unwrap();

            let mut seen = std::collections::HashSet::new();
            for y in 0..h {
                for x in 0..w {
                    let o = buf.offset(x, y);
                    prop_assert!(o >= 0);
                    prop_assert!(o as usize + bpp <= buf.as_bytes().len());
                    prop_assert!(seen.insert(o));
                }
            }
        }
    }
}
