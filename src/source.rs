//! Adapting external image containers.
//!
//! Any type that can hand out its pixel bytes, stride and bounds implements
//! [`PixelSource`] and can be wrapped by
//! [`PixelBuffer::from_source`](crate::pixel_buffer::PixelBuffer::from_source).
//! No common base type is required.

use crate::error::{Error, Result};
use crate::geometry::Bounds;

/// Capability interface for "pixel-buffer-shaped" objects.
///
/// The pixel at `(x, y)` is expected to start at
/// `(y - bounds.min_y) * stride + (x - bounds.min_x) * bytes_per_pixel`.
pub trait PixelSource {
    /// Byte distance between the starts of consecutive rows.
    fn stride(&self) -> usize;

    /// Addressable pixel window.
    fn bounds(&self) -> Bounds;

    /// Mutable access to the packed pixel bytes.
    fn pixels_mut(&mut self) -> &mut [u8];

    /// Bytes per pixel, if the container knows it.
    ///
    /// Returning `None` makes the buffer infer it as `len / (width * height)`,
    /// which is only right for unpadded rows.
    fn bytes_per_pixel(&self) -> Option<usize> {
        None
    }
}

/// Owned, zero-initialised packed image.
///
/// # Example
///
/// ```
/// use pixbuf_raster::source::{PixelSource, RawImage};
///
/// let img = RawImage::new(10, 10, 4).unwrap();
/// assert_eq!(img.stride(), 40);
/// assert_eq!(img.pixels().len(), 400);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pixels: Vec<u8>,
    stride: usize,
    bounds: Bounds,
    bytes_per_pixel: usize,
}

impl RawImage {
    /// Create a tightly packed image at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is not positive, or `bytes_per_pixel` is zero.
    pub fn new(width: i32, height: i32, bytes_per_pixel: usize) -> Result<Self> {
        Self::with_layout(Bounds::from_size(width, height), bytes_per_pixel, 0)
    }

    /// Create an image whose rows are padded by `padding` extra bytes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RawImage::new`].
    pub fn with_padding(
        width: i32,
        height: i32,
        bytes_per_pixel: usize,
        padding: usize,
    ) -> Result<Self> {
        Self::with_layout(Bounds::from_size(width, height), bytes_per_pixel, padding)
    }

    /// Create an image covering `bounds`, which need not start at the origin.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RawImage::new`].
    pub fn with_bounds(bounds: Bounds, bytes_per_pixel: usize) -> Result<Self> {
        Self::with_layout(bounds, bytes_per_pixel, 0)
    }

    fn with_layout(bounds: Bounds, bytes_per_pixel: usize, padding: usize) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::InvalidDimensions {
                width: bounds.width(),
                height: bounds.height(),
            });
        }
        if bytes_per_pixel == 0 {
            return Err(Error::InvalidBytesPerPixel);
        }

        let stride = bounds.width() as usize * bytes_per_pixel + padding;
        let pixels = vec![0; stride * bounds.height() as usize];

        Ok(Self {
            pixels,
            stride,
            bounds,
            bytes_per_pixel,
        })
    }

    /// Raw pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes of the pixel at `(x, y)`, or `None` outside the bounds.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let start = (i64::from(y) - i64::from(self.bounds.min_y)) as usize * self.stride
            + (i64::from(x) - i64::from(self.bounds.min_x)) as usize * self.bytes_per_pixel;
        self.pixels.get(start..start + self.bytes_per_pixel)
    }
}

impl PixelSource for RawImage {
    fn stride(&self) -> usize {
        self.stride
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn bytes_per_pixel(&self) -> Option<usize> {
        // Padded rows defeat len / (width * height) inference.
        (self.stride != self.bounds.width() as usize * self.bytes_per_pixel)
            .then_some(self.bytes_per_pixel)
    }
}
