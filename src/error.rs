//! Error types for pixbuf-raster operations.
//!
//! Only construction and buffer copies can fail. Draw calls clip silently and
//! never produce an [`Error`].

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or copying pixel buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bounds describe an empty or inverted rectangle.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width in pixels.
        width: i64,
        /// Height in pixels.
        height: i64,
    },

    /// Byte count is not an exact multiple of the pixel count.
    #[error("Cannot infer bytes per pixel: {len} bytes for {pixels} pixels")]
    UnevenPixelSize {
        /// Length of the byte array.
        len: usize,
        /// Number of pixels covered by the bounds.
        pixels: usize,
    },

    /// Explicit bytes-per-pixel of zero.
    #[error("Bytes per pixel must be positive")]
    InvalidBytesPerPixel,

    /// Stride shorter than one row of pixels.
    #[error("Stride {stride} is shorter than a row of {row_bytes} bytes")]
    StrideTooSmall {
        /// Supplied stride.
        stride: usize,
        /// `width * bytes_per_pixel`.
        row_bytes: usize,
    },

    /// Byte array cannot hold the last pixel of the last row.
    #[error("Pixel data too short: {len} bytes, need {required}")]
    BufferTooShort {
        /// Length of the byte array.
        len: usize,
        /// Minimum length for the layout.
        required: usize,
    },

    /// Layout sizes do not fit in the address space.
    #[error("Pixel layout overflows: stride {stride}, {bytes_per_pixel} bytes per pixel")]
    LayoutOverflow {
        /// Supplied stride.
        stride: usize,
        /// Supplied bytes per pixel.
        bytes_per_pixel: usize,
    },

    /// A [`PixelSource`](crate::source::PixelSource) exposed an unusable layout.
    #[error("Incompatible pixel source {source_type}: {reason}")]
    IncompatibleSource {
        /// Rust type name of the source object.
        source_type: &'static str,
        /// Underlying layout error.
        #[source]
        reason: Box<Error>,
    },

    /// Pattern longer than one pixel (checked writes only).
    #[error("Pattern of {len} bytes exceeds {bytes_per_pixel} bytes per pixel")]
    PatternTooLong {
        /// Pattern length.
        len: usize,
        /// Buffer bytes per pixel.
        bytes_per_pixel: usize,
    },

    /// Point outside the buffer bounds (checked writes only).
    #[error("Point ({x}, {y}) is outside the buffer bounds")]
    OutOfBounds {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },

    /// Source and destination buffers do not share a compatible layout.
    #[error("Layout mismatch: {0}")]
    LayoutMismatch(String),

    /// Copy region falls outside one of the buffers.
    #[error("Region out of range: {0}")]
    OutOfRange(String),
}
