//! # pixbuf-raster
//!
//! Allocation-free rasterization of lines and circles directly on packed pixel
//! buffers.
//!
//! A [`PixelBuffer`](pixel_buffer::PixelBuffer) borrows an existing byte array
//! together with its stride, bounds and bytes-per-pixel. Drawing writes caller
//! supplied byte patterns straight into that array, with no color conversion,
//! so any fixed-width pixel format works.
//!
//! ## Features
//!
//! - **Format agnostic**: patterns of 1..=bpp bytes; shorter patterns leave the
//!   trailing channels (e.g. alpha) untouched
//! - **Silent clipping**: out-of-buffer writes are skipped, never reported
//! - **Span fill**: filled circles draw O(radius) horizontal spans
//! - **Row partitioning**: split a buffer into disjoint row bands for threads
//!
//! ## Quick Start
//!
//! ```rust
//! use pixbuf_raster::prelude::*;
//!
//! let mut img = RawImage::new(10, 10, 4)?;
//! let mut buf = PixelBuffer::from_source(&mut img)?;
//!
//! draw_filled_circle(&mut buf, 5, 5, 2, &Rgba::GREEN.to_array());
//! draw_hline(&mut buf, 0, 9, 9, &Rgba::RED.rgb_bytes());
//!
//! assert_eq!(buf.read_pixel(5, 5), Some(&[0, 255, 0, 255][..]));
//! # Ok::<(), pixbuf_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for geometry and colors

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Convenience RGBA color producing byte patterns.
pub mod color;

/// Integer bounds and shape types.
pub mod geometry;

/// Capability trait for adapting external image containers.
pub mod source;

/// Borrowed packed pixel buffer.
pub mod pixel_buffer;

/// Byte-level copies between buffers.
mod blit;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line and circle rasterization.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for pixbuf-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use pixbuf_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Bounds, Circle, Disk, HLine, VLine};
    pub use crate::pixel_buffer::PixelBuffer;
    pub use crate::render::{
        draw_circle_border, draw_filled_circle, draw_hline, draw_vline, Drawable,
    };
    pub use crate::source::{PixelSource, RawImage};
}
