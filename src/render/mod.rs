//! Rasterization of lines and circles onto a [`PixelBuffer`](crate::pixel_buffer::PixelBuffer).
//!
//! # Algorithms
//!
//! - **Spans**: inclusive horizontal and vertical runs
//! - **Midpoint Circle**: integer-only one-pixel outline with 8-way symmetry
//! - **Span-filled Circle**: midpoint variant filling the disk with horizontal spans
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display
//!   of circular arcs." *Communications of the ACM*, 20(2), 100-106.

mod primitives;

pub use primitives::{draw_circle_border, draw_filled_circle, draw_hline, draw_vline, Drawable};
