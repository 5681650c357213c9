//! Primitive rendering functions.
//!
//! Every function writes through [`PixelBuffer::write_pixel`], so all clipping
//! is per pixel and silent.

use crate::geometry::{Circle, Disk, HLine, VLine};
use crate::pixel_buffer::PixelBuffer;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive into `buf` with the given byte pattern.
    fn draw(&self, buf: &mut PixelBuffer<'_>, pattern: &[u8]);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a horizontal line from `(x0, y0)` to `(x1, y0)` inclusive, left to right.
///
/// Draws nothing when `x0 > x1`.
pub fn draw_hline(buf: &mut PixelBuffer<'_>, x0: i32, y0: i32, x1: i32, pattern: &[u8]) {
    for x in x0..=x1 {
        buf.write_pixel(x, y0, pattern);
    }
}

/// Draw a vertical line from `(x0, y0)` to `(x0, y1)` inclusive, top to bottom.
///
/// Draws nothing when `y0 > y1`.
pub fn draw_vline(buf: &mut PixelBuffer<'_>, x0: i32, y0: i32, y1: i32, pattern: &[u8]) {
    for y in y0..=y1 {
        buf.write_pixel(x0, y, pattern);
    }
}

impl Drawable for HLine {
    fn draw(&self, buf: &mut PixelBuffer<'_>, pattern: &[u8]) {
        draw_hline(buf, self.x0, self.y, self.x1, pattern);
    }
}

impl Drawable for VLine {
    fn draw(&self, buf: &mut PixelBuffer<'_>, pattern: &[u8]) {
        draw_vline(buf, self.x, self.y0, self.y1, pattern);
    }
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Coarse reject: the bounding box misses the buffer on both axes.
///
/// A circle that overlaps on one axis still runs and is clipped per pixel.
#[inline]
fn circle_is_offscreen(buf: &PixelBuffer<'_>, cx: i32, cy: i32, radius: i32) -> bool {
    let b = buf.bounds();
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let (min_x, min_y) = (i64::from(b.min_x), i64::from(b.min_y));

    (cx + r < min_x || cx - r > min_x + b.width())
        && (cy + r < min_y || cy - r > min_y + b.height())
}

/// Write one pixel at an `i64` point, skipping points off the `i32` plane.
#[inline]
fn plot(buf: &mut PixelBuffer<'_>, x: i64, y: i64, pattern: &[u8]) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        buf.write_pixel(x, y, pattern);
    }
}

/// Draw a one-pixel circle outline using the midpoint circle algorithm.
///
/// Integer only. Each step writes the eight symmetric points
/// `(cx±dx, cy±dy)` and `(cx±dy, cy±dx)`. The ring passes through
/// `(cx±radius, cy)` and `(cx, cy±radius)`. A radius of zero or less draws
/// nothing.
///
/// # Example
///
/// ```
/// use pixbuf_raster::prelude::*;
///
/// let mut img = RawImage::new(10, 10, 4).unwrap();
/// let mut buf = PixelBuffer::from_source(&mut img).unwrap();
/// draw_circle_border(&mut buf, 5, 5, 3, &Rgba::RED.to_array());
///
/// assert_eq!(buf.read_pixel(8, 5), Some(&[255, 0, 0, 255][..]));
/// assert_eq!(buf.read_pixel(5, 5), Some(&[0, 0, 0, 0][..]));
/// ```
pub fn draw_circle_border(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    pattern: &[u8],
) {
    if circle_is_offscreen(buf, cx, cy, radius) {
        return;
    }

    // Widened so points near the edge of the i32 plane cannot overflow.
    let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let (mut dx, mut dy) = (radius, 0);
    let (mut ex, mut ey) = (1, 1);
    let mut err = ex - radius;

    while dx > dy {
        plot(buf, cx + dx, cy + dy, pattern);
        plot(buf, cx + dy, cy + dx, pattern);
        plot(buf, cx - dy, cy + dx, pattern);
        plot(buf, cx - dx, cy + dy, pattern);
        plot(buf, cx - dx, cy - dy, pattern);
        plot(buf, cx - dy, cy - dx, pattern);
        plot(buf, cx + dy, cy - dx, pattern);
        plot(buf, cx + dx, cy - dy, pattern);

        // Both steps may fire in the same iteration.
        if err <= 0 {
            dy += 1;
            err += ey;
            ey += 2;
        }
        if err > 0 {
            dx -= 1;
            ex += 2;
            err += ex - radius * 2;
        }
    }
}

/// Draw a filled circle as horizontal spans.
///
/// A variant of the midpoint algorithm that emits O(radius) spans instead of
/// O(radius²) single pixels. No row is drawn twice. A radius of zero draws the
/// center pixel; a negative radius draws nothing.
pub fn draw_filled_circle(
    buf: &mut PixelBuffer<'_>,
    cx: i32,
    cy: i32,
    radius: i32,
    pattern: &[u8],
) {
    if circle_is_offscreen(buf, cx, cy, radius) {
        return;
    }

    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let (mut err, mut x, mut y) = (-i64::from(radius), i64::from(radius), 0);

    while x >= y {
        let last_y = y;
        err += y;
        y += 1;
        err += y;

        draw_span_pair(buf, cx, cy, x, last_y, pattern);

        if err >= 0 {
            if x != last_y {
                draw_span_pair(buf, cx, cy, last_y, x, pattern);
            }

            err -= x;
            x -= 1;
            err -= x;
        }
    }
}

/// Two spans of width `2*half_width + 1` centered on `cx`, at rows `cy ± dy`.
///
/// Row `cy` is drawn once when `dy == 0`. Span ends clamp to the `i32` plane
/// and rows beyond it are skipped.
#[inline]
fn draw_span_pair(
    buf: &mut PixelBuffer<'_>,
    cx: i64,
    cy: i64,
    half_width: i64,
    dy: i64,
    pattern: &[u8],
) {
    let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    let (x0, x1) = (clamp(cx - half_width), clamp(cx + half_width));

    let rows = if dy == 0 { 1 } else { 2 };
    for y in [cy + dy, cy - dy].into_iter().take(rows) {
        if let Ok(y) = i32::try_from(y) {
            draw_hline(buf, x0, y, x1, pattern);
        }
    }
}

impl Drawable for Circle {
    fn draw(&self, buf: &mut PixelBuffer<'_>, pattern: &[u8]) {
        draw_circle_border(buf, self.cx, self.cy, self.radius, pattern);
    }
}

impl Drawable for Disk {
    fn draw(&self, buf: &mut PixelBuffer<'_>, pattern: &[u8]) {
        draw_filled_circle(buf, self.cx, self.cy, self.radius, pattern);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::Bounds;
    use std::collections::BTreeSet;

    const RED: [u8; 4] = Rgba::RED.to_array();

    fn canvas(width: i32, height: i32) -> Vec<u8> {
        vec![0; width as usize * height as usize * 4]
    }

    fn buffer(data: &mut [u8], width: i32, height: i32) -> PixelBuffer<'_> {
        PixelBuffer::new(data, width as usize * 4, Bounds::from_size(width, height))
            .expect("buffer creation should succeed")
    }

    /// Offsets from `(cx, cy)` of every pixel that is not all zero.
    fn lit(buf: &PixelBuffer<'_>, cx: i32, cy: i32) -> BTreeSet<(i32, i32)> {
        let b = buf.bounds();
        let mut set = BTreeSet::new();
        for y in b.min_y..b.max_y {
            for x in b.min_x..b.max_x {
                if buf.read_pixel(x, y).is_some_and(|p| p.iter().any(|&v| v != 0)) {
                    set.insert((x - cx, y - cy));
                }
            }
        }
        set
    }

    #[test]
    fn test_hline_inclusive() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_hline(&mut buf, 2, 3, 7, &[1, 2, 3, 4]);

        for x in 0..10 {
            let expected: &[u8] = if (2..=7).contains(&x) { &[1, 2, 3, 4] } else { &[0; 4] };
            assert_eq!(buf.read_pixel(x, 3), Some(expected), "x = {x}");
        }
    }

    #[test]
    fn test_hline_reversed_is_empty() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_hline(&mut buf, 7, 3, 2, &RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_hline_single_pixel() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_hline(&mut buf, 4, 4, 4, &RED);
        assert_eq!(lit(&buf, 0, 0), BTreeSet::from([(4, 4)]));
    }

    #[test]
    fn test_vline_inclusive() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_vline(&mut buf, 6, 1, 8, &RED);

        for y in 0..10 {
            let set = buf.read_pixel(6, y) == Some(&RED[..]);
            assert_eq!(set, (1..=8).contains(&y), "y = {y}");
        }
        assert_eq!(lit(&buf, 0, 0).len(), 8);
    }

    #[test]
    fn test_vline_reversed_is_empty() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_vline(&mut buf, 6, 8, 1, &RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_vline_clips_above_and_below() {
        let mut data = canvas(4, 4);
        let mut buf = buffer(&mut data, 4, 4);
        draw_vline(&mut buf, 1, -5, 10, &RED);
        assert_eq!(lit(&buf, 0, 0), (0..4).map(|y| (1, y)).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_circle_border_ring() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_circle_border(&mut buf, 5, 5, 3, &RED);

        assert_eq!(buf.read_pixel(8, 5), Some(&RED[..]));
        assert_eq!(buf.read_pixel(2, 5), Some(&RED[..]));
        assert_eq!(buf.read_pixel(5, 8), Some(&RED[..]));
        assert_eq!(buf.read_pixel(5, 2), Some(&RED[..]));
        assert_eq!(buf.read_pixel(5, 5), Some(&[0; 4][..]));
    }

    #[test]
    fn test_circle_border_exact_radius_three() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_circle_border(&mut buf, 5, 5, 3, &RED);

        let expected: BTreeSet<(i32, i32)> = [
            (3, 0),
            (-3, 0),
            (0, 3),
            (0, -3),
            (3, 1),
            (3, -1),
            (-3, 1),
            (-3, -1),
            (1, 3),
            (-1, 3),
            (1, -3),
            (-1, -3),
        ]
        .into_iter()
        .collect();
        assert_eq!(lit(&buf, 5, 5), expected);
    }

    #[test]
    fn test_circle_border_radius_one() {
        let mut data = canvas(5, 5);
        let mut buf = buffer(&mut data, 5, 5);
        draw_circle_border(&mut buf, 2, 2, 1, &RED);
        assert_eq!(
            lit(&buf, 2, 2),
            BTreeSet::from([(1, 0), (-1, 0), (0, 1), (0, -1)])
        );
    }

    #[test]
    fn test_circle_border_non_positive_radius() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_circle_border(&mut buf, 5, 5, 0, &RED);
        draw_circle_border(&mut buf, 5, 5, -4, &RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_circle_center() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        let green = Rgba::GREEN.to_array();
        draw_filled_circle(&mut buf, 5, 5, 2, &green);
        assert_eq!(buf.read_pixel(5, 5), Some(&green[..]));
    }

    #[test]
    fn test_filled_circle_radius_three_rows() {
        let mut data = canvas(11, 11);
        let mut buf = buffer(&mut data, 11, 11);
        draw_filled_circle(&mut buf, 5, 5, 3, &RED);

        let mut expected = BTreeSet::new();
        for (dy, half) in [(-3, 1), (-2, 2), (-1, 3), (0, 3), (1, 3), (2, 2), (3, 1)] {
            for dx in -half..=half {
                expected.insert((dx, dy));
            }
        }
        assert_eq!(lit(&buf, 5, 5), expected);
    }

    #[test]
    fn test_filled_circle_radius_zero_is_center() {
        let mut data = canvas(5, 5);
        let mut buf = buffer(&mut data, 5, 5);
        draw_filled_circle(&mut buf, 2, 2, 0, &RED);
        assert_eq!(lit(&buf, 2, 2), BTreeSet::from([(0, 0)]));
    }

    #[test]
    fn test_filled_circle_negative_radius() {
        let mut data = canvas(5, 5);
        let mut buf = buffer(&mut data, 5, 5);
        draw_filled_circle(&mut buf, 2, 2, -1, &RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_circles_far_outside_untouched() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_circle_border(&mut buf, -100, -100, 5, &RED);
        draw_filled_circle(&mut buf, -100, -100, 5, &RED);
        draw_filled_circle(&mut buf, 200, 300, 50, &RED);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_circles_at_coordinate_extremes_do_not_overflow() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);

        // Off on x but overlapping on y, so the coarse reject lets them through.
        for (cx, cy) in [
            (i32::MAX - 1, 5),
            (i32::MIN + 1, 5),
            (5, i32::MAX - 1),
            (5, i32::MIN + 1),
        ] {
            draw_circle_border(&mut buf, cx, cy, 5, &RED);
            draw_filled_circle(&mut buf, cx, cy, 5, &RED);
        }
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_circle_reaching_past_i32_max_still_draws_inside() {
        let mut data = vec![0u8; 4 * 4 * 4];
        let bounds = Bounds::new(i32::MAX - 4, 0, i32::MAX, 4);
        let mut buf = PixelBuffer::new(&mut data, 16, bounds).unwrap();

        // The right half of the ring lies beyond i32::MAX and is dropped.
        draw_circle_border(&mut buf, i32::MAX - 1, 1, 2, &RED);

        assert_eq!(buf.read_pixel(i32::MAX - 3, 1), Some(&RED[..]));
        assert_eq!(buf.read_pixel(i32::MAX - 1, 3), Some(&RED[..]));
        assert_eq!(buf.read_pixel(i32::MAX - 1, 1), Some(&[0; 4][..]));
    }

    #[test]
    fn test_offscreen_needs_both_axes() {
        let mut data = canvas(10, 10);
        let buf = buffer(&mut data, 10, 10);
        assert!(circle_is_offscreen(&buf, -100, -100, 5));
        assert!(circle_is_offscreen(&buf, 16, 16, 5));
        // Off on one axis only: not culled.
        assert!(!circle_is_offscreen(&buf, 5, -100, 5));
        assert!(!circle_is_offscreen(&buf, -100, 5, 5));
        assert!(!circle_is_offscreen(&buf, 15, 15, 5));
    }

    #[test]
    fn test_offscreen_respects_origin() {
        let mut data = vec![0u8; 10 * 10 * 4];
        let buf = PixelBuffer::new(&mut data, 40, Bounds::new(100, 100, 110, 110)).unwrap();
        assert!(circle_is_offscreen(&buf, 5, 5, 3));
        assert!(!circle_is_offscreen(&buf, 105, 105, 3));
    }

    #[test]
    fn test_circle_with_offset_origin() {
        let mut data = vec![0u8; 10 * 10 * 4];
        let mut buf = PixelBuffer::new(&mut data, 40, Bounds::new(100, 100, 110, 110)).unwrap();
        draw_circle_border(&mut buf, 105, 105, 3, &RED);
        assert_eq!(buf.read_pixel(108, 105), Some(&RED[..]));
        assert_eq!(buf.read_pixel(105, 105), Some(&[0; 4][..]));
    }

    #[test]
    fn test_partial_pattern_keeps_alpha() {
        let mut data = vec![7u8; 10 * 10 * 4];
        let mut buf = buffer(&mut data, 10, 10);
        draw_filled_circle(&mut buf, 5, 5, 2, &Rgba::BLUE.rgb_bytes());
        assert_eq!(buf.read_pixel(5, 5), Some(&[0, 0, 255, 7][..]));
    }

    #[test]
    fn test_oversized_pattern_draws_nothing() {
        let mut data = canvas(10, 10);
        let mut buf = buffer(&mut data, 10, 10);
        draw_filled_circle(&mut buf, 5, 5, 3, &[1, 2, 3, 4, 5]);
        draw_circle_border(&mut buf, 5, 5, 3, &[1, 2, 3, 4, 5]);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_drawable_shapes() {
        let mut data = canvas(20, 20);
        let mut buf = buffer(&mut data, 20, 20);

        HLine::new(0, 0, 3).draw(&mut buf, &RED);
        VLine::new(19, 0, 3).draw(&mut buf, &RED);
        Circle::new(10, 10, 4).draw(&mut buf, &RED);
        Disk::new(10, 10, 1).draw(&mut buf, &[9]);

        assert_eq!(buf.read_pixel(3, 0), Some(&RED[..]));
        assert_eq!(buf.read_pixel(19, 3), Some(&RED[..]));
        assert_eq!(buf.read_pixel(14, 10), Some(&RED[..]));
        assert_eq!(buf.read_pixel(10, 10), Some(&[9, 0, 0, 0][..]));
    }
}
