//! Integer geometry for pixel-space rasterization.
//!
//! [`Bounds`] is the addressable window of a buffer. The shape types are plain
//! call arguments bundled for [`Drawable`](crate::render::Drawable).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Left edge (inclusive).
    pub min_x: i32,
    /// Top edge (inclusive).
    pub min_y: i32,
    /// Right edge (exclusive).
    pub max_x: i32,
    /// Bottom edge (exclusive).
    pub max_y: i32,
}

impl Bounds {
    /// The empty rectangle at the origin.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its corners.
    #[must_use]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Width in pixels (may be negative for inverted rectangles).
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64
    }

    /// Height in pixels (may be negative for inverted rectangles).
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64
    }

    /// True if the rectangle contains no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True if `(x, y)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// True if `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_bounds(&self, other: &Self) -> bool {
        other.is_empty()
            || (other.min_x >= self.min_x
                && other.max_x <= self.max_x
                && other.min_y >= self.min_y
                && other.max_y <= self.max_y)
    }

    /// Scale the size by `factor`, keeping `min` fixed.
    ///
    /// A negative factor or a factor of exactly 1 returns the rectangle unchanged;
    /// zero returns [`Bounds::EMPTY`]. The far edges clamp at `i32::MAX`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn scaled(self, factor: f64) -> Self {
        if factor < 0.0 || factor == 1.0 {
            return self;
        }
        if factor == 0.0 {
            return Self::EMPTY;
        }

        let w = (self.width() as f64 * factor).round() as i64;
        let h = (self.height() as f64 * factor).round() as i64;
        let clamp = |v: i64| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(
            self.min_x,
            self.min_y,
            clamp(i64::from(self.min_x).saturating_add(w)),
            clamp(i64::from(self.min_y).saturating_add(h)),
        )
    }
}

/// Horizontal run from `x0` to `x1` inclusive on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HLine {
    /// Start column.
    pub x0: i32,
    /// Row.
    pub y: i32,
    /// End column (inclusive).
    pub x1: i32,
}

/// Vertical run from `y0` to `y1` inclusive on column `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VLine {
    /// Column.
    pub x: i32,
    /// Start row.
    pub y0: i32,
    /// End row (inclusive).
    pub y1: i32,
}

/// One-pixel circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center column.
    pub cx: i32,
    /// Center row.
    pub cy: i32,
    /// Radius in pixels.
    pub radius: i32,
}

/// Filled circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Disk {
    /// Center column.
    pub cx: i32,
    /// Center row.
    pub cy: i32,
    /// Radius in pixels.
    pub radius: i32,
}

impl HLine {
    /// Create a horizontal line.
    #[must_use]
    pub const fn new(x0: i32, y: i32, x1: i32) -> Self {
        Self { x0, y, x1 }
    }
}

impl VLine {
    /// Create a vertical line.
    #[must_use]
    pub const fn new(x: i32, y0: i32, y1: i32) -> Self {
        Self { x, y0, y1 }
    }
}

impl Circle {
    /// Create a circle outline.
    #[must_use]
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// The filled counterpart of this circle.
    #[must_use]
    pub const fn filled(self) -> Disk {
        Disk::new(self.cx, self.cy, self.radius)
    }
}

impl Disk {
    /// Create a filled circle.
    #[must_use]
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }
}
