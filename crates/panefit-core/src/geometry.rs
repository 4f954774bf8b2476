#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are `f64`. The same types are used for the output canvas
//! (bound space, pixels) and for the editor's normalized space; which space a
//! value lives in is a property of the caller, not of the type.

use serde::{Deserialize, Serialize};

/// A point in either bound space or relative space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Divide both coordinates by `scale`.
    #[inline]
    pub fn unscaled(self, scale: f64) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }

    /// Multiply both coordinates by `scale`.
    #[inline]
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

/// Width and height of an image or area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether both dimensions are strictly positive and finite.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Whether this size fits inside `other` on both axes (equality allowed).
    #[inline]
    pub fn fits_within(&self, other: Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Swap width and height.
    #[inline]
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// A rectangle for placement, layout bounds, and hit testing.
///
/// Origin at top-left, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Build a rectangle from its four edges.
    #[inline]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rectangle denotes a valid placement (positive, finite extent).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.size().is_valid() && self.x.is_finite() && self.y.is_finite()
    }

    /// Check if a point is inside the rectangle, edges included.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Check if `other` lies entirely inside this rectangle, within `epsilon`.
    pub fn contains_rect(&self, other: &Rect, epsilon: f64) -> bool {
        other.x >= self.x - epsilon
            && other.y >= self.y - epsilon
            && other.right() <= self.right() + epsilon
            && other.bottom() <= self.bottom() + epsilon
    }

    /// Grow the rectangle by `amount` on every side.
    #[inline]
    #[must_use]
    pub fn expanded(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    /// Create a new rectangle inside the current one with the given padding.
    #[must_use]
    pub fn inner(&self, padding: Padding) -> Rect {
        Rect::new(
            self.x + padding.left,
            self.y + padding.top,
            self.width - padding.horizontal_sum(),
            self.height - padding.vertical_sum(),
        )
    }

    /// Multiply every component by `scale`.
    #[inline]
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Rect {
        Rect::new(
            self.x * scale,
            self.y * scale,
            self.width * scale,
            self.height * scale,
        )
    }
}

/// Padding between a placed image and its bound rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Padding {
    /// Create new padding with specific values.
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Create new padding with equal values.
    pub const fn all(val: f64) -> Self {
        Self::new(val, val, val, val)
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::{Padding, Point, Rect, Size};

    #[test]
    fn rect_contains_includes_edges() {
        let rect = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(rect.contains(Point::new(2.0, 3.0)));
        assert!(rect.contains(Point::new(6.0, 8.0)));
        assert!(!rect.contains(Point::new(6.5, 3.0)));
        assert!(!rect.contains(Point::new(2.0, 8.1)));
    }

    #[test]
    fn rect_edges_round_trip() {
        let rect = Rect::from_edges(0.25, 0.5, 0.75, 1.0);
        assert_eq!(rect, Rect::new(0.25, 0.5, 0.5, 0.5));
        assert_eq!(rect.right(), 0.75);
        assert_eq!(rect.bottom(), 1.0);
    }

    #[test]
    fn rect_expanded_grows_every_side() {
        let rect = Rect::new(10.0, 10.0, 20.0, 10.0).expanded(2.0);
        assert_eq!(rect, Rect::new(8.0, 8.0, 24.0, 14.0));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = rect.inner(Padding::new(1.0, 3.0, 4.0, 2.0));
        assert_eq!(inner, Rect::new(4.0, 1.0, 4.0, 6.0));
    }

    #[test]
    fn rect_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 1.0, -1.0).is_valid());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn contains_rect_respects_epsilon() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0), 0.0));
        assert!(!outer.contains_rect(&Rect::new(0.0, 0.0, 100.000_1, 100.0), 0.0));
        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.000_1, 100.0), 1e-3));
    }

    #[test]
    fn size_helpers() {
        let size = Size::new(1920.0, 1080.0);
        assert!((size.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(size.transposed(), Size::new(1080.0, 1920.0));
        assert!(Size::new(100.0, 100.0).fits_within(Size::new(100.0, 200.0)));
        assert!(!Size::new(101.0, 100.0).fits_within(Size::new(100.0, 200.0)));
    }

    #[test]
    fn point_scaling() {
        let point = Point::new(50.0, 25.0);
        assert_eq!(point.unscaled(100.0), Point::new(0.5, 0.25));
        assert_eq!(point.unscaled(100.0).scaled(100.0), point);
    }

    #[test]
    fn padding_sums() {
        let padding = Padding::new(1.0, 3.0, 4.0, 2.0);
        assert_eq!(padding.horizontal_sum(), 6.0);
        assert_eq!(padding.vertical_sum(), 4.0);
        assert_eq!(Padding::all(2.0).horizontal_sum(), 4.0);
    }
}
