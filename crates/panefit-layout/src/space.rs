#![forbid(unsafe_code)]

//! Coordinate spaces shared by the editor and the capture pipeline.
//!
//! Three spaces are in play:
//!
//! - **Relative space**: `[0,1] x [0,1]`, where stored pane bounds live.
//! - **Editor space**: relative space times [`EDITOR_SCALE`]. Pointer events
//!   and editor tuning (border thickness, snap tolerance) are expressed here
//!   so that the preview surface's pixel size never leaks into geometry.
//! - **Bound space**: output canvas pixels, used when placing captured frames.

use serde::{Deserialize, Serialize};

use crate::{Point, Rect, Size};

/// Fixed scale of the editor surface: relative `1.0` is editor `100.0`.
pub const EDITOR_SCALE: f64 = 100.0;

/// Convert an editor-space pointer position into relative space.
#[inline]
#[must_use]
pub fn editor_to_relative(point: Point) -> Point {
    point.unscaled(EDITOR_SCALE)
}

/// Convert a relative-space position into editor space.
#[inline]
#[must_use]
pub fn relative_to_editor(point: Point) -> Point {
    point.scaled(EDITOR_SCALE)
}

/// Pane bounds as four edges in relative space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RelativeBounds {
    /// The whole canvas.
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Positive extent, finite edges, and fully inside the unit canvas.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let edges = [self.left, self.top, self.right, self.bottom];
        edges.iter().all(|edge| edge.is_finite() && (0.0..=1.0).contains(edge))
            && self.right > self.left
            && self.bottom > self.top
    }

    /// Bounds as a rectangle in relative space.
    #[inline]
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_edges(self.left, self.top, self.right, self.bottom)
    }

    #[inline]
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.left(), rect.top(), rect.right(), rect.bottom())
    }

    /// Bounds as a rectangle in editor space.
    #[inline]
    #[must_use]
    pub fn to_editor_rect(&self) -> Rect {
        self.to_rect().scaled(EDITOR_SCALE)
    }

    /// Bounds in output canvas pixels.
    #[must_use]
    pub fn to_pixel_rect(&self, canvas: Size) -> Rect {
        Rect::new(
            self.left * canvas.width,
            self.top * canvas.height,
            self.width() * canvas.width,
            self.height() * canvas.height,
        )
    }

    /// Inverse of [`to_pixel_rect`](Self::to_pixel_rect).
    ///
    /// `canvas` must have a positive size.
    #[must_use]
    pub fn from_pixel_rect(rect: Rect, canvas: Size) -> Self {
        debug_assert!(canvas.is_valid(), "canvas size must be positive");
        Self::new(
            rect.left() / canvas.width,
            rect.top() / canvas.height,
            rect.right() / canvas.width,
            rect.bottom() / canvas.height,
        )
    }
}

impl Default for RelativeBounds {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_and_relative_points_convert() {
        let editor = Point::new(25.0, 50.0);
        let relative = editor_to_relative(editor);
        assert_eq!(relative, Point::new(0.25, 0.5));
        assert_eq!(relative_to_editor(relative), editor);
    }

    #[test]
    fn bounds_to_pixels_on_canvas() {
        let bounds = RelativeBounds::new(0.25, 0.5, 0.75, 1.0);
        let canvas = Size::new(640.0, 480.0);
        assert_eq!(
            bounds.to_pixel_rect(canvas),
            Rect::new(160.0, 240.0, 320.0, 240.0)
        );
        assert_eq!(
            RelativeBounds::from_pixel_rect(bounds.to_pixel_rect(canvas), canvas),
            bounds
        );
    }

    #[test]
    fn bounds_to_editor_rect() {
        let bounds = RelativeBounds::new(0.25, 0.5, 0.75, 1.0);
        assert_eq!(bounds.to_editor_rect(), Rect::new(25.0, 50.0, 50.0, 50.0));
        assert_eq!(RelativeBounds::from_rect(bounds.to_rect()), bounds);
    }

    #[test]
    fn validity_requires_ordered_edges_inside_canvas() {
        assert!(RelativeBounds::FULL.is_valid());
        assert!(RelativeBounds::new(0.1, 0.1, 0.2, 0.2).is_valid());
        assert!(!RelativeBounds::new(0.2, 0.1, 0.2, 0.3).is_valid());
        assert!(!RelativeBounds::new(0.3, 0.1, 0.2, 0.3).is_valid());
        assert!(!RelativeBounds::new(-0.1, 0.0, 0.5, 0.5).is_valid());
        assert!(!RelativeBounds::new(0.0, 0.0, 1.5, 0.5).is_valid());
        assert!(!RelativeBounds::new(0.0, f64::NAN, 0.5, 0.5).is_valid());
    }
}
