#![forbid(unsafe_code)]

//! Bounds computation for one drag step.
//!
//! The engine is stateless: given the region grabbed at drag start, the
//! pointer offset captured then, the gesture's snap guide, and the current
//! pointer position, it returns the next bounds. All inputs and outputs are
//! in relative space.
//!
//! # Invariants
//!
//! 1. A move keeps width and height and stays inside the canvas.
//! 2. A resize moves only the grabbed edge(s); the opposite edge is fixed.
//! 3. A resized extent never drops below `min_extent` (unless the fixed edge
//!    itself sits closer than `min_extent` to the canvas border) and the
//!    dragged edge never crosses the fixed one.
//! 4. Nothing fails: out-of-range pointers are clamped.

use serde::{Deserialize, Serialize};

use crate::hit::{EdgeSide, HitRegion};
use crate::snap::{Axis, SnapGuide};
use crate::space::RelativeBounds;
use crate::{Point, Size};

/// Default minimum pane extent in relative units.
pub const DEFAULT_MIN_EXTENT: f64 = 0.01;

/// Smallest accepted minimum extent; keeps resized edges strictly apart.
const MIN_EXTENT_FLOOR: f64 = 1e-6;

/// Pointer-to-edge offsets captured when a drag starts.
///
/// Each field is `pointer - edge` on the matching axis, so subtracting it
/// from a later pointer position yields where that edge should go.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeMouseOffset {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RelativeMouseOffset {
    #[must_use]
    pub fn capture(bounds: RelativeBounds, pointer: Point) -> Self {
        Self {
            left: pointer.x - bounds.left,
            top: pointer.y - bounds.top,
            right: pointer.x - bounds.right,
            bottom: pointer.y - bounds.bottom,
        }
    }
}

/// Computes new bounds for move and resize drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResizeEngine {
    min_extent: f64,
    canvas: Size,
}

impl Default for MoveResizeEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_EXTENT)
    }
}

impl MoveResizeEngine {
    /// Engine over the unit canvas.
    #[must_use]
    pub fn new(min_extent: f64) -> Self {
        Self {
            min_extent: min_extent.max(MIN_EXTENT_FLOOR),
            canvas: Size::new(1.0, 1.0),
        }
    }

    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.min_extent
    }

    /// Next bounds for `region` with the pointer at `pointer`.
    #[must_use]
    pub fn drag(
        &self,
        region: HitRegion,
        bounds: RelativeBounds,
        pointer: Point,
        offset: RelativeMouseOffset,
        guide: &SnapGuide,
    ) -> RelativeBounds {
        match region {
            HitRegion::Neutral => bounds,
            HitRegion::Move => self.move_to(bounds, pointer, offset, guide),
            _ => self.resize(region, bounds, pointer, offset, guide),
        }
    }

    /// Translate `bounds` so the grab point follows the pointer.
    #[must_use]
    pub fn move_to(
        &self,
        bounds: RelativeBounds,
        pointer: Point,
        offset: RelativeMouseOffset,
        guide: &SnapGuide,
    ) -> RelativeBounds {
        let (left, right) = move_axis(
            pointer.x - offset.left,
            bounds.width(),
            self.canvas.width,
            guide,
            Axis::X,
        );
        let (top, bottom) = move_axis(
            pointer.y - offset.top,
            bounds.height(),
            self.canvas.height,
            guide,
            Axis::Y,
        );
        RelativeBounds::new(left, top, right, bottom)
    }

    /// Move the edge(s) grabbed by `region`.
    #[must_use]
    pub fn resize(
        &self,
        region: HitRegion,
        bounds: RelativeBounds,
        pointer: Point,
        offset: RelativeMouseOffset,
        guide: &SnapGuide,
    ) -> RelativeBounds {
        let mut next = bounds;
        match region.horizontal_edge() {
            Some(EdgeSide::Low) => {
                let candidate = guide.snap(pointer.x - offset.left, Axis::X);
                next.left = self.clamp_low(candidate, bounds.right);
            }
            Some(EdgeSide::High) => {
                let candidate = guide.snap(pointer.x - offset.right, Axis::X);
                next.right = self.clamp_high(candidate, bounds.left, self.canvas.width);
            }
            None => {}
        }
        match region.vertical_edge() {
            Some(EdgeSide::Low) => {
                let candidate = guide.snap(pointer.y - offset.top, Axis::Y);
                next.top = self.clamp_low(candidate, bounds.bottom);
            }
            Some(EdgeSide::High) => {
                let candidate = guide.snap(pointer.y - offset.bottom, Axis::Y);
                next.bottom = self.clamp_high(candidate, bounds.top, self.canvas.height);
            }
            None => {}
        }
        next
    }

    /// Left/top edge: at least `0`, at most `fixed - min_extent`.
    fn clamp_low(&self, candidate: f64, fixed: f64) -> f64 {
        // `f64::min` discards a NaN candidate.
        candidate.min(fixed - self.min_extent).max(0.0)
    }

    /// Right/bottom edge: at most `extent`, at least `fixed + min_extent`.
    fn clamp_high(&self, candidate: f64, fixed: f64, extent: f64) -> f64 {
        candidate.max(fixed + self.min_extent).min(extent)
    }
}

/// Position one axis of a moved rect: snap the leading edge, else the
/// trailing edge, then keep the span inside `[0, extent]`.
fn move_axis(lead: f64, span: f64, extent: f64, guide: &SnapGuide, axis: Axis) -> (f64, f64) {
    let lead = if lead.is_nan() { 0.0 } else { lead };
    let lead_decision = guide.decide(lead, axis);
    let snapped = if lead_decision.snapped() {
        lead_decision.value()
    } else {
        guide.snap(lead + span, axis) - span
    };
    let max_lead = (extent - span).max(0.0);
    let start = snapped.clamp(0.0, max_lead);
    (start, start + span)
}
