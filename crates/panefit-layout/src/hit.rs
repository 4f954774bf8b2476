#![forbid(unsafe_code)]

//! Pointer hit classification against stacked pane rectangles.
//!
//! Every rectangle carries a border band of constant thickness `b` on both
//! sides of each edge. A point inside the `b`-expanded box of a rectangle
//! lands in one of nine regions of that rectangle (four corners, four edges,
//! interior). Rectangles are searched from the highest index down, and the
//! first match wins even when a lower rectangle's border overlaps it.
//!
//! When a rectangle is thinner than `2 * b` on an axis, both of its edges on
//! that axis are within reach; the nearer edge is chosen (ties go to the
//! left/top edge) and a corner still wins over a plain edge.

use serde::{Deserialize, Serialize};

use crate::element::LayoutModel;
use crate::{Point, Rect};

/// Region of a rectangle under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitRegion {
    /// No rectangle was hit.
    #[default]
    Neutral,
    Move,
    SizeN,
    SizeS,
    SizeE,
    SizeW,
    SizeNE,
    SizeNW,
    SizeSE,
    SizeSW,
}

/// Which edge on one axis a region drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeSide {
    /// Left or top.
    Low,
    /// Right or bottom.
    High,
}

impl HitRegion {
    /// Whether the region resizes (any edge or corner).
    #[must_use]
    pub const fn is_resize(self) -> bool {
        !matches!(self, Self::Neutral | Self::Move)
    }

    /// Horizontal edge dragged by this region, if any.
    #[must_use]
    pub(crate) const fn horizontal_edge(self) -> Option<EdgeSide> {
        match self {
            Self::SizeW | Self::SizeNW | Self::SizeSW => Some(EdgeSide::Low),
            Self::SizeE | Self::SizeNE | Self::SizeSE => Some(EdgeSide::High),
            Self::Neutral | Self::Move | Self::SizeN | Self::SizeS => None,
        }
    }

    /// Vertical edge dragged by this region, if any.
    #[must_use]
    pub(crate) const fn vertical_edge(self) -> Option<EdgeSide> {
        match self {
            Self::SizeN | Self::SizeNW | Self::SizeNE => Some(EdgeSide::Low),
            Self::SizeS | Self::SizeSW | Self::SizeSE => Some(EdgeSide::High),
            Self::Neutral | Self::Move | Self::SizeE | Self::SizeW => None,
        }
    }

    /// Cursor shown while hovering or dragging this region.
    #[must_use]
    pub const fn cursor(self) -> CursorShape {
        match self {
            Self::Neutral => CursorShape::Default,
            Self::Move => CursorShape::SizeAll,
            Self::SizeNW | Self::SizeSE => CursorShape::SizeNwse,
            Self::SizeNE | Self::SizeSW => CursorShape::SizeNesw,
            Self::SizeN | Self::SizeS => CursorShape::SizeNs,
            Self::SizeE | Self::SizeW => CursorShape::SizeWe,
        }
    }
}

/// Pointer cursor feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorShape {
    #[default]
    Default,
    SizeAll,
    SizeNwse,
    SizeNesw,
    SizeNs,
    SizeWe,
}

/// Result of one hit query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HitTest {
    /// Index of the topmost rectangle hit; `None` with [`HitRegion::Neutral`].
    pub index: Option<usize>,
    pub region: HitRegion,
}

impl HitTest {
    /// Nothing under the pointer.
    pub const NEUTRAL: Self = Self {
        index: None,
        region: HitRegion::Neutral,
    };

    #[must_use]
    pub const fn hit(index: usize, region: HitRegion) -> Self {
        Self {
            index: Some(index),
            region,
        }
    }

    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.index.is_none()
    }
}

/// Classifies points against an ordered set of rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitClassifier {
    border: f64,
}

impl HitClassifier {
    /// `border` is the grab band thickness, in the same space as the rects.
    #[must_use]
    pub fn new(border: f64) -> Self {
        Self {
            border: border.max(0.0),
        }
    }

    #[must_use]
    pub const fn border(&self) -> f64 {
        self.border
    }

    /// Topmost rectangle under `point` and the region hit.
    #[must_use]
    pub fn classify(&self, rects: &[Rect], point: Point) -> HitTest {
        rects
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, rect)| {
                classify_rect(*rect, point, self.border).map(|region| HitTest::hit(index, region))
            })
            .unwrap_or(HitTest::NEUTRAL)
    }

    /// Classify a relative-space point against every element of `model`.
    ///
    /// The border must be expressed in relative units for this call.
    #[must_use]
    pub fn classify_model<M: LayoutModel + ?Sized>(&self, model: &M, point: Point) -> HitTest {
        let rects: Vec<Rect> = (0..model.element_count())
            .map(|index| model.bounds(index).map_or(Rect::default(), |b| b.to_rect()))
            .collect();
        self.classify(&rects, point)
    }
}

/// Region of `rect` under `point`, or `None` when the point is outside the
/// border-expanded box.
#[must_use]
pub fn classify_rect(rect: Rect, point: Point, border: f64) -> Option<HitRegion> {
    if !rect.is_valid() || !rect.expanded(border).contains(point) {
        return None;
    }

    let horizontal = nearest_side(point.x - rect.left(), rect.right() - point.x, border);
    let vertical = nearest_side(point.y - rect.top(), rect.bottom() - point.y, border);

    let region = match (horizontal, vertical) {
        (Some(EdgeSide::Low), Some(EdgeSide::Low)) => HitRegion::SizeNW,
        (Some(EdgeSide::High), Some(EdgeSide::Low)) => HitRegion::SizeNE,
        (Some(EdgeSide::Low), Some(EdgeSide::High)) => HitRegion::SizeSW,
        (Some(EdgeSide::High), Some(EdgeSide::High)) => HitRegion::SizeSE,
        (Some(EdgeSide::Low), None) => HitRegion::SizeW,
        (Some(EdgeSide::High), None) => HitRegion::SizeE,
        (None, Some(EdgeSide::Low)) => HitRegion::SizeN,
        (None, Some(EdgeSide::High)) => HitRegion::SizeS,
        (None, None) => HitRegion::Move,
    };
    Some(region)
}

/// Pick the edge within `border` on one axis. Distances are signed: positive
/// inside the rect, negative in the outer band.
fn nearest_side(to_low: f64, to_high: f64, border: f64) -> Option<EdgeSide> {
    let near_low = to_low <= border;
    let near_high = to_high <= border;
    match (near_low, near_high) {
        (true, true) if to_high.abs() < to_low.abs() => Some(EdgeSide::High),
        (true, _) => Some(EdgeSide::Low),
        (false, true) => Some(EdgeSide::High),
        (false, false) => None,
    }
}
