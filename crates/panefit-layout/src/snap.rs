#![forbid(unsafe_code)]

//! Edge snapping against sibling panes.
//!
//! A [`SnapGuide`] is captured once when a drag starts and stays immutable
//! for the rest of the gesture. It records the vertical edges (left/right)
//! and horizontal edges (top/bottom) of every pane except the dragged one.
//!
//! Snap rule: the edge with the smallest distance to the candidate wins if
//! that distance is within tolerance. On equal distance the lower sibling
//! index wins, and within one sibling the left/top edge precedes the
//! right/bottom edge.

use serde::{Deserialize, Serialize};

use crate::element::LayoutModel;
use crate::space::RelativeBounds;

/// Coordinate axis a candidate lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Horizontal coordinate; snaps to left/right edges.
    X,
    /// Vertical coordinate; snaps to top/bottom edges.
    Y,
}

/// One sibling edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapLine {
    pub value: f64,
    pub sibling: usize,
}

/// Output of one snap evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapDecision {
    pub input: f64,
    /// Edge the candidate snapped to, if any.
    pub line: Option<SnapLine>,
}

impl SnapDecision {
    /// Final coordinate after snapping.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.line.map_or(self.input, |line| line.value)
    }

    #[must_use]
    pub const fn snapped(&self) -> bool {
        self.line.is_some()
    }
}

/// Immutable per-gesture snapshot of sibling edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapGuide {
    vertical: Vec<SnapLine>,
    horizontal: Vec<SnapLine>,
    tolerance: f64,
}

impl SnapGuide {
    /// Capture sibling edges from `(index, bounds)` pairs, skipping `exclude`.
    #[must_use]
    pub fn capture<I>(siblings: I, exclude: usize, tolerance: f64) -> Self
    where
        I: IntoIterator<Item = (usize, RelativeBounds)>,
    {
        let mut vertical = Vec::new();
        let mut horizontal = Vec::new();
        for (sibling, bounds) in siblings {
            if sibling == exclude {
                continue;
            }
            vertical.push(SnapLine {
                value: bounds.left,
                sibling,
            });
            vertical.push(SnapLine {
                value: bounds.right,
                sibling,
            });
            horizontal.push(SnapLine {
                value: bounds.top,
                sibling,
            });
            horizontal.push(SnapLine {
                value: bounds.bottom,
                sibling,
            });
        }
        // Keep index order even if the iterator was not sorted.
        vertical.sort_by_key(|line| line.sibling);
        horizontal.sort_by_key(|line| line.sibling);
        Self {
            vertical,
            horizontal,
            tolerance: tolerance.max(0.0),
        }
    }

    /// Capture from every element of `model` except `exclude`.
    #[must_use]
    pub fn from_model<M: LayoutModel + ?Sized>(model: &M, exclude: usize, tolerance: f64) -> Self {
        Self::capture(
            (0..model.element_count())
                .filter_map(|index| model.bounds(index).map(|bounds| (index, bounds))),
            exclude,
            tolerance,
        )
    }

    /// A guide that never snaps.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sibling edges on `axis`, in sibling order.
    #[must_use]
    pub fn lines(&self, axis: Axis) -> &[SnapLine] {
        match axis {
            Axis::X => &self.vertical,
            Axis::Y => &self.horizontal,
        }
    }

    /// Evaluate the snap rule for `candidate` on `axis`.
    #[must_use]
    pub fn decide(&self, candidate: f64, axis: Axis) -> SnapDecision {
        let mut best: Option<(f64, SnapLine)> = None;
        for line in self.lines(axis) {
            let distance = (line.value - candidate).abs();
            if distance.is_nan() || distance > self.tolerance {
                continue;
            }
            if best.is_none_or(|(best_distance, _)| distance < best_distance) {
                best = Some((distance, *line));
            }
        }
        SnapDecision {
            input: candidate,
            line: best.map(|(_, line)| line),
        }
    }

    /// Snapped coordinate for `candidate` on `axis`.
    #[must_use]
    pub fn snap(&self, candidate: f64, axis: Axis) -> f64 {
        self.decide(candidate, axis).value()
    }
}
