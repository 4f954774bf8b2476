//! Property-based invariant tests for hit testing, snapping, and dragging.
//!
//! 1. The topmost pane whose border-expanded box holds the point is hit
//! 2. A Move hit is farther than the border from every edge
//! 3. A snapped coordinate is a sibling edge within tolerance
//! 4. A resize keeps bounds valid, respects the minimum extent, and leaves
//!    undragged edges alone
//! 5. A move keeps the pane size and stays on the canvas

use panefit_layout::{
    Axis, HitClassifier, HitRegion, MoveResizeEngine, Point, Rect, RelativeBounds,
    RelativeMouseOffset, SnapGuide,
};
use proptest::prelude::*;

const EPS: f64 = 1e-9;
const MIN_EXTENT: f64 = 0.05;

// ── Strategies ──────────────────────────────────────────────────────────

fn editor_rect() -> impl Strategy<Value = Rect> {
    (0.0f64..80.0, 0.0f64..80.0, 1.0f64..40.0, 1.0f64..40.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn editor_point() -> impl Strategy<Value = Point> {
    (-5.0f64..105.0, -5.0f64..105.0).prop_map(|(x, y)| Point::new(x, y))
}

/// Bounds at least 0.1 away from every canvas edge.
fn inner_bounds() -> impl Strategy<Value = RelativeBounds> {
    (0.1f64..0.5, 0.1f64..0.5, 0.06f64..0.4, 0.06f64..0.4)
        .prop_map(|(left, top, w, h)| RelativeBounds::new(left, top, left + w, top + h))
}

fn resize_region() -> impl Strategy<Value = HitRegion> {
    prop::sample::select(vec![
        HitRegion::SizeN,
        HitRegion::SizeS,
        HitRegion::SizeE,
        HitRegion::SizeW,
        HitRegion::SizeNE,
        HitRegion::SizeNW,
        HitRegion::SizeSE,
        HitRegion::SizeSW,
    ])
}

fn pointer_path() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(
        (-2.0f64..3.0, -2.0f64..3.0).prop_map(|(x, y)| Point::new(x, y)),
        1..16,
    )
}

fn sibling_guide() -> impl Strategy<Value = SnapGuide> {
    (prop::collection::vec(inner_bounds(), 0..6), 0.0f64..0.05).prop_map(|(siblings, tol)| {
        SnapGuide::capture(
            siblings
                .into_iter()
                .enumerate()
                .map(|(index, bounds)| (index + 1, bounds)),
            0,
            tol,
        )
    })
}

fn grab_point(bounds: RelativeBounds) -> Point {
    Point::new(
        (bounds.left + bounds.right) / 2.0,
        (bounds.top + bounds.bottom) / 2.0,
    )
}

proptest! {
    #[test]
    fn topmost_containing_pane_is_hit(
        rects in prop::collection::vec(editor_rect(), 0..8),
        border in 0.0f64..3.0,
        point in editor_point(),
    ) {
        let hit = HitClassifier::new(border).classify(&rects, point);
        let expected = rects
            .iter()
            .rposition(|rect| rect.expanded(border).contains(point));
        prop_assert_eq!(hit.index, expected);
        prop_assert_eq!(hit.region == HitRegion::Neutral, expected.is_none());
    }

    #[test]
    fn move_hit_is_clear_of_every_edge(
        rects in prop::collection::vec(editor_rect(), 1..8),
        border in 0.0f64..3.0,
        point in editor_point(),
    ) {
        let hit = HitClassifier::new(border).classify(&rects, point);
        if hit.region == HitRegion::Move {
            let rect = rects[hit.index.unwrap()];
            prop_assert!(point.x - rect.left() > border);
            prop_assert!(rect.right() - point.x > border);
            prop_assert!(point.y - rect.top() > border);
            prop_assert!(rect.bottom() - point.y > border);
        }
    }

    #[test]
    fn snapped_value_is_a_nearby_sibling_edge(
        guide in sibling_guide(),
        candidate in -0.1f64..1.1,
        vertical in any::<bool>(),
    ) {
        let axis = if vertical { Axis::X } else { Axis::Y };
        let decision = guide.decide(candidate, axis);
        match decision.line {
            Some(line) => {
                prop_assert!((line.value - candidate).abs() <= guide.tolerance());
                prop_assert!(guide.lines(axis).contains(&line));
                prop_assert!(guide
                    .lines(axis)
                    .iter()
                    .all(|other| (other.value - candidate).abs() >= (line.value - candidate).abs()));
            }
            None => {
                prop_assert_eq!(decision.value(), candidate);
                prop_assert!(guide
                    .lines(axis)
                    .iter()
                    .all(|line| (line.value - candidate).abs() > guide.tolerance()));
            }
        }
    }

    #[test]
    fn resize_respects_min_extent_along_any_path(
        bounds in inner_bounds(),
        region in resize_region(),
        path in pointer_path(),
        guide in sibling_guide(),
    ) {
        let engine = MoveResizeEngine::new(MIN_EXTENT);
        let offset = RelativeMouseOffset::capture(bounds, grab_point(bounds));
        for pointer in path {
            let next = engine.drag(region, bounds, pointer, offset, &guide);
            prop_assert!(next.is_valid(), "{next:?}");
            prop_assert!(next.width() >= MIN_EXTENT - EPS);
            prop_assert!(next.height() >= MIN_EXTENT - EPS);

            let moves_x = matches!(
                region,
                HitRegion::SizeE | HitRegion::SizeW | HitRegion::SizeNE
                    | HitRegion::SizeNW | HitRegion::SizeSE | HitRegion::SizeSW
            );
            let moves_y = matches!(
                region,
                HitRegion::SizeN | HitRegion::SizeS | HitRegion::SizeNE
                    | HitRegion::SizeNW | HitRegion::SizeSE | HitRegion::SizeSW
            );
            if !moves_x {
                prop_assert_eq!(next.left, bounds.left);
                prop_assert_eq!(next.right, bounds.right);
            }
            if !moves_y {
                prop_assert_eq!(next.top, bounds.top);
                prop_assert_eq!(next.bottom, bounds.bottom);
            }
        }
    }

    #[test]
    fn move_keeps_size_inside_canvas(
        bounds in inner_bounds(),
        path in pointer_path(),
        guide in sibling_guide(),
    ) {
        let engine = MoveResizeEngine::new(MIN_EXTENT);
        let offset = RelativeMouseOffset::capture(bounds, grab_point(bounds));
        for pointer in path {
            let next = engine.drag(HitRegion::Move, bounds, pointer, offset, &guide);
            prop_assert!((next.width() - bounds.width()).abs() < EPS);
            prop_assert!((next.height() - bounds.height()).abs() < EPS);
            prop_assert!(next.left >= 0.0 && next.top >= 0.0);
            prop_assert!(next.right <= 1.0 + EPS && next.bottom <= 1.0 + EPS);
        }
    }
}
