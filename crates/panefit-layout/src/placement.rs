#![forbid(unsafe_code)]

//! Where a pane's captured frame lands on the output canvas.

use serde::{Deserialize, Serialize};

use crate::element::LayoutElement;
use crate::{FitPolicy, Padding, Rect, Size, fit, padding};

/// Output-canvas placement of one element's captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementPlacement {
    /// Pane rectangle in canvas pixels.
    pub bound: Rect,
    /// Frame rectangle inside `bound`.
    pub image: Rect,
    /// Space left around `image` inside `bound`.
    pub padding: Padding,
    pub policy: FitPolicy,
}

impl ElementPlacement {
    /// Place `element` on a canvas of `canvas` pixels.
    ///
    /// The clipping size is rotated first, so a 90 degree capture is fitted
    /// as the portrait frame it becomes. Returns `None` when the pane or the
    /// clipping area has no area.
    #[must_use]
    pub fn compute(element: &LayoutElement, canvas: Size) -> Option<Self> {
        let bound = element.bounds.to_pixel_rect(canvas);
        let input = element.capture.oriented_input_size();
        if !bound.is_valid() || !input.is_valid() {
            return None;
        }
        let options = element.capture.fit_options();
        Some(Self {
            bound,
            image: fit(bound, input, options),
            padding: padding(bound.size(), input, options),
            policy: FitPolicy::resolve(bound.size(), input, options),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{CaptureParams, ClippingRect, RotateDirection};
    use crate::space::RelativeBounds;

    const CANVAS: Size = Size {
        width: 1920.0,
        height: 1080.0,
    };

    fn element(clipping: ClippingRect, stretch: bool, keep: bool) -> LayoutElement {
        LayoutElement::new(RelativeBounds::new(0.5, 0.0, 1.0, 0.5), "app").with_capture(
            CaptureParams {
                clipping,
                stretch,
                keep_aspect_ratio: keep,
                ..CaptureParams::default()
            },
        )
    }

    #[test]
    fn small_frame_is_centered_at_native_size() {
        let placement =
            ElementPlacement::compute(&element(ClippingRect::new(0, 0, 640, 360), false, false), CANVAS)
                .unwrap();
        assert_eq!(placement.bound, Rect::new(960.0, 0.0, 960.0, 540.0));
        assert_eq!(placement.policy, FitPolicy::PadNative);
        assert_eq!(placement.image, Rect::new(1120.0, 90.0, 640.0, 360.0));
        assert_eq!(placement.padding, Padding::new(90.0, 90.0, 160.0, 160.0));
    }

    #[test]
    fn large_frame_fills_without_aspect_lock() {
        let placement =
            ElementPlacement::compute(&element(ClippingRect::new(0, 0, 800, 600), false, false), CANVAS)
                .unwrap();
        assert_eq!(placement.policy, FitPolicy::Fill);
        assert_eq!(placement.image, placement.bound);
        assert_eq!(placement.padding, Padding::all(0.0));
    }

    #[test]
    fn large_frame_keeps_aspect_when_locked() {
        let placement =
            ElementPlacement::compute(&element(ClippingRect::new(0, 0, 1080, 1080), false, true), CANVAS)
                .unwrap();
        assert_eq!(placement.policy, FitPolicy::AspectScale);
        assert_eq!(placement.image, Rect::new(1170.0, 0.0, 540.0, 540.0));
        assert_eq!(placement.padding, Padding::new(0.0, 0.0, 210.0, 210.0));
    }

    #[test]
    fn rotation_swaps_the_fitted_size() {
        let mut rotated = element(ClippingRect::new(0, 0, 360, 640), false, false);
        rotated.capture.rotate = RotateDirection::Degrees90;
        let placement = ElementPlacement::compute(&rotated, CANVAS).unwrap();
        assert_eq!(placement.image, Rect::new(1120.0, 90.0, 640.0, 360.0));
    }

    #[test]
    fn empty_clipping_has_no_placement() {
        let placement =
            ElementPlacement::compute(&element(ClippingRect::new(0, 0, 0, 360), false, false), CANVAS);
        assert!(placement.is_none());
    }

    #[test]
    fn degenerate_bounds_have_no_placement() {
        let mut flat = element(ClippingRect::new(0, 0, 640, 360), false, false);
        flat.bounds = RelativeBounds::new(0.5, 0.5, 0.5, 1.0);
        assert!(ElementPlacement::compute(&flat, CANVAS).is_none());
    }
}
