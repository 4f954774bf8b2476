#![forbid(unsafe_code)]

//! Aspect-aware placement of a source image inside a bound rectangle.
//!
//! The four combinations of `stretch` and `keep_aspect_ratio` collapse into
//! three placement policies:
//!
//! | keep aspect | input fits bound | stretch | policy        |
//! |-------------|------------------|---------|---------------|
//! | no          | yes              | yes     | `Fill`        |
//! | no          | no               | any     | `Fill`        |
//! | yes         | yes              | yes     | `AspectScale` |
//! | yes         | no               | any     | `AspectScale` |
//! | any         | yes              | no      | `PadNative`   |
//!
//! Every function here is pure and reentrant.

use serde::{Deserialize, Serialize};

use crate::geometry::{Padding, Rect, Size};

/// Scaling flags attached to a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FitOptions {
    /// Allow enlarging an input smaller than the bound.
    pub stretch: bool,
    /// Preserve the input's width/height ratio.
    pub keep_aspect_ratio: bool,
}

impl FitOptions {
    #[must_use]
    pub const fn new(stretch: bool, keep_aspect_ratio: bool) -> Self {
        Self {
            stretch,
            keep_aspect_ratio,
        }
    }
}

/// Placement policy chosen for one (bound, input, options) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Output equals the bound rect; aspect ratio is ignored.
    Fill,
    /// Scale until the dominant dimension matches the bound, center the other.
    AspectScale,
    /// Keep the native input size, centered inside the bound.
    PadNative,
}

impl FitPolicy {
    /// Decision table over `need_expand` (input fits inside the bound on
    /// both axes) and the two option flags.
    #[must_use]
    pub const fn select(need_expand: bool, options: FitOptions) -> Self {
        match (options.keep_aspect_ratio, need_expand, options.stretch) {
            (_, true, false) => Self::PadNative,
            (false, true, true) | (false, false, _) => Self::Fill,
            (true, true, true) | (true, false, _) => Self::AspectScale,
        }
    }

    /// Resolve the policy for a concrete bound and input size.
    #[must_use]
    pub fn resolve(bound: Size, input: Size, options: FitOptions) -> Self {
        Self::select(input.fits_within(bound), options)
    }
}

/// Compute where `input` lands inside `bound`, in `bound`'s coordinate space.
///
/// # Panics
///
/// Panics if either size has a non-positive or non-finite dimension. Callers
/// own these values, so a degenerate size is a programming error.
#[must_use]
pub fn fit(bound: Rect, input: Size, options: FitOptions) -> Rect {
    assert!(
        bound.size().is_valid() && input.is_valid(),
        "fit requires positive sizes (bound {}x{}, input {}x{})",
        bound.width,
        bound.height,
        input.width,
        input.height
    );

    if input == bound.size() {
        return bound;
    }

    match FitPolicy::resolve(bound.size(), input, options) {
        FitPolicy::Fill => bound,
        FitPolicy::AspectScale => aspect_scale(bound, input),
        FitPolicy::PadNative => Rect::new(
            bound.x + (bound.width - input.width) / 2.0,
            bound.y + (bound.height - input.height) / 2.0,
            input.width,
            input.height,
        ),
    }
}

/// Padding left around the fitted input when the bound sits at the origin.
///
/// `left + width + right == bound.width` and `top + height + bottom ==
/// bound.height` hold for every flag combination.
///
/// # Panics
///
/// Same preconditions as [`fit`].
#[must_use]
pub fn padding(bound: Size, input: Size, options: FitOptions) -> Padding {
    let placed = fit(Rect::from_size(bound), input, options);
    Padding {
        top: placed.y,
        bottom: bound.height - (placed.y + placed.height),
        left: placed.x,
        right: bound.width - (placed.x + placed.width),
    }
}

fn aspect_scale(bound: Rect, input: Size) -> Rect {
    if input.aspect_ratio() >= bound.size().aspect_ratio() {
        // Input is relatively wider: match widths.
        let height = (input.height * bound.width / input.width).min(bound.height);
        Rect::new(
            bound.x,
            bound.y + (bound.height - height) / 2.0,
            bound.width,
            height,
        )
    } else {
        let width = (input.width * bound.height / input.height).min(bound.width);
        Rect::new(
            bound.x + (bound.width - width) / 2.0,
            bound.y,
            width,
            bound.height,
        )
    }
}
