#![forbid(unsafe_code)]

//! Layout elements and the model that owns them.
//!
//! The editor never owns the element collection. It talks to it through
//! [`LayoutModel`], reading and writing bounds by index. [`LayoutProfile`] is
//! the in-memory implementation used by hosts that have no model of their own
//! and by the tests.
//!
//! # Consistency
//!
//! A renderer may read bounds while a drag is writing them. There is no
//! transaction: a single frame may observe either the previous or the
//! updated rect of the element being dragged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::space::RelativeBounds;
use crate::{FitOptions, Size};

/// Static rotation applied downstream of the fitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDirection {
    #[default]
    NoRotate,
    Degrees90,
    Degrees180,
    Degrees270,
}

impl RotateDirection {
    /// Size of a frame after rotation: quarter turns swap the axes.
    #[must_use]
    pub const fn oriented(self, size: Size) -> Size {
        match self {
            Self::NoRotate | Self::Degrees180 => size,
            Self::Degrees90 | Self::Degrees270 => size.transposed(),
        }
    }

    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::NoRotate => 0,
            Self::Degrees90 => 90,
            Self::Degrees180 => 180,
            Self::Degrees270 => 270,
        }
    }
}

/// Clipping area inside the captured window, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClippingRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ClippingRect {
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clipping size as a floating-point [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Per-pane capture parameters. Opaque to the geometry core apart from the
/// fit flags, clipping size, and rotation consumed by placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureParams {
    /// Native window handle of the capture source; `0` means none.
    pub window: u64,
    pub clipping: ClippingRect,
    pub show_cursor: bool,
    pub show_layered_window: bool,
    pub stretch: bool,
    pub keep_aspect_ratio: bool,
    pub rotate: RotateDirection,
    /// Whether the clipping area tracks the whole window.
    pub fit: bool,
    pub scaler: ScalerConfig,
}

/// Resampling settings handed to the downstream scaler untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalerConfig {
    /// Scaler algorithm flags (bilinear, bicubic, ...), as the scaler encodes them.
    pub flags: u32,
    pub accurate_rounding: bool,
    /// Whether the blur/sharpen pre-filter below is applied.
    pub filter_enabled: bool,
    pub luma_gblur: f32,
    pub chroma_gblur: f32,
    pub luma_sharpen: f32,
    pub chroma_sharpen: f32,
    pub chroma_hshift: f32,
    pub chroma_vshift: f32,
}

impl CaptureParams {
    /// Scaling flags passed to the fitter.
    #[must_use]
    pub const fn fit_options(&self) -> FitOptions {
        FitOptions::new(self.stretch, self.keep_aspect_ratio)
    }

    /// Clip to the whole window and keep tracking it.
    pub fn fit_to_window(&mut self, window_width: i32, window_height: i32) {
        self.fit = true;
        self.clipping = ClippingRect::new(0, 0, window_width, window_height);
    }

    /// Size of the captured frame after the downstream rotation.
    #[must_use]
    pub fn oriented_input_size(&self) -> Size {
        self.rotate.oriented(self.clipping.size())
    }
}

/// One pane of the layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutElement {
    pub bounds: RelativeBounds,
    /// Caption of the captured window.
    pub caption: String,
    #[serde(default)]
    pub capture: CaptureParams,
}

impl LayoutElement {
    #[must_use]
    pub fn new(bounds: RelativeBounds, caption: impl Into<String>) -> Self {
        Self {
            bounds,
            caption: caption.into(),
            capture: CaptureParams::default(),
        }
    }

    #[must_use]
    pub fn with_capture(mut self, capture: CaptureParams) -> Self {
        self.capture = capture;
        self
    }

    /// One-based label drawn in the editor, e.g. `"2: Terminal"`.
    #[must_use]
    pub fn caption_label(&self, index: usize) -> String {
        format!("{}: {}", index + 1, self.caption)
    }
}

/// Index-addressed element collection owned by the host.
///
/// Index order is z-order: a later index is drawn above and hit-tested
/// before an earlier one. Setters return nothing; the caller decides when
/// to redraw or propagate.
///
/// Indices are stable: an element keeps its index for as long as it exists.
/// Implementations may only shrink the collection from the top, so that a
/// drag in progress never ends up addressing a different element.
pub trait LayoutModel {
    /// Number of elements.
    fn element_count(&self) -> usize;

    /// Bounds of the element at `index`, if it exists.
    fn bounds(&self, index: usize) -> Option<RelativeBounds>;

    /// Overwrite the bounds of the element at `index`.
    fn set_bounds(&mut self, index: usize, bounds: RelativeBounds);

    /// Currently selected element.
    fn current_index(&self) -> Option<usize>;

    /// Change the selected element.
    fn set_current_index(&mut self, index: usize);

    /// Bounds of every element, in index order.
    fn all_bounds(&self) -> Vec<RelativeBounds> {
        (0..self.element_count())
            .filter_map(|index| self.bounds(index))
            .collect()
    }
}

/// Errors from [`LayoutProfile`] mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutModelError {
    IndexOutOfRange { index: usize, len: usize },
    InvalidBounds { index: usize, bounds: RelativeBounds },
}

impl fmt::Display for LayoutModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "element index {index} out of range (len {len})")
            }
            Self::InvalidBounds { index, bounds } => write!(
                f,
                "invalid bounds for element {index}: left={} top={} right={} bottom={}",
                bounds.left, bounds.top, bounds.right, bounds.bottom
            ),
        }
    }
}

impl std::error::Error for LayoutModelError {}

/// In-memory layout model.
///
/// Bounds validity is enforced by [`update_bounds`](Self::update_bounds) and
/// the [`LayoutModel`] setters only. Elements added through
/// [`from_elements`](Self::from_elements), [`push`](Self::push), or
/// [`get_mut`](Self::get_mut) are taken as given; call
/// [`validate`](Self::validate) after loading a profile from outside.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutProfile {
    elements: Vec<LayoutElement>,
    current: Option<usize>,
}

impl LayoutProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from elements; the first one becomes current.
    #[must_use]
    pub fn from_elements(elements: Vec<LayoutElement>) -> Self {
        let current = (!elements.is_empty()).then_some(0);
        Self { elements, current }
    }

    /// Append an element on top of the z-order and return its index.
    pub fn push(&mut self, element: LayoutElement) -> usize {
        self.elements.push(element);
        let index = self.elements.len() - 1;
        if self.current.is_none() {
            self.current = Some(index);
        }
        index
    }

    /// Remove the topmost element. Every other element keeps its index.
    pub fn pop(&mut self) -> Option<LayoutElement> {
        let removed = self.elements.pop()?;
        let len = self.elements.len();
        self.current = match self.current {
            _ if len == 0 => None,
            Some(current) => Some(current.min(len - 1)),
            None => None,
        };
        Some(removed)
    }

    /// First element whose bounds are invalid, as an error.
    pub fn validate(&self) -> Result<(), LayoutModelError> {
        match self
            .elements
            .iter()
            .position(|element| !element.bounds.is_valid())
        {
            Some(index) => Err(LayoutModelError::InvalidBounds {
                index,
                bounds: self.elements[index].bounds,
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LayoutElement> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut LayoutElement> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutElement> + '_ {
        self.elements.iter()
    }

    /// Currently selected element.
    #[must_use]
    pub fn current(&self) -> Option<&LayoutElement> {
        self.current.and_then(|index| self.elements.get(index))
    }

    /// Checked bounds update.
    pub fn update_bounds(
        &mut self,
        index: usize,
        bounds: RelativeBounds,
    ) -> Result<(), LayoutModelError> {
        self.check_index(index)?;
        if !bounds.is_valid() {
            return Err(LayoutModelError::InvalidBounds { index, bounds });
        }
        self.elements[index].bounds = bounds;
        Ok(())
    }

    /// Checked selection change.
    pub fn select(&mut self, index: usize) -> Result<(), LayoutModelError> {
        self.check_index(index)?;
        self.current = Some(index);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), LayoutModelError> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(LayoutModelError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
        }
    }
}

impl LayoutModel for LayoutProfile {
    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn bounds(&self, index: usize) -> Option<RelativeBounds> {
        self.elements.get(index).map(|element| element.bounds)
    }

    fn set_bounds(&mut self, index: usize, bounds: RelativeBounds) {
        if let Err(error) = self.update_bounds(index, bounds) {
            tracing::warn!(target: "panefit.layout", %error, "bounds update rejected");
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.current
    }

    fn set_current_index(&mut self, index: usize) {
        if let Err(error) = self.select(index) {
            tracing::warn!(target: "panefit.layout", %error, "selection change rejected");
        }
    }
}
