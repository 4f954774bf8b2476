#![forbid(unsafe_code)]

//! Interactive pane layout for panefit.
//!
//! # Role in panefit
//! `panefit-layout` sits between the host's layout model and the pure
//! geometry in `panefit-core`. It turns pointer events into pane bounds and
//! pane bounds into canvas placements.
//!
//! # Primary responsibilities
//! - **Model**: [`LayoutModel`], [`LayoutProfile`], [`CaptureParams`].
//! - **Hit testing**: [`HitClassifier`] over stacked panes.
//! - **Snapping**: [`SnapGuide`] captured once per drag.
//! - **Dragging**: [`MoveResizeEngine`] and the [`LayoutEditorSession`]
//!   lifecycle.
//! - **Placement**: [`ElementPlacement`] on the output canvas.
//! - **Tuning**: [`EditorConfig`] from TOML, JSON, or `PANEFIT_*` variables.
//!
//! # Consistency
//! The session writes bounds into the model one drag step at a time and a
//! renderer may read them at any point. A frame can show a stale or
//! just-updated rect; there is no transaction around a gesture.

pub mod config;
pub mod element;
pub mod engine;
pub mod hit;
pub mod placement;
pub mod session;
pub mod snap;
pub mod space;

pub use panefit_core::{FitOptions, FitPolicy, Padding, Point, Rect, Size, fit, padding};

pub use config::{ConfigError, EditorConfig};
pub use element::{
    CaptureParams, ClippingRect, LayoutElement, LayoutModel, LayoutModelError, LayoutProfile,
    RotateDirection, ScalerConfig,
};
pub use engine::{DEFAULT_MIN_EXTENT, MoveResizeEngine, RelativeMouseOffset};
pub use hit::{CursorShape, HitClassifier, HitRegion, HitTest, classify_rect};
pub use placement::ElementPlacement;
pub use session::{
    DragState, EditorEffect, EditorNoopReason, EditorPhase, EditorState, EditorTransition,
    LayoutEditorSession,
};
pub use snap::{Axis, SnapDecision, SnapGuide, SnapLine};
pub use space::{EDITOR_SCALE, RelativeBounds, editor_to_relative, relative_to_editor};
