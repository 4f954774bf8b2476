#![forbid(unsafe_code)]

//! panefit public facade crate.
//!
//! Re-exports the geometry core and the layout editor, and offers a
//! lightweight prelude for hosts that embed the editor.
//!
//! ```rust,ignore
//! use panefit::prelude::*;
//!
//! let mut model = LayoutProfile::from_elements(vec![
//!     LayoutElement::new(RelativeBounds::new(0.0, 0.0, 0.5, 0.5), "Terminal"),
//! ]);
//! let mut editor = LayoutEditorSession::new(EditorConfig::from_env())?;
//! editor.pointer_down(&mut model, Point::new(10.0, 10.0));
//! editor.pointer_move(&mut model, Point::new(20.0, 10.0));
//! editor.pointer_up(&model);
//! ```

use std::fmt;

// --- Geometry re-exports ---------------------------------------------------

pub use panefit_core::{FitOptions, FitPolicy, Padding, Point, Rect, Size, fit, padding};

// --- Layout re-exports -----------------------------------------------------

pub use panefit_layout::{
    CaptureParams, ClippingRect, ConfigError, CursorShape, EDITOR_SCALE, EditorConfig,
    EditorEffect, EditorPhase, EditorTransition, ElementPlacement, HitClassifier, HitRegion,
    HitTest, LayoutEditorSession, LayoutElement, LayoutModel, LayoutModelError, LayoutProfile,
    MoveResizeEngine, RelativeBounds, RotateDirection, ScalerConfig, SnapGuide,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for panefit hosts.
#[derive(Debug)]
pub enum Error {
    /// Editor configuration could not be loaded or validated.
    Config(ConfigError),
    /// A layout model mutation was rejected.
    Model(LayoutModelError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Model(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LayoutModelError> for Error {
    fn from(err: LayoutModelError) -> Self {
        Self::Model(err)
    }
}

/// Standard result type for panefit APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        EditorConfig, EditorEffect, ElementPlacement, Error, LayoutEditorSession, LayoutElement,
        LayoutModel, LayoutProfile, Point, Rect, RelativeBounds, Result, Size,
    };

    pub use crate::{core, layout};
}

pub use panefit_core as core;
pub use panefit_layout as layout;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::error::Error as _;

    fn edit(model: &mut LayoutProfile) -> Result<RelativeBounds> {
        let mut editor = LayoutEditorSession::new(EditorConfig::from_json_str(
            r#"{"border_thickness": 1.0, "snap_enabled": false}"#,
        )?)?;
        editor.pointer_down(model, Point::new(10.0, 10.0));
        editor.pointer_move(model, Point::new(30.0, 10.0));
        editor.pointer_up(&*model);
        Ok(model.get(0).map_or(RelativeBounds::FULL, |e| e.bounds))
    }

    #[test]
    fn prelude_drives_a_gesture() {
        let mut model = LayoutProfile::from_elements(vec![LayoutElement::new(
            RelativeBounds::new(0.0, 0.0, 0.5, 0.5),
            "Terminal",
        )]);
        let bounds = edit(&mut model).unwrap();
        assert!((bounds.left - 0.2).abs() < 1e-9);
        assert!((bounds.right - 0.7).abs() < 1e-9);
    }

    #[test]
    fn config_errors_convert() {
        let err: Error = EditorConfig::from_json_str("[").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("JSON parse error"));
        assert!(err.source().is_some());
    }

    #[test]
    fn model_errors_convert() {
        let mut model = LayoutProfile::new();
        let err: Error = model.select(3).unwrap_err().into();
        assert_eq!(err.to_string(), "element index 3 out of range (len 0)");
        assert!(matches!(err, Error::Model(_)));
    }

    #[test]
    fn module_aliases_reach_both_crates() {
        let rect = core::Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(layout::classify_rect(rect, Point::new(5.0, 5.0), 1.0).is_some());
    }
}
