#![forbid(unsafe_code)]

//! Editor tuning loaded from TOML, JSON, or the environment.
//!
//! All values are in editor units (relative space times
//! [`EDITOR_SCALE`](crate::space::EDITOR_SCALE)), so a border of `1.5` is 1.5%
//! of the canvas regardless of the preview's pixel size.
//!
//! ```toml
//! # panefit.toml
//! border_thickness = 2.0
//! snap_enabled = true
//! snap_tolerance = 1.0
//! min_extent = 0.5
//! ```
//!
//! ```rust,ignore
//! let config = EditorConfig::from_toml_file("panefit.toml")?.validated()?;
//! ```
//!
//! # Environment
//!
//! | variable                   | field              |
//! |----------------------------|--------------------|
//! | `PANEFIT_BORDER_THICKNESS` | `border_thickness` |
//! | `PANEFIT_SNAP`             | `snap_enabled`     |
//! | `PANEFIT_SNAP_TOLERANCE`   | `snap_tolerance`   |
//! | `PANEFIT_MIN_EXTENT`       | `min_extent`       |
//!
//! Unparseable values are ignored and logged.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::space::EDITOR_SCALE;

const ENV_BORDER_THICKNESS: &str = "PANEFIT_BORDER_THICKNESS";
const ENV_SNAP: &str = "PANEFIT_SNAP";
const ENV_SNAP_TOLERANCE: &str = "PANEFIT_SNAP_TOLERANCE";
const ENV_MIN_EXTENT: &str = "PANEFIT_MIN_EXTENT";

/// Tunable parameters of the layout editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of the resize band around each pane edge.
    pub border_thickness: f64,
    /// Whether dragged edges snap to sibling edges.
    pub snap_enabled: bool,
    /// Maximum snap distance.
    pub snap_tolerance: f64,
    /// Minimum width and height a resize may leave.
    pub min_extent: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            border_thickness: 1.5,
            snap_enabled: true,
            snap_tolerance: 1.5,
            min_extent: 1.0,
        }
    }
}

impl EditorConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(target: "panefit.config", path = %path.display(), "loading toml config");
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(target: "panefit.config", path = %path.display(), "loading json config");
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Defaults overridden by `PANEFIT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::default().with_env_overrides(get_env)
    }

    /// Apply `PANEFIT_*` overrides on top of `self`.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env_f64(&get_env, ENV_BORDER_THICKNESS) {
            self.border_thickness = value;
        }
        if let Some(value) = get_env(ENV_SNAP) {
            match parse_bool(&value) {
                Some(enabled) => self.snap_enabled = enabled,
                None => tracing::warn!(
                    target: "panefit.config",
                    key = ENV_SNAP,
                    value = %value,
                    "ignoring unparseable override"
                ),
            }
        }
        if let Some(value) = env_f64(&get_env, ENV_SNAP_TOLERANCE) {
            self.snap_tolerance = value;
        }
        if let Some(value) = env_f64(&get_env, ENV_MIN_EXTENT) {
            self.min_extent = value;
        }
        self
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.border_thickness.is_finite() || self.border_thickness < 0.0 {
            errors.push(format!(
                "border_thickness must be finite and >= 0, got {}",
                self.border_thickness
            ));
        }
        if !self.snap_tolerance.is_finite() || self.snap_tolerance < 0.0 {
            errors.push(format!(
                "snap_tolerance must be finite and >= 0, got {}",
                self.snap_tolerance
            ));
        }
        if !self.min_extent.is_finite() || self.min_extent <= 0.0 || self.min_extent > EDITOR_SCALE
        {
            errors.push(format!(
                "min_extent must be in (0, {EDITOR_SCALE}], got {}",
                self.min_extent
            ));
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) reports nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(
                target: "panefit.config",
                count = errors.len(),
                errors = %errors.join("; "),
                "rejected editor config"
            );
            Err(ConfigError::Validation(errors))
        }
    }

    /// Border band in relative units.
    #[inline]
    #[must_use]
    pub fn relative_border(&self) -> f64 {
        self.border_thickness / EDITOR_SCALE
    }

    /// Snap tolerance in relative units; `0` when snapping is off.
    #[inline]
    #[must_use]
    pub fn relative_snap_tolerance(&self) -> f64 {
        if self.snap_enabled {
            self.snap_tolerance / EDITOR_SCALE
        } else {
            0.0
        }
    }

    /// Minimum extent in relative units.
    #[inline]
    #[must_use]
    pub fn relative_min_extent(&self) -> f64 {
        self.min_extent / EDITOR_SCALE
    }
}

fn env_f64<F>(get_env: &F, key: &str) -> Option<f64>
where
    F: Fn(&str) -> Option<String>,
{
    let value = get_env(key)?;
    match value.trim().parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::warn!(
                target: "panefit.config",
                key,
                value = %value,
                %error,
                "ignoring unparseable override"
            );
            None
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Errors that can occur when loading an editor configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
