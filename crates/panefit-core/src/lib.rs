#![forbid(unsafe_code)]

//! Core geometry for panefit: rectangles in bound and relative space, and
//! the aspect-aware fitter that places a captured image inside its pane.
//!
//! # Role in panefit
//! `panefit-core` is the leaf crate. It has no state and performs no I/O;
//! every function is pure and safe to call from a render thread while the
//! editor mutates the layout on another.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Rect`], [`Size`], [`Point`], [`Padding`].
//! - **Fitting**: [`fit`] and [`padding`], driven by the [`FitPolicy`]
//!   decision table.

pub mod fit;
pub mod geometry;

pub use fit::{FitOptions, FitPolicy, fit, padding};
pub use geometry::{Padding, Point, Rect, Size};
