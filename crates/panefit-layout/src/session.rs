#![forbid(unsafe_code)]

//! Pointer-driven layout editing.
//!
//! [`LayoutEditorSession`] owns the drag lifecycle and nothing else; pane
//! bounds and the selection live in the host's [`LayoutModel`]. Pointer
//! positions arrive in editor space and are converted to relative space
//! before hit testing.
//!
//! ```text
//! Idle --pointer_down(hit)--> Dragging --pointer_up / cancel--> Idle
//! ```
//!
//! Every call returns an [`EditorTransition`] describing the state change and
//! its effect, so the caller can redraw the affected pane or update the
//! cursor without polling.

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::config::{ConfigError, EditorConfig};
use crate::element::LayoutModel;
use crate::engine::{MoveResizeEngine, RelativeMouseOffset};
use crate::hit::{CursorShape, HitClassifier, HitRegion, HitTest};
use crate::snap::SnapGuide;
use crate::space::{RelativeBounds, editor_to_relative};

/// Per-gesture data, discarded on pointer-up or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub index: usize,
    pub region: HitRegion,
    pub offset: RelativeMouseOffset,
    /// Bounds when the drag started.
    pub origin: RelativeBounds,
    pub guide: SnapGuide,
}

/// Editor lifecycle state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Dragging(DragState),
}

impl EditorState {
    /// Copyable summary for transitions and logs.
    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        match self {
            Self::Idle => EditorPhase::Idle,
            Self::Dragging(drag) => EditorPhase::Dragging {
                index: drag.index,
                region: drag.region,
            },
        }
    }
}

/// Summary of an [`EditorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EditorPhase {
    #[default]
    Idle,
    Dragging { index: usize, region: HitRegion },
}

/// Explicit no-op diagnostics for events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorNoopReason {
    /// Pointer went down outside every pane.
    NeutralPress,
    /// Pointer went up with no drag in progress.
    IdleRelease,
    /// Pointer went down while a drag was already running.
    ActiveDragInProgress,
    /// The dragged element disappeared from the model.
    ElementMissing,
}

/// Effect emitted by one session step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EditorEffect {
    /// Idle pointer movement; only the cursor changes.
    Hover { hit: HitTest, cursor: CursorShape },
    DragStarted {
        index: usize,
        region: HitRegion,
        /// Selection before the press, when it changed.
        previous_selection: Option<usize>,
        selection_changed: bool,
        origin: RelativeBounds,
        cursor: CursorShape,
    },
    DragUpdated {
        index: usize,
        region: HitRegion,
        bounds: RelativeBounds,
    },
    DragEnded {
        index: usize,
        bounds: RelativeBounds,
    },
    /// Gesture aborted; `origin` is where the pane was when it started.
    Canceled {
        index: usize,
        origin: RelativeBounds,
    },
    Noop {
        reason: EditorNoopReason,
    },
}

/// One state transition with a monotonically increasing id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorTransition {
    pub transition_id: u64,
    pub from: EditorPhase,
    pub to: EditorPhase,
    pub effect: EditorEffect,
}

/// Drag/resize session over a host [`LayoutModel`].
#[derive(Debug, Clone)]
pub struct LayoutEditorSession {
    config: EditorConfig,
    classifier: HitClassifier,
    engine: MoveResizeEngine,
    state: EditorState,
    transition_counter: u64,
}

impl Default for LayoutEditorSession {
    fn default() -> Self {
        Self::with_valid_config(EditorConfig::default())
    }
}

impl LayoutEditorSession {
    /// Session with validated tuning.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_valid_config(config.validated()?))
    }

    fn with_valid_config(config: EditorConfig) -> Self {
        Self {
            classifier: HitClassifier::new(config.relative_border()),
            engine: MoveResizeEngine::new(config.relative_min_extent()),
            config,
            state: EditorState::Idle,
            transition_counter: 0,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> EditorPhase {
        self.state.phase()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, EditorState::Dragging(_))
    }

    /// Hit test an editor-space point without touching any state.
    #[must_use]
    pub fn hit_test<M: LayoutModel + ?Sized>(&self, model: &M, point: Point) -> HitTest {
        self.classifier
            .classify_model(model, editor_to_relative(point))
    }

    /// Press: select the pane under the pointer and start a drag on it.
    pub fn pointer_down<M: LayoutModel + ?Sized>(
        &mut self,
        model: &mut M,
        point: Point,
    ) -> EditorTransition {
        let from = self.phase();
        if self.is_dragging() {
            return self.transition(
                from,
                EditorEffect::Noop {
                    reason: EditorNoopReason::ActiveDragInProgress,
                },
            );
        }

        let pointer = editor_to_relative(point);
        let hit = self.classifier.classify_model(model, pointer);
        let Some(index) = hit.index else {
            return self.transition(
                from,
                EditorEffect::Noop {
                    reason: EditorNoopReason::NeutralPress,
                },
            );
        };
        let Some(origin) = model.bounds(index) else {
            return self.transition(
                from,
                EditorEffect::Noop {
                    reason: EditorNoopReason::ElementMissing,
                },
            );
        };

        let _span = tracing::debug_span!(
            "editor.drag_start",
            index,
            region = ?hit.region,
        )
        .entered();

        let previous_selection = model.current_index();
        let selection_changed = previous_selection != Some(index);
        if selection_changed {
            model.set_current_index(index);
            tracing::debug!(
                target: "panefit.editor",
                index,
                previous = ?previous_selection,
                "selection changed"
            );
        }

        let guide = if self.config.snap_enabled {
            SnapGuide::from_model(model, index, self.config.relative_snap_tolerance())
        } else {
            SnapGuide::disabled()
        };
        self.state = EditorState::Dragging(DragState {
            index,
            region: hit.region,
            offset: RelativeMouseOffset::capture(origin, pointer),
            origin,
            guide,
        });
        tracing::debug!(
            target: "panefit.editor",
            index,
            region = ?hit.region,
            left = origin.left,
            top = origin.top,
            right = origin.right,
            bottom = origin.bottom,
            "drag started"
        );

        self.transition(
            from,
            EditorEffect::DragStarted {
                index,
                region: hit.region,
                previous_selection,
                selection_changed,
                origin,
                cursor: hit.region.cursor(),
            },
        )
    }

    /// Motion: hover feedback when idle, otherwise move/resize the dragged
    /// pane and write the result back to `model`.
    pub fn pointer_move<M: LayoutModel + ?Sized>(
        &mut self,
        model: &mut M,
        point: Point,
    ) -> EditorTransition {
        let from = self.phase();
        let pointer = editor_to_relative(point);
        let EditorState::Dragging(drag) = &self.state else {
            let hit = self.classifier.classify_model(model, pointer);
            return self.transition(
                from,
                EditorEffect::Hover {
                    hit,
                    cursor: hit.region.cursor(),
                },
            );
        };

        if drag.index >= model.element_count() {
            let index = drag.index;
            self.state = EditorState::Idle;
            tracing::warn!(target: "panefit.editor", index, "dragged element vanished");
            return self.transition(
                from,
                EditorEffect::Noop {
                    reason: EditorNoopReason::ElementMissing,
                },
            );
        }

        let bounds = self
            .engine
            .drag(drag.region, drag.origin, pointer, drag.offset, &drag.guide);
        let (index, region) = (drag.index, drag.region);
        model.set_bounds(index, bounds);
        tracing::trace!(
            target: "panefit.editor",
            index,
            region = ?region,
            left = bounds.left,
            top = bounds.top,
            right = bounds.right,
            bottom = bounds.bottom,
            "drag updated"
        );

        self.transition(
            from,
            EditorEffect::DragUpdated {
                index,
                region,
                bounds,
            },
        )
    }

    /// Release: end the drag where it is.
    pub fn pointer_up<M: LayoutModel + ?Sized>(&mut self, model: &M) -> EditorTransition {
        let from = self.phase();
        match std::mem::take(&mut self.state) {
            EditorState::Idle => self.transition(
                from,
                EditorEffect::Noop {
                    reason: EditorNoopReason::IdleRelease,
                },
            ),
            EditorState::Dragging(drag) => {
                let bounds = model.bounds(drag.index).unwrap_or(drag.origin);
                tracing::debug!(
                    target: "panefit.editor",
                    index = drag.index,
                    left = bounds.left,
                    top = bounds.top,
                    right = bounds.right,
                    bottom = bounds.bottom,
                    "drag ended"
                );
                self.transition(
                    from,
                    EditorEffect::DragEnded {
                        index: drag.index,
                        bounds,
                    },
                )
            }
        }
    }

    /// Abort an active drag. Bounds already written stay in the model; the
    /// returned effect carries the starting bounds so the host can revert.
    ///
    /// Returns `None` when idle.
    pub fn cancel(&mut self) -> Option<EditorTransition> {
        let from = self.phase();
        match std::mem::take(&mut self.state) {
            EditorState::Idle => None,
            EditorState::Dragging(drag) => {
                tracing::debug!(target: "panefit.editor", index = drag.index, "drag canceled");
                Some(self.transition(
                    from,
                    EditorEffect::Canceled {
                        index: drag.index,
                        origin: drag.origin,
                    },
                ))
            }
        }
    }

    fn transition(&mut self, from: EditorPhase, effect: EditorEffect) -> EditorTransition {
        self.transition_counter = self.transition_counter.saturating_add(1);
        EditorTransition {
            transition_id: self.transition_counter,
            from,
            to: self.state.phase(),
            effect,
        }
    }
}
