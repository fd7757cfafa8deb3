//! Gesture state machines.
//!
//! Drag and brush are mutually exclusive: the orchestrator enables exactly one
//! of them at a time and routes pointer input accordingly.

mod brush;
mod drag;

use serde::{Deserialize, Serialize};

pub use brush::{
    BrushEnd, BrushRange, BrushState, CreateRejection, DEFAULT_CREATE_PADDING_SECS, Selection,
    SelectionController,
};
pub use drag::{DragController, DragHandle, DragOutcome, DragRejection, DragState};

/// Which gesture currently owns pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Brush is enabled and no gesture is in flight.
    Idle,
    Brushing,
    /// A bar is selected and its handles are attached.
    BarSelected,
    Dragging(DragHandle),
}
