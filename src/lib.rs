//! gantt-rs: interaction core for editable Gantt-style timelines.
//!
//! Maps labeled intervals and point events onto time and lane scales, turns
//! pointer drags into validated interval edits, and reconciles click and brush
//! selection, including creating intervals from a click in empty lane space.
//! Drawing is delegated to a [`render::Renderer`] backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GanttChart, GanttChartConfig};
pub use error::{GanttError, GanttResult};
