mod brush_coordinator;
mod callbacks;
mod chart;
mod config;
mod drag_coordinator;
mod frame_builder;
mod render_style;

pub use brush_coordinator::BrushOutcome;
pub use callbacks::{GanttCallbacks, NoopCallbacks};
pub use chart::GanttChart;
pub use config::GanttChartConfig;
pub use render_style::RenderStyle;
