use crate::core::{EventId, EventSet, Interval, TimelineEvent};
use crate::interaction::BrushRange;

/// Host hooks invoked synchronously by [`GanttChart`](super::GanttChart).
///
/// Every method has a default, so hosts override only what they observe.
/// Hooks see read-only data; edits go through the chart's own methods.
pub trait GanttCallbacks {
    /// A bar was selected by a click (direct or via an empty brush).
    fn on_bar_clicked(&mut self, _id: EventId, _interval: &Interval) {}

    /// A drag tick committed; `interval` is the live record after the tick.
    fn on_bar_changed(&mut self, _id: EventId, _interval: &Interval) {}

    /// A drag gesture that committed at least one tick has ended.
    fn on_bar_edited(&mut self, _id: EventId, _interval: &Interval) {}

    /// Builds the interval to persist from a brush-create draft.
    ///
    /// Returning `None` declines the creation.
    fn on_bar_created(&mut self, draft: Interval) -> Option<Interval> {
        Some(draft)
    }

    /// Fired on every brush tick with a non-empty range.
    fn on_brush(&mut self, _range: BrushRange, _selected: &[TimelineEvent]) {}

    /// Fired when a non-empty brush gesture ends.
    fn on_brush_end(&mut self, _range: BrushRange, _selected: &[TimelineEvent]) {}

    /// Whether intervals on `label` may be dragged or created.
    fn is_editable(&self, _label: &str, _events: &EventSet) -> bool {
        true
    }
}

/// Callbacks that accept every default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl GanttCallbacks for NoopCallbacks {}
