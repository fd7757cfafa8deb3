use tracing::{debug, warn};

use crate::core::{EventId, Interval};
use crate::interaction::{DragHandle, DragOutcome};
use crate::render::Renderer;

use super::GanttChart;

impl<R: Renderer> GanttChart<R> {
    /// Handles a click on a rendered bar.
    ///
    /// Selects exactly that bar, notifies the host, and attaches drag handles
    /// when its lane is editable. Returns `false` for unknown or non-interval
    /// ids and while a drag gesture is in flight.
    pub fn click_bar(&mut self, id: EventId) -> bool {
        if self.drag.state().is_dragging() {
            return false;
        }
        let Some(interval) = self.events.interval(id).cloned() else {
            return false;
        };
        self.brush.select_only(id);
        self.callbacks.on_bar_clicked(id, &interval);
        self.arm_drag(id, &interval.label);
        true
    }

    /// Starts a drag gesture on the selected bar.
    ///
    /// Returns `false` when `id` is not the bar carrying handles.
    pub fn drag_start(&mut self, id: EventId, handle: DragHandle) -> bool {
        let started = self.drag.begin(id, handle);
        if started {
            debug!(?id, ?handle, "drag started");
        }
        started
    }

    /// Applies one pointer-move tick of `delta_x` pixels since the previous tick.
    pub fn drag_move(&mut self, delta_x: f64) -> DragOutcome {
        if !delta_x.is_finite() {
            return DragOutcome::Ignored;
        }
        let outcome = self.drag.tick(delta_x, &mut self.events, self.time_scale);
        if let (DragOutcome::Committed(interval), Some(id)) = (&outcome, self.drag.target()) {
            self.callbacks.on_bar_changed(id, interval);
        }
        outcome
    }

    /// Ends the drag gesture; the last committed tick stands.
    pub fn drag_end(&mut self) {
        let Some(id) = self.drag.target() else {
            return;
        };
        if !self.drag.state().is_dragging() {
            return;
        }
        let committed = self.drag.end();
        debug!(?id, committed, "drag ended");
        if committed > 0 {
            if let Some(interval) = self.events.interval(id) {
                self.callbacks.on_bar_edited(id, interval);
            }
        }
        self.brush_enabled = !self.drag.is_enabled();
    }

    /// Clears every highlight, removes handles, and re-enables the brush.
    pub fn clear_selection(&mut self) {
        self.brush.clear();
        self.drag.disable();
        self.brush_enabled = true;
    }

    /// Deletes the bar carrying drag handles and returns it.
    pub fn delete_selected(&mut self) -> Option<Interval> {
        let id = self.drag.target()?;
        let removed = self.events.remove(id)?;
        self.brush.forget(id);
        self.drag.disable();
        self.brush_enabled = true;
        if let Err(err) = self.refresh_lanes() {
            warn!(error = %err, "skipping lane refresh after delete");
        }
        debug!(?id, "deleted selected bar");
        removed.as_interval().cloned()
    }

    pub(super) fn arm_drag(&mut self, id: EventId, label: &str) {
        if !self.callbacks.is_editable(label, &self.events) {
            debug!(?id, label, "bar selected on read-only lane");
            self.drag.disable();
            self.brush_enabled = true;
            return;
        }
        self.brush.cancel_gesture();
        self.drag.enable(id);
        self.brush_enabled = false;
        debug!(?id, "drag handles attached");
    }
}
