use tracing::{debug, warn};

use crate::core::{Bar, EventId, OverlapDetector};
use crate::interaction::{BrushEnd, BrushRange, BrushState, CreateRejection};
use crate::render::Renderer;

use super::GanttChart;

/// What a finished brush gesture did to the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushOutcome {
    /// No brush gesture was in progress.
    Idle,
    /// A range selection finished and `on_brush_end` fired.
    Selected(BrushRange),
    /// A click selected this bar.
    Clicked(EventId),
    /// A click in empty lane space created this bar, now selected.
    Created(EventId),
    CreateRejected(CreateRejection),
}

impl<R: Renderer> GanttChart<R> {
    /// Starts a brush gesture at `time` (unix seconds) and pointer height `pointer_y`.
    ///
    /// Returns `false` while drag handles are attached.
    pub fn brush_start(&mut self, time: f64, pointer_y: f64) -> bool {
        if !self.brush_enabled {
            debug!("brush start ignored: drag handles are attached");
            return false;
        }
        if !time.is_finite() || !pointer_y.is_finite() {
            return false;
        }
        let time = self.time_scale.domain().clamp(time);
        self.brush.begin(time, pointer_y, &self.events, &self.lane_scale);
        self.notify_brush_tick();
        true
    }

    /// Applies one brush tick with the widget's current extent.
    ///
    /// Extent endpoints may arrive in either order. Returns `false` without a
    /// gesture in flight or while drag handles are attached.
    pub fn brush_move(&mut self, extent_start: f64, extent_end: f64, pointer_y: f64) -> bool {
        if !self.brush_enabled || self.brush.state() != BrushState::Brushing {
            return false;
        }
        if !extent_start.is_finite() || !extent_end.is_finite() || !pointer_y.is_finite() {
            return false;
        }
        let domain = self.time_scale.domain();
        let range = BrushRange::new(domain.clamp(extent_start), domain.clamp(extent_end));
        self.brush.update(range, pointer_y, &self.events, &self.lane_scale);
        self.notify_brush_tick();
        true
    }

    /// Finishes the brush gesture.
    ///
    /// A non-empty range reports its selection. An empty range either confirms
    /// a click on a bar or, over empty editable lane space, creates a bar.
    /// Reports `Idle` while drag handles are attached.
    pub fn brush_end(&mut self) -> BrushOutcome {
        if !self.brush_enabled {
            return BrushOutcome::Idle;
        }
        let callbacks = &self.callbacks;
        let events = &self.events;
        let end = self
            .brush
            .finish(&self.lane_scale, |label| callbacks.is_editable(label, events));

        match end {
            BrushEnd::Idle => BrushOutcome::Idle,
            BrushEnd::Selected { range } => {
                let selected = self.selected_events();
                self.callbacks.on_brush_end(range, &selected);
                BrushOutcome::Selected(range)
            }
            BrushEnd::Clicked { id } => {
                let label = self.events.interval(id).map(|interval| interval.label.clone());
                if let Some(label) = label {
                    self.arm_drag(id, &label);
                }
                BrushOutcome::Clicked(id)
            }
            BrushEnd::Create(draft) => self.create_from_draft(draft),
            BrushEnd::CreateRejected(reason) => BrushOutcome::CreateRejected(reason),
        }
    }

    fn notify_brush_tick(&mut self) {
        let Some(range) = self.brush.range() else {
            return;
        };
        if range.is_empty() {
            let Some(&id) = self.brush.selection().intervals().first() else {
                return;
            };
            if let Some(interval) = self.events.interval(id) {
                self.callbacks.on_bar_clicked(id, interval);
            }
        } else {
            let selected = self.selected_events();
            self.callbacks.on_brush(range, &selected);
        }
    }

    fn create_from_draft(&mut self, draft: Bar) -> BrushOutcome {
        let Some(interval) = self.callbacks.on_bar_created(draft.into_interval()) else {
            debug!("brush create declined by host");
            return BrushOutcome::CreateRejected(CreateRejection::HostDeclined);
        };
        if interval.validate().is_err() {
            debug!(
                started_at = interval.started_at,
                ended_at = interval.ended_at,
                "brush create rejected: inverted interval"
            );
            return BrushOutcome::CreateRejected(CreateRejection::InvalidInterval);
        }
        if OverlapDetector::is_overlapping(&Bar::draft(interval.clone()), &self.events) {
            debug!(label = %interval.label, "brush create rejected: overlap");
            return BrushOutcome::CreateRejected(CreateRejection::Overlap);
        }

        let id = match self.events.insert(interval.into()) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "brush create rejected by event set");
                return BrushOutcome::CreateRejected(CreateRejection::InvalidInterval);
            }
        };
        if let Err(err) = self.refresh_lanes() {
            warn!(error = %err, "skipping lane refresh after brush create");
        }
        self.click_bar(id);
        if let Err(err) = self.render() {
            warn!(error = %err, "skipping render after brush create");
        }
        debug!(?id, "brush created bar");
        BrushOutcome::Created(id)
    }
}
