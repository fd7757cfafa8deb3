use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Bar, EventId, EventSet, Interval, OverlapDetector, TimeScale};

/// Part of a selected bar a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    Body,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    DraggingWhole,
    DraggingLeftHandle,
    DraggingRightHandle,
}

impl DragState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self != Self::Idle
    }

    #[must_use]
    pub fn handle(self) -> Option<DragHandle> {
        match self {
            Self::Idle => None,
            Self::DraggingWhole => Some(DragHandle::Body),
            Self::DraggingLeftHandle => Some(DragHandle::Left),
            Self::DraggingRightHandle => Some(DragHandle::Right),
        }
    }

    fn for_handle(handle: DragHandle) -> Self {
        match handle {
            DragHandle::Body => Self::DraggingWhole,
            DragHandle::Left => Self::DraggingLeftHandle,
            DragHandle::Right => Self::DraggingRightHandle,
        }
    }
}

/// Why a drag tick produced no mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragRejection {
    /// The edited record no longer exists in the event set.
    MissingRecord,
    /// The candidate would have `started_at >= ended_at`.
    Inverted,
    /// A whole-bar move would end after the domain's `max_date`.
    PastMaxDate,
    /// The candidate collides with another interval on the same lane.
    Overlap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// No drag gesture is in progress, or the pointer did not move.
    Ignored,
    Rejected(DragRejection),
    /// The live record now holds this interval.
    Committed(Interval),
}

/// Pointer position and time after applying a tick delta.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TimeValue {
    pixel: f64,
    time: f64,
}

fn shifted_time_value(scale: TimeScale, time: f64, delta_x: f64) -> TimeValue {
    TimeValue {
        pixel: scale.to_pixel(time) + delta_x,
        time: scale.shift_by_pixels(time, delta_x),
    }
}

/// Per-gesture state machine turning pointer deltas into committed edits.
///
/// `enable` attaches resize handles to one interval; `begin` starts a gesture
/// on that interval. Each tick is applied against the live record, so deltas
/// are relative to the previous tick and compound through the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    target: Option<EventId>,
    state: DragState,
    committed_ticks: u32,
}

impl DragController {
    #[must_use]
    pub fn target(&self) -> Option<EventId> {
        self.target
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Attaches handles to `id`, dropping any previous target.
    pub fn enable(&mut self, id: EventId) {
        self.target = Some(id);
        self.state = DragState::Idle;
        self.committed_ticks = 0;
    }

    /// Removes handles and returns to `Idle`.
    pub fn disable(&mut self) {
        self.target = None;
        self.state = DragState::Idle;
        self.committed_ticks = 0;
    }

    /// Starts a gesture on the enabled target. Returns `false` when nothing is enabled.
    pub fn begin(&mut self, id: EventId, handle: DragHandle) -> bool {
        if self.target != Some(id) {
            return false;
        }
        self.state = DragState::for_handle(handle);
        self.committed_ticks = 0;
        trace!(?id, ?handle, "drag gesture started");
        true
    }

    /// Applies one pointer-move tick.
    ///
    /// A rejected tick leaves the event set untouched.
    pub fn tick(&mut self, delta_x: f64, events: &mut EventSet, scale: TimeScale) -> DragOutcome {
        let Some(id) = self.target else {
            return DragOutcome::Ignored;
        };
        if !self.state.is_dragging() || delta_x == 0.0 {
            return DragOutcome::Ignored;
        }
        let Some(interval) = events.interval(id) else {
            return DragOutcome::Rejected(DragRejection::MissingRecord);
        };

        let bar = Bar::existing(id, interval.clone());
        let candidate = match self.state {
            DragState::DraggingLeftHandle => {
                let value = shifted_time_value(scale, bar.started_at(), delta_x);
                if value.time >= bar.ended_at() {
                    return self.reject(DragRejection::Inverted, value);
                }
                bar.expand_left(value.time)
            }
            DragState::DraggingRightHandle => {
                let value = shifted_time_value(scale, bar.ended_at(), delta_x);
                if value.time <= bar.started_at() {
                    return self.reject(DragRejection::Inverted, value);
                }
                bar.expand_right(value.time)
            }
            DragState::DraggingWhole => {
                let value = shifted_time_value(scale, bar.started_at(), delta_x);
                let moved = bar.move_to(value.time);
                if moved.ended_at() > scale.domain().max_date {
                    return self.reject(DragRejection::PastMaxDate, value);
                }
                moved
            }
            DragState::Idle => return DragOutcome::Ignored,
        };

        if OverlapDetector::is_overlapping(&candidate, events) {
            trace!(?id, "drag tick rejected: overlap");
            return DragOutcome::Rejected(DragRejection::Overlap);
        }

        let Some(live) = events.interval_mut(id) else {
            return DragOutcome::Rejected(DragRejection::MissingRecord);
        };
        match self.state {
            DragState::DraggingLeftHandle => live.started_at = candidate.started_at(),
            DragState::DraggingRightHandle => live.ended_at = candidate.ended_at(),
            _ => {
                live.started_at = candidate.started_at();
                live.ended_at = candidate.ended_at();
            }
        }
        self.committed_ticks = self.committed_ticks.saturating_add(1);
        trace!(
            ?id,
            started_at = live.started_at,
            ended_at = live.ended_at,
            "drag tick committed"
        );
        DragOutcome::Committed(live.clone())
    }

    /// Finishes the gesture, keeping handles attached.
    ///
    /// Returns the number of ticks committed during the gesture.
    pub fn end(&mut self) -> u32 {
        let committed = self.committed_ticks;
        self.state = DragState::Idle;
        self.committed_ticks = 0;
        committed
    }

    fn reject(&self, reason: DragRejection, value: TimeValue) -> DragOutcome {
        trace!(
            ?reason,
            pixel = value.pixel,
            time = value.time,
            "drag tick rejected"
        );
        DragOutcome::Rejected(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeDomain;

    fn unit_scale() -> TimeScale {
        TimeScale::new(TimeDomain::new(0.0, 1000.0), 0.0, 1000.0).expect("scale")
    }

    fn single_bar() -> (EventSet, EventId) {
        let mut events = EventSet::new();
        let id = events
            .insert(Interval::new("A", 100.0, 200.0).unwrap().into())
            .unwrap();
        (events, id)
    }

    #[test]
    fn tick_without_gesture_is_ignored() {
        let (mut events, id) = single_bar();
        let mut drag = DragController::default();
        assert_eq!(drag.tick(10.0, &mut events, unit_scale()), DragOutcome::Ignored);

        drag.enable(id);
        assert_eq!(drag.tick(10.0, &mut events, unit_scale()), DragOutcome::Ignored);
        assert_eq!(events.interval(id).unwrap().started_at, 100.0);
    }

    #[test]
    fn zero_delta_commits_nothing() {
        let (mut events, id) = single_bar();
        let mut drag = DragController::default();
        drag.enable(id);
        drag.begin(id, DragHandle::Right);
        assert_eq!(drag.tick(0.0, &mut events, unit_scale()), DragOutcome::Ignored);
        assert_eq!(drag.end(), 0);
    }

    #[test]
    fn begin_requires_enabled_target() {
        let (_, id) = single_bar();
        let mut drag = DragController::default();
        assert!(!drag.begin(id, DragHandle::Body));
        drag.enable(id);
        assert!(drag.begin(id, DragHandle::Left));
        assert_eq!(drag.state(), DragState::DraggingLeftHandle);
    }

    #[test]
    fn end_reports_committed_ticks_and_keeps_target() {
        let (mut events, id) = single_bar();
        let mut drag = DragController::default();
        drag.enable(id);
        drag.begin(id, DragHandle::Right);
        drag.tick(5.0, &mut events, unit_scale());
        drag.tick(-500.0, &mut events, unit_scale());
        assert_eq!(drag.end(), 1);
        assert_eq!(drag.target(), Some(id));
        assert_eq!(drag.state(), DragState::Idle);
    }
}
