use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Bar, EventId, EventSet, Interval, LaneScale, ranges_overlap};

/// Padding appended to a brush-created interval, in seconds.
pub const DEFAULT_CREATE_PADDING_SECS: f64 = 600.0;

/// Time extent of a brush gesture, normalized so `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRange {
    pub start: f64,
    pub end: f64,
}

impl BrushRange {
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn point(time: f64) -> Self {
        Self {
            start: time,
            end: time,
        }
    }

    /// A zero-width range is a click.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Interval hit test, half-open on the interval side.
    ///
    /// Equivalent to "brush start inside the interval, brush end inside the
    /// interval, or interval inside the brush", evaluated with the same
    /// convention as same-lane overlap checks.
    #[must_use]
    pub fn intersects(self, interval: &Interval) -> bool {
        ranges_overlap(
            self.start,
            self.end,
            interval.started_at,
            interval.ended_at,
        )
    }

    /// Instance hit test, inclusive at both ends.
    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Highlight state recomputed on every brush tick and direct click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    intervals: SmallVec<[EventId; 4]>,
    instances: SmallVec<[EventId; 4]>,
}

impl Selection {
    #[must_use]
    pub fn single(id: EventId) -> Self {
        let mut selection = Self::default();
        selection.intervals.push(id);
        selection
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty() && self.instances.is_empty()
    }

    #[must_use]
    pub fn intervals(&self) -> &[EventId] {
        &self.intervals
    }

    #[must_use]
    pub fn instances(&self) -> &[EventId] {
        &self.instances
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.intervals.contains(&id) || self.instances.contains(&id)
    }

    pub fn clear(&mut self) {
        self.intervals.clear();
        self.instances.clear();
    }

    /// Drops an id removed from the event set.
    pub fn forget(&mut self, id: EventId) {
        self.intervals.retain(|selected| *selected != id);
        self.instances.retain(|selected| *selected != id);
    }

    /// Selected handles in event-set order, intervals and instances interleaved.
    pub fn ordered_ids<'a>(&'a self, events: &'a EventSet) -> impl Iterator<Item = EventId> + 'a {
        events
            .iter()
            .map(|(id, _)| id)
            .filter(|id| self.contains(*id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushState {
    #[default]
    Idle,
    Brushing,
}

/// Why an empty-range gesture did not produce a new interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateRejection {
    /// The pointer was above every lane.
    NoLane,
    NotEditable { label: String },
    /// The host's create hook returned `None`.
    HostDeclined,
    /// The host returned an interval with `started_at >= ended_at`.
    InvalidInterval,
    /// The interval would overlap another interval on its lane.
    Overlap,
}

/// Result of finishing a brush gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushEnd {
    /// No gesture was in progress.
    Idle,
    /// A non-empty range finished; the selection is final.
    Selected { range: BrushRange },
    /// A click landed on an interval; the click selection stands.
    Clicked { id: EventId },
    /// A click in empty lane space requests a new interval.
    Create(Bar),
    CreateRejected(CreateRejection),
}

/// Brush gesture state plus the selection it drives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionController {
    state: BrushState,
    range: Option<BrushRange>,
    pointer_y: f64,
    selection: Selection,
}

impl SelectionController {
    #[must_use]
    pub fn state(&self) -> BrushState {
        self.state
    }

    #[must_use]
    pub fn range(&self) -> Option<BrushRange> {
        self.range
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replaces the selection outside a brush gesture (direct click).
    pub fn select_only(&mut self, id: EventId) {
        self.selection = Selection::single(id);
    }

    pub fn forget(&mut self, id: EventId) {
        self.selection.forget(id);
    }

    /// Clears the brush extent and every highlight.
    pub fn clear(&mut self) {
        self.state = BrushState::Idle;
        self.range = None;
        self.selection.clear();
    }

    /// Abandons an in-flight gesture, keeping the current selection.
    pub fn cancel_gesture(&mut self) {
        if self.state == BrushState::Brushing {
            trace!("brush gesture cancelled");
        }
        self.state = BrushState::Idle;
        self.range = None;
    }

    /// Starts a gesture at `time`; equivalent to a zero-width tick.
    pub fn begin(
        &mut self,
        time: f64,
        pointer_y: f64,
        events: &EventSet,
        lanes: &LaneScale,
    ) -> &Selection {
        self.state = BrushState::Brushing;
        self.update(BrushRange::point(time), pointer_y, events, lanes)
    }

    /// Recomputes the selection for the current extent.
    pub fn update(
        &mut self,
        range: BrushRange,
        pointer_y: f64,
        events: &EventSet,
        lanes: &LaneScale,
    ) -> &Selection {
        self.state = BrushState::Brushing;
        self.range = Some(range);
        self.pointer_y = pointer_y;
        self.selection.clear();

        if range.is_empty() {
            if let Some(id) = clicked_interval(range.start, pointer_y, events, lanes) {
                self.selection.intervals.push(id);
            }
        } else {
            self.selection.intervals.extend(
                events
                    .intervals()
                    .filter(|(_, interval)| range.intersects(interval))
                    .map(|(id, _)| id),
            );
            self.selection.instances.extend(
                events
                    .instances()
                    .filter(|(_, instance)| range.contains(instance.at))
                    .map(|(id, _)| id),
            );
        }

        trace!(
            start = range.start,
            end = range.end,
            intervals = self.selection.intervals.len(),
            instances = self.selection.instances.len(),
            "brush tick"
        );
        &self.selection
    }

    /// Finishes the gesture.
    ///
    /// An empty range over empty lane space becomes a create request for the
    /// lane under the pointer when `is_editable` allows it.
    pub fn finish<F>(&mut self, lanes: &LaneScale, is_editable: F) -> BrushEnd
    where
        F: Fn(&str) -> bool,
    {
        if self.state != BrushState::Brushing {
            return BrushEnd::Idle;
        }
        self.state = BrushState::Idle;
        let Some(range) = self.range else {
            return BrushEnd::Idle;
        };

        if !range.is_empty() {
            debug!(start = range.start, end = range.end, "brush finished");
            return BrushEnd::Selected { range };
        }
        if let Some(&id) = self.selection.intervals.first() {
            return BrushEnd::Clicked { id };
        }

        let Some(label) = lanes.label_at(self.pointer_y) else {
            return BrushEnd::CreateRejected(CreateRejection::NoLane);
        };
        if !is_editable(label) {
            debug!(label, "brush create skipped: lane is read-only");
            return BrushEnd::CreateRejected(CreateRejection::NotEditable {
                label: label.to_owned(),
            });
        }

        debug!(label, at = range.start, "brush create requested");
        BrushEnd::Create(Bar::draft(Interval {
            label: label.to_owned(),
            started_at: range.start,
            ended_at: range.end + DEFAULT_CREATE_PADDING_SECS,
        }))
    }
}

fn clicked_interval(
    time: f64,
    pointer_y: f64,
    events: &EventSet,
    lanes: &LaneScale,
) -> Option<EventId> {
    let label = lanes.label_at(pointer_y)?;
    events
        .intervals()
        .find(|(_, interval)| interval.label == label && interval.contains(time))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Instance;

    fn fixture() -> (EventSet, LaneScale) {
        let events = EventSet::from_events([
            Interval::new("A", 100.0, 200.0).unwrap().into(),
            Interval::new("B", 150.0, 300.0).unwrap().into(),
            Instance::new("A", 250.0).into(),
        ])
        .unwrap();
        let lanes = LaneScale::new(["A", "B"], 0.0, 50.0).unwrap();
        (events, lanes)
    }

    #[test]
    fn range_is_normalized() {
        let range = BrushRange::new(30.0, 10.0);
        assert_eq!((range.start, range.end), (10.0, 30.0));
    }

    #[test]
    fn touching_brush_does_not_select() {
        let interval = Interval::new("A", 100.0, 200.0).unwrap();
        assert!(!BrushRange::new(200.0, 250.0).intersects(&interval));
        assert!(!BrushRange::new(50.0, 100.0).intersects(&interval));
        assert!(BrushRange::new(199.0, 250.0).intersects(&interval));
    }

    #[test]
    fn click_selects_only_the_lane_under_pointer() {
        let (events, lanes) = fixture();
        let mut brush = SelectionController::default();
        let selection = brush.begin(175.0, 30.0, &events, &lanes);
        assert_eq!(selection.intervals().len(), 1);
        let id = selection.intervals()[0];
        assert_eq!(events.get(id).unwrap().label(), "B");
        assert!(selection.instances().is_empty());
    }

    #[test]
    fn click_never_selects_instances() {
        let (events, lanes) = fixture();
        let mut brush = SelectionController::default();
        assert!(brush.begin(250.0, 10.0, &events, &lanes).is_empty());
    }

    #[test]
    fn cancelled_gesture_keeps_selection_and_finishes_idle() {
        let (events, lanes) = fixture();
        let mut brush = SelectionController::default();
        brush.begin(175.0, 30.0, &events, &lanes);
        brush.cancel_gesture();

        assert_eq!(brush.state(), BrushState::Idle);
        assert_eq!(brush.range(), None);
        assert_eq!(brush.selection().intervals().len(), 1);
        assert_eq!(brush.finish(&lanes, |_| true), BrushEnd::Idle);
    }

    #[test]
    fn finish_without_gesture_is_idle() {
        let (_, lanes) = fixture();
        let mut brush = SelectionController::default();
        assert_eq!(brush.finish(&lanes, |_| true), BrushEnd::Idle);
    }
}
