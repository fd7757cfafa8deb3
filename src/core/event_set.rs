use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{EventId, Instance, Interval, TimeDomain, TimelineEvent};
use crate::error::{GanttError, GanttResult};

/// Insertion-ordered store of timeline events keyed by stable handles.
///
/// Handles are never reused, so a handle held by a controller either resolves
/// to the same record or to nothing after deletion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSet {
    events: IndexMap<EventId, TimelineEvent>,
    next_id: u32,
}

impl EventSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from host data; every interval must satisfy `started_at < ended_at`.
    pub fn from_events<I>(events: I) -> GanttResult<Self>
    where
        I: IntoIterator<Item = TimelineEvent>,
    {
        let mut set = Self::new();
        for event in events {
            set.insert(event)?;
        }
        debug!(count = set.len(), "built event set");
        Ok(set)
    }

    /// Parses a JSON array in the flat host format.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        let events: Vec<TimelineEvent> = serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidData(format!("failed to parse events json: {e}")))?;
        Self::from_events(events)
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        let events: Vec<&TimelineEvent> = self.events.values().collect();
        serde_json::to_string_pretty(&events)
            .map_err(|e| GanttError::InvalidData(format!("failed to serialize events: {e}")))
    }

    pub fn insert(&mut self, event: TimelineEvent) -> GanttResult<EventId> {
        match &event {
            TimelineEvent::Interval(interval) => interval.validate()?,
            TimelineEvent::Instance(instance) => {
                if !instance.at.is_finite() {
                    return Err(GanttError::InvalidData(format!(
                        "instance on lane `{}` must have a finite time",
                        instance.label
                    )));
                }
            }
        }

        let id = EventId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.events.insert(id, event);
        Ok(id)
    }

    /// Removes an event and keeps the relative order of the rest.
    pub fn remove(&mut self, id: EventId) -> Option<TimelineEvent> {
        self.events.shift_remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.events.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: EventId) -> Option<&TimelineEvent> {
        self.events.get(&id)
    }

    #[must_use]
    pub fn interval(&self, id: EventId) -> Option<&Interval> {
        self.get(id).and_then(TimelineEvent::as_interval)
    }

    pub(crate) fn interval_mut(&mut self, id: EventId) -> Option<&mut Interval> {
        self.events
            .get_mut(&id)
            .and_then(TimelineEvent::as_interval_mut)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EventId, &TimelineEvent)> {
        self.events.iter().map(|(id, event)| (*id, event))
    }

    pub fn intervals(&self) -> impl Iterator<Item = (EventId, &Interval)> {
        self.iter()
            .filter_map(|(id, event)| event.as_interval().map(|interval| (id, interval)))
    }

    pub fn instances(&self) -> impl Iterator<Item = (EventId, &Instance)> {
        self.iter()
            .filter_map(|(id, event)| event.as_instance().map(|instance| (id, instance)))
    }

    /// Distinct lane labels in first-seen order.
    #[must_use]
    pub fn labels(&self) -> IndexSet<&str> {
        self.events.values().map(TimelineEvent::label).collect()
    }

    /// Derives `[min started_at, max ended_at]` over intervals.
    ///
    /// Falls back to instance timestamps when the set holds no interval.
    pub fn time_bounds(&self) -> GanttResult<TimeDomain> {
        let starts = self.intervals().map(|(_, interval)| interval.started_at);
        let ends = self.intervals().map(|(_, interval)| interval.ended_at);
        if let (Some(min), Some(max)) = (
            starts.map(OrderedFloat).min(),
            ends.map(OrderedFloat).max(),
        ) {
            return Ok(TimeDomain::new(min.0, max.0));
        }

        let times = || self.instances().map(|(_, instance)| OrderedFloat(instance.at));
        match (times().min(), times().max()) {
            (Some(min), Some(max)) => Ok(TimeDomain::new(min.0, max.0)),
            _ => Err(GanttError::InvalidData(
                "time domain cannot be derived from an empty event set".to_owned(),
            )),
        }
    }
}
