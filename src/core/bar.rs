use crate::core::{EventId, Interval};

/// Candidate interval produced by an edit, tagged with the record it edits.
///
/// Transforms never touch the source record; a candidate only becomes real
/// once a controller commits it into the [`EventSet`](crate::core::EventSet).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    id: Option<EventId>,
    interval: Interval,
}

impl Bar {
    /// Candidate for an interval already stored under `id`.
    #[must_use]
    pub fn existing(id: EventId, interval: Interval) -> Self {
        Self {
            id: Some(id),
            interval,
        }
    }

    /// Candidate that has no stored record yet.
    #[must_use]
    pub fn draft(interval: Interval) -> Self {
        Self { id: None, interval }
    }

    #[must_use]
    pub fn id(&self) -> Option<EventId> {
        self.id
    }

    #[must_use]
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    #[must_use]
    pub fn into_interval(self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.interval.label
    }

    #[must_use]
    pub fn started_at(&self) -> f64 {
        self.interval.started_at
    }

    #[must_use]
    pub fn ended_at(&self) -> f64 {
        self.interval.ended_at
    }

    /// Whether `started_at < ended_at` still holds.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.interval.started_at < self.interval.ended_at
    }

    #[must_use]
    pub fn expand_left(&self, new_start: f64) -> Self {
        self.with_bounds(new_start, self.interval.ended_at)
    }

    #[must_use]
    pub fn expand_right(&self, new_end: f64) -> Self {
        self.with_bounds(self.interval.started_at, new_end)
    }

    /// Shifts the interval so it starts at `new_start`, keeping its duration.
    #[must_use]
    pub fn move_to(&self, new_start: f64) -> Self {
        self.with_bounds(new_start, new_start + self.interval.duration())
    }

    fn with_bounds(&self, started_at: f64, ended_at: f64) -> Self {
        Self {
            id: self.id,
            interval: Interval {
                label: self.interval.label.clone(),
                started_at,
                ended_at,
            },
        }
    }
}
