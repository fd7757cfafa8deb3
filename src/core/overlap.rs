use crate::core::{Bar, EventSet};

/// Half-open overlap test between `[a_start, a_end)` and `[b_start, b_end)`.
///
/// Touching ranges (`a_end == b_start`) do not overlap.
#[must_use]
pub fn ranges_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start < b_end && a_end > b_start
}

/// Same-lane collision checks for edit candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapDetector;

impl OverlapDetector {
    /// Returns `true` when `candidate` collides with another interval on its lane.
    ///
    /// The record the candidate was derived from is excluded by handle, so two
    /// distinct intervals with identical bounds still collide.
    #[must_use]
    pub fn is_overlapping(candidate: &Bar, events: &EventSet) -> bool {
        events
            .intervals()
            .filter(|(id, interval)| {
                Some(*id) != candidate.id() && interval.label == candidate.label()
            })
            .any(|(_, interval)| {
                ranges_overlap(
                    candidate.started_at(),
                    candidate.ended_at(),
                    interval.started_at,
                    interval.ended_at,
                )
            })
    }
}
