use crate::core::{Interval, LinearScale, TimeDomain};
use crate::error::{GanttError, GanttResult};

/// Clamped mapping between unix seconds and horizontal pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: TimeDomain,
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale over `domain`, projected onto `[range_start, range_end]`.
    ///
    /// A zero-span domain is widened to one second around its center.
    pub fn new(domain: TimeDomain, range_start: f64, range_end: f64) -> GanttResult<Self> {
        let (min_date, max_date) = normalize_range(domain.min_date, domain.max_date, 1.0)?;
        let domain = TimeDomain::new(min_date, max_date);
        let linear =
            LinearScale::new((min_date, max_date), (range_start, range_end))?.with_clamp(true);
        Ok(Self { domain, linear })
    }

    #[must_use]
    pub fn domain(self) -> TimeDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn to_pixel(self, time: f64) -> f64 {
        self.linear.map(time)
    }

    /// Inverse mapping; never leaves `[min_date, max_date]`.
    #[must_use]
    pub fn to_time(self, pixel: f64) -> f64 {
        self.linear.invert(pixel)
    }

    /// Moves `time` by `delta_px` pixels worth of seconds.
    ///
    /// The start point is not projected first, so a time outside the domain
    /// keeps its offset. The result is clamped to the domain widened to
    /// include `time`: a pointer delta never pulls an edge onto a domain bound.
    #[must_use]
    pub fn shift_by_pixels(self, time: f64, delta_px: f64) -> f64 {
        let (range_start, range_end) = self.linear.range();
        let seconds_per_pixel = self.domain.span() / (range_end - range_start);
        let shifted = time + delta_px * seconds_per_pixel;
        shifted.clamp(
            self.domain.min_date.min(time),
            self.domain.max_date.max(time),
        )
    }

    #[must_use]
    pub fn bar_width(self, interval: &Interval) -> f64 {
        self.to_pixel(interval.ended_at) - self.to_pixel(interval.started_at)
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> GanttResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GanttError::InvalidData(
            "time domain must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
