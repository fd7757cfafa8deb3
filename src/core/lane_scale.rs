use indexmap::IndexSet;

use crate::error::{GanttError, GanttResult};

/// Ordinal mapping from lane labels to rounded vertical bands.
///
/// Bands have integral size and are centered inside `[range_start, range_end]`,
/// leftover pixels split evenly before the first and after the last band.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneScale {
    labels: IndexSet<String>,
    band_starts: Vec<f64>,
    bandwidth: f64,
}

impl LaneScale {
    pub fn new<I, S>(labels: I, range_start: f64, range_end: f64) -> GanttResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() || range_end < range_start {
            return Err(GanttError::InvalidData(
                "lane range must be finite and ascending".to_owned(),
            ));
        }

        let labels: IndexSet<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Ok(Self {
                labels,
                band_starts: Vec::new(),
                bandwidth: 0.0,
            });
        }

        let count = labels.len() as f64;
        let extent = range_end - range_start;
        let bandwidth = (extent / count).floor();
        let leftover = extent - bandwidth * count;
        let first = range_start + (leftover / 2.0).round();
        let band_starts = (0..labels.len())
            .map(|index| first + bandwidth * index as f64)
            .collect();

        Ok(Self {
            labels,
            band_starts,
            bandwidth,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Returns the `[y_start, y_end)` band of `label`.
    #[must_use]
    pub fn lane_of(&self, label: &str) -> Option<(f64, f64)> {
        let index = self.labels.get_index_of(label)?;
        let start = self.band_starts[index];
        Some((start, start + self.bandwidth))
    }

    /// Resolves the lane whose band starts at or above `y`.
    ///
    /// Positions above the first band resolve to `None`; positions below the
    /// last band resolve to the last lane.
    #[must_use]
    pub fn label_at(&self, y: f64) -> Option<&str> {
        let index = self.band_starts.partition_point(|&start| start <= y);
        if index == 0 {
            return None;
        }
        self.labels.get_index(index - 1).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::LaneScale;

    #[test]
    fn bands_are_rounded_and_centered() {
        let lanes = LaneScale::new(["a", "b"], 1.0, 50.0).expect("lanes");
        assert_eq!(lanes.bandwidth(), 24.0);
        assert_eq!(lanes.lane_of("a"), Some((2.0, 26.0)));
        assert_eq!(lanes.lane_of("b"), Some((26.0, 50.0)));
        assert_eq!(lanes.lane_of("c"), None);
    }

    #[test]
    fn label_at_resolves_band_boundaries_downwards() {
        let lanes = LaneScale::new(["a", "b"], 1.0, 50.0).expect("lanes");
        assert_eq!(lanes.label_at(1.0), None);
        assert_eq!(lanes.label_at(2.0), Some("a"));
        assert_eq!(lanes.label_at(25.9), Some("a"));
        assert_eq!(lanes.label_at(26.0), Some("b"));
        assert_eq!(lanes.label_at(500.0), Some("b"));
    }

    #[test]
    fn duplicate_labels_collapse_in_first_seen_order() {
        let lanes = LaneScale::new(["b", "a", "b"], 0.0, 100.0).expect("lanes");
        assert_eq!(lanes.labels().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
