use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::error::{GanttError, GanttResult};

/// Stable handle of one event inside an [`EventSet`](crate::core::EventSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(u32);

impl EventId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Editable time range on one lane, in unix seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    pub label: String,
    pub started_at: f64,
    pub ended_at: f64,
}

impl Interval {
    pub fn new(label: impl Into<String>, started_at: f64, ended_at: f64) -> GanttResult<Self> {
        let interval = Self {
            label: label.into(),
            started_at,
            ended_at,
        };
        interval.validate()?;
        Ok(interval)
    }

    pub fn from_datetimes(
        label: impl Into<String>,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> GanttResult<Self> {
        Self::new(
            label,
            datetime_to_unix_seconds(started_at),
            datetime_to_unix_seconds(ended_at),
        )
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.started_at.is_finite()
            || !self.ended_at.is_finite()
            || self.started_at >= self.ended_at
        {
            return Err(GanttError::InvalidInterval {
                label: self.label.clone(),
                started_at: self.started_at,
                ended_at: self.ended_at,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.ended_at - self.started_at
    }

    /// Half-open containment: `started_at <= time < ended_at`.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.started_at <= time && time < self.ended_at
    }

    pub fn started_at_datetime(&self) -> GanttResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.started_at)
    }

    pub fn ended_at_datetime(&self) -> GanttResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.ended_at)
    }
}

/// Read-only point event on one lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub label: String,
    pub at: f64,
}

impl Instance {
    #[must_use]
    pub fn new(label: impl Into<String>, at: f64) -> Self {
        Self {
            label: label.into(),
            at,
        }
    }
}

/// One entry of the timeline.
///
/// Serializes to the flat host format (`{label, startedAt, endedAt}` or
/// `{label, at}`); deserialization picks the variant from the fields present
/// and rejects objects carrying both shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimelineEvent {
    Interval(Interval),
    Instance(Instance),
}

impl TimelineEvent {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Interval(interval) => &interval.label,
            Self::Instance(instance) => &instance.label,
        }
    }

    #[must_use]
    pub fn as_interval(&self) -> Option<&Interval> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Instance(_) => None,
        }
    }

    #[must_use]
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            Self::Interval(_) => None,
        }
    }

    pub(crate) fn as_interval_mut(&mut self) -> Option<&mut Interval> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Instance(_) => None,
        }
    }
}

impl From<Interval> for TimelineEvent {
    fn from(interval: Interval) -> Self {
        Self::Interval(interval)
    }
}

impl From<Instance> for TimelineEvent {
    fn from(instance: Instance) -> Self {
        Self::Instance(instance)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimelineEvent {
    label: String,
    started_at: Option<f64>,
    ended_at: Option<f64>,
    at: Option<f64>,
}

impl TryFrom<RawTimelineEvent> for TimelineEvent {
    type Error = String;

    fn try_from(raw: RawTimelineEvent) -> Result<Self, Self::Error> {
        match (raw.started_at, raw.ended_at, raw.at) {
            (Some(started_at), Some(ended_at), None) => Ok(Self::Interval(Interval {
                label: raw.label,
                started_at,
                ended_at,
            })),
            (None, None, Some(at)) => Ok(Self::Instance(Instance {
                label: raw.label,
                at,
            })),
            _ => Err(format!(
                "event on lane `{}` must carry either `startedAt`+`endedAt` or `at`",
                raw.label
            )),
        }
    }
}

impl<'de> Deserialize<'de> for TimelineEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTimelineEvent::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
