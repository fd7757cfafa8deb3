pub mod bar;
pub mod event;
pub mod event_set;
pub mod lane_scale;
pub mod overlap;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use bar::Bar;
pub use event::{EventId, Instance, Interval, TimelineEvent};
pub use event_set::EventSet;
pub use lane_scale::LaneScale;
pub use overlap::{OverlapDetector, ranges_overlap};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{Margins, TimeDomain, Viewport};
