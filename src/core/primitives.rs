use chrono::{DateTime, Utc};

use crate::error::{GanttError, GanttResult};

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

pub fn unix_seconds_to_datetime(seconds: f64) -> GanttResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(GanttError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        GanttError::InvalidData(format!("timestamp {seconds} is out of chrono range"))
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn unix_seconds_survive_datetime_conversion() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let seconds = datetime_to_unix_seconds(time);
        assert_eq!(seconds, 1_709_296_200.0);
        assert_eq!(unix_seconds_to_datetime(seconds).unwrap(), time);
    }

    #[test]
    fn non_finite_seconds_are_rejected() {
        assert!(unix_seconds_to_datetime(f64::NAN).is_err());
    }
}
