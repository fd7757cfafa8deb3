use chrono::{TimeZone, Utc};
use gantt_rs::core::{EventSet, Instance, Interval, TimelineEvent};

#[test]
fn structural_json_resolves_into_tagged_events() {
    let events = EventSet::from_json_str(
        r#"[
            {"label": "build", "startedAt": 100.0, "endedAt": 200.0},
            {"label": "deploy", "at": 250.0},
            {"label": "build", "startedAt": 300.0, "endedAt": 360.0}
        ]"#,
    )
    .expect("events json");

    assert_eq!(events.len(), 3);
    assert_eq!(events.intervals().count(), 2);
    assert_eq!(events.instances().count(), 1);

    let labels: Vec<&str> = events.labels().into_iter().collect();
    assert_eq!(labels, vec!["build", "deploy"]);

    let (_, instance) = events.instances().next().expect("instance");
    assert_eq!(instance, &Instance::new("deploy", 250.0));
}

#[test]
fn object_with_both_shapes_is_rejected() {
    let err = EventSet::from_json_str(
        r#"[{"label": "x", "startedAt": 1.0, "endedAt": 2.0, "at": 1.5}]"#,
    );
    assert!(err.is_err());
}

#[test]
fn object_with_neither_shape_is_rejected() {
    assert!(EventSet::from_json_str(r#"[{"label": "x"}]"#).is_err());
    assert!(EventSet::from_json_str(r#"[{"label": "x", "startedAt": 1.0}]"#).is_err());
}

#[test]
fn inverted_interval_in_json_is_rejected() {
    let err = EventSet::from_json_str(r#"[{"label": "x", "startedAt": 5.0, "endedAt": 5.0}]"#);
    assert!(err.is_err());
}

#[test]
fn json_output_keeps_structural_format() {
    let events = EventSet::from_events([
        Interval::new("build", 100.0, 200.0).expect("interval").into(),
        Instance::new("deploy", 250.0).into(),
    ])
    .expect("event set");

    let json = events.to_json_pretty().expect("serialize");
    assert!(json.contains("\"startedAt\""));
    assert!(json.contains("\"endedAt\""));
    assert!(json.contains("\"at\""));

    let parsed = EventSet::from_json_str(&json).expect("parse back");
    let original: Vec<&TimelineEvent> = events.iter().map(|(_, event)| event).collect();
    let reparsed: Vec<&TimelineEvent> = parsed.iter().map(|(_, event)| event).collect();
    assert_eq!(original, reparsed);
}

#[test]
fn time_bounds_cover_intervals_and_ignore_instances() {
    let events = EventSet::from_events([
        Interval::new("A", 100.0, 200.0).expect("interval").into(),
        Instance::new("B", 5_000.0).into(),
        Interval::new("B", 50.0, 120.0).expect("interval").into(),
    ])
    .expect("event set");

    let bounds = events.time_bounds().expect("bounds");
    assert_eq!(bounds.min_date, 50.0);
    assert_eq!(bounds.max_date, 200.0);
}

#[test]
fn empty_set_has_no_time_bounds() {
    assert!(EventSet::new().time_bounds().is_err());
}

#[test]
fn datetime_constructors_round_trip_through_unix_seconds() {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().expect("start");
    let end = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).single().expect("end");

    let interval = Interval::from_datetimes("ops", start, end).expect("interval");
    assert_eq!(interval.duration(), 5_400.0);
    assert_eq!(interval.started_at_datetime().expect("start"), start);
    assert_eq!(interval.ended_at_datetime().expect("end"), end);

    assert!(Interval::from_datetimes("ops", end, start).is_err());
}
