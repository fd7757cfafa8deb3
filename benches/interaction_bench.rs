use criterion::{Criterion, criterion_group, criterion_main};
use gantt_rs::api::{GanttChart, GanttChartConfig, NoopCallbacks};
use gantt_rs::core::{Bar, EventSet, Interval, LaneScale, OverlapDetector};
use gantt_rs::interaction::{BrushRange, DragHandle, SelectionController};
use gantt_rs::render::NullRenderer;
use std::hint::black_box;

const LANES: usize = 20;

fn generated_intervals(count: usize) -> Vec<Interval> {
    (0..count)
        .map(|i| {
            let lane = i % LANES;
            let slot = (i / LANES) as f64;
            Interval::new(format!("lane-{lane}"), slot * 10.0, slot * 10.0 + 8.0)
                .expect("valid generated interval")
        })
        .collect()
}

fn bench_overlap_check_10k(c: &mut Criterion) {
    let events = EventSet::from_events(generated_intervals(10_000).into_iter().map(Into::into))
        .expect("event set");
    let draft = Bar::draft(Interval::new("lane-7", 2_498.0, 2_509.0).expect("draft"));

    c.bench_function("overlap_check_10k", |b| {
        b.iter(|| OverlapDetector::is_overlapping(black_box(&draft), black_box(&events)))
    });
}

fn bench_brush_update_10k(c: &mut Criterion) {
    let events = EventSet::from_events(generated_intervals(10_000).into_iter().map(Into::into))
        .expect("event set");
    let lanes = LaneScale::new(events.labels(), 1.0, (LANES * 25) as f64).expect("lanes");
    let mut brush = SelectionController::default();

    c.bench_function("brush_update_10k", |b| {
        b.iter(|| {
            let selection = brush.update(
                black_box(BrushRange::new(1_000.0, 2_000.0)),
                black_box(30.0),
                &events,
                &lanes,
            );
            black_box(selection.intervals().len());
        })
    });
}

fn bench_drag_ticks_2k(c: &mut Criterion) {
    let config = GanttChartConfig::new(1600).with_time_domain(0.0, 1_000.0);
    let mut chart = GanttChart::new(
        NullRenderer::default(),
        config,
        generated_intervals(2_000).into_iter().map(Into::into),
        Box::new(NoopCallbacks),
    )
    .expect("chart init");
    let (id, _) = chart.events().intervals().next().expect("interval");
    chart.click_bar(id);

    c.bench_function("drag_right_handle_ticks_2k", |b| {
        b.iter(|| {
            chart.drag_start(id, DragHandle::Right);
            let _ = chart.drag_move(black_box(0.5));
            let _ = chart.drag_move(black_box(-0.5));
            chart.drag_end();
        })
    });
}

criterion_group!(
    benches,
    bench_overlap_check_10k,
    bench_brush_update_10k,
    bench_drag_ticks_2k
);
criterion_main!(benches);
