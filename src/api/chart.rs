use tracing::debug;

use crate::core::{
    EventId, EventSet, Interval, LaneScale, TimeDomain, TimeScale, TimelineEvent,
};
use crate::error::{GanttError, GanttResult};
use crate::interaction::{
    BrushRange, BrushState, DragController, DragState, InteractionMode, Selection,
    SelectionController,
};
use crate::render::Renderer;

use super::{GanttCallbacks, GanttChartConfig, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `GanttChart` owns the event set, the time and lane scales, and both
/// gesture controllers. Pointer input from the render layer and the brush
/// widget is routed through its methods; host hooks fire synchronously.
pub struct GanttChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: GanttChartConfig,
    pub(super) style: RenderStyle,
    pub(super) events: EventSet,
    pub(super) time_scale: TimeScale,
    pub(super) lane_scale: LaneScale,
    pub(super) drag: DragController,
    pub(super) brush: SelectionController,
    pub(super) brush_enabled: bool,
    pub(super) callbacks: Box<dyn GanttCallbacks>,
}

impl<R: Renderer> GanttChart<R> {
    /// Creates a chart over `events`.
    ///
    /// Fails when the config is invalid, an interval has `started_at >= ended_at`,
    /// or no time domain can be pinned or derived.
    pub fn new<I>(
        renderer: R,
        config: GanttChartConfig,
        events: I,
        callbacks: Box<dyn GanttCallbacks>,
    ) -> GanttResult<Self>
    where
        I: IntoIterator<Item = TimelineEvent>,
    {
        config.validate()?;
        let events = EventSet::from_events(events)?;
        let domain = resolve_domain(&config, &events)?;
        let time_scale = build_time_scale(&config, domain)?;
        let lane_scale = build_lane_scale(&config, &events)?;
        debug!(
            events = events.len(),
            lanes = lane_scale.len(),
            min_date = time_scale.domain().min_date,
            max_date = time_scale.domain().max_date,
            "gantt chart created"
        );

        Ok(Self {
            renderer,
            config,
            style: RenderStyle::default(),
            events,
            time_scale,
            lane_scale,
            drag: DragController::default(),
            brush: SelectionController::default(),
            brush_enabled: true,
            callbacks,
        })
    }

    /// Replaces every event, dropping selection and handles.
    ///
    /// The domain is re-derived unless the config pins it.
    pub fn set_events<I>(&mut self, events: I) -> GanttResult<()>
    where
        I: IntoIterator<Item = TimelineEvent>,
    {
        let events = EventSet::from_events(events)?;
        let domain = resolve_domain(&self.config, &events)?;
        let time_scale = build_time_scale(&self.config, domain)?;
        let lane_scale = build_lane_scale(&self.config, &events)?;

        self.events = events;
        self.time_scale = time_scale;
        self.lane_scale = lane_scale;
        self.clear_selection();
        debug!(events = self.events.len(), "replaced events");
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &GanttChartConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> GanttResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn events(&self) -> &EventSet {
        &self.events
    }

    #[must_use]
    pub fn interval(&self, id: EventId) -> Option<&Interval> {
        self.events.interval(id)
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn lane_scale(&self) -> &LaneScale {
        &self.lane_scale
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.lane_scale.labels()
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.config.chart_height(self.lane_scale.len())
    }

    /// Height of the drawn surface: every lane plus the time axis band.
    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.config.canvas_height(self.lane_scale.len())
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        self.brush.selection()
    }

    /// Selected events in event-set order.
    #[must_use]
    pub fn selected_events(&self) -> Vec<TimelineEvent> {
        self.brush
            .selection()
            .ordered_ids(&self.events)
            .filter_map(|id| self.events.get(id).cloned())
            .collect()
    }

    /// The bar carrying drag handles, if any.
    #[must_use]
    pub fn selected_bar(&self) -> Option<EventId> {
        self.drag.target()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub fn brush_range(&self) -> Option<BrushRange> {
        self.brush.range()
    }

    #[must_use]
    pub fn is_brush_enabled(&self) -> bool {
        self.brush_enabled
    }

    #[must_use]
    pub fn is_editable(&self, label: &str) -> bool {
        self.callbacks.is_editable(label, &self.events)
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        if let Some(handle) = self.drag.state().handle() {
            return InteractionMode::Dragging(handle);
        }
        if self.brush.state() == BrushState::Brushing {
            return InteractionMode::Brushing;
        }
        if self.drag.is_enabled() {
            return InteractionMode::BarSelected;
        }
        InteractionMode::Idle
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> GanttResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Rebuilds lanes after events were added or removed.
    ///
    /// The time domain stays fixed for the chart's lifetime.
    pub(super) fn refresh_lanes(&mut self) -> GanttResult<()> {
        self.lane_scale = build_lane_scale(&self.config, &self.events)?;
        Ok(())
    }
}

/// Pinned edges win over derived ones. Only a fully derived domain may have
/// zero span; the time scale widens it.
fn resolve_domain(config: &GanttChartConfig, events: &EventSet) -> GanttResult<TimeDomain> {
    let domain = match (config.min_date, config.max_date) {
        (None, None) => return events.time_bounds(),
        (Some(min_date), Some(max_date)) => TimeDomain::new(min_date, max_date),
        (min_date, max_date) => {
            let derived = events.time_bounds()?;
            TimeDomain::new(
                min_date.unwrap_or(derived.min_date),
                max_date.unwrap_or(derived.max_date),
            )
        }
    };
    if domain.min_date >= domain.max_date {
        return Err(GanttError::InvalidData(format!(
            "time domain [{}, {}] must satisfy min_date < max_date",
            domain.min_date, domain.max_date
        )));
    }
    Ok(domain)
}

fn build_time_scale(config: &GanttChartConfig, domain: TimeDomain) -> GanttResult<TimeScale> {
    let (range_start, range_end) = config.time_range();
    TimeScale::new(domain, range_start, range_end)
}

fn build_lane_scale(config: &GanttChartConfig, events: &EventSet) -> GanttResult<LaneScale> {
    let labels = events.labels();
    let chart_height = config.chart_height(labels.len());
    LaneScale::new(labels, 1.0, chart_height.max(1.0))
}
