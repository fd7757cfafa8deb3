use crate::core::{EventId, Interval, Viewport};
use crate::interaction::DragHandle;
use crate::render::{
    BarShape, HandleShape, InstanceShape, LinePrimitive, RectPrimitive, RenderFrame, Renderer,
};

use super::GanttChart;

impl<R: Renderer> GanttChart<R> {
    /// Projects the current events, selection, handles and brush into pixel space.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let lane_count = self.lane_scale.len();
        let canvas_height = self.config.canvas_height(lane_count).ceil().max(1.0);
        let mut frame = RenderFrame::new(Viewport::new(self.config.width, canvas_height as u32));
        let plot_width = self.config.plot_width();
        let half_bar = self.config.bar_height / 2.0;

        let axis_y = self.config.time_axis_y(lane_count);
        frame.time_axis = Some(LinePrimitive::horizontal(
            axis_y,
            0.0,
            plot_width,
            self.style.lane_rule_stroke_width,
            self.style.lane_rule_color,
        ));

        for label in self.lane_scale.labels() {
            if let Some((lane_top, _)) = self.lane_scale.lane_of(label) {
                let y = lane_top + half_bar;
                frame.lane_rules.push(LinePrimitive::horizontal(
                    y,
                    0.0,
                    plot_width,
                    self.style.lane_rule_stroke_width,
                    self.style.lane_rule_color,
                ));
            }
        }

        let selection = self.brush.selection();
        for (id, interval) in self.events.intervals() {
            let Some(rect) = self.bar_rect(interval) else {
                continue;
            };
            let selected = selection.contains(id);
            frame.bars.push(BarShape {
                id,
                rect: RectPrimitive {
                    fill: if selected {
                        self.style.selected_bar_color
                    } else {
                        self.style.bar_color
                    },
                    ..rect
                },
                selected,
                editable: self.callbacks.is_editable(&interval.label, &self.events),
            });
        }

        for (id, instance) in self.events.instances() {
            let Some((lane_top, lane_bottom)) = self.lane_scale.lane_of(&instance.label) else {
                continue;
            };
            let x = self.time_scale.to_pixel(instance.at);
            frame.instances.push(InstanceShape {
                id,
                line: LinePrimitive::vertical(
                    x,
                    lane_top + self.config.bar_padding,
                    lane_bottom - self.config.bar_padding,
                    self.style.instance_stroke_width,
                    self.style.instance_color,
                ),
                selected: selection.contains(id),
            });
        }

        if let Some(id) = self.drag.target() {
            frame.handles = self.handle_shapes(id);
        }

        if let Some(range) = self.brush.range().filter(|range| !range.is_empty()) {
            let x1 = self.time_scale.to_pixel(range.start);
            let x2 = self.time_scale.to_pixel(range.end);
            frame.brush = Some(RectPrimitive::new(
                x1,
                0.0,
                x2 - x1,
                self.chart_height(),
                self.style.brush_color,
            ));
        }

        frame
    }

    fn bar_rect(&self, interval: &Interval) -> Option<RectPrimitive> {
        let (lane_top, _) = self.lane_scale.lane_of(&interval.label)?;
        Some(RectPrimitive::new(
            self.time_scale.to_pixel(interval.started_at),
            lane_top + self.config.bar_padding,
            self.time_scale.bar_width(interval).max(0.0),
            self.config.bar_body_height(),
            self.style.bar_color,
        ))
    }

    fn handle_shapes(&self, id: EventId) -> Vec<HandleShape> {
        let Some(interval) = self.events.interval(id) else {
            return Vec::new();
        };
        let Some(bar) = self.bar_rect(interval) else {
            return Vec::new();
        };
        let width = self.config.handle_width;
        let body = HandleShape {
            id,
            handle: DragHandle::Body,
            rect: RectPrimitive {
                fill: self.style.selected_bar_color,
                ..bar
            },
        };
        let edge = |handle: DragHandle, x: f64| HandleShape {
            id,
            handle,
            rect: RectPrimitive::new(
                x - width / 2.0,
                bar.y,
                width,
                bar.height,
                self.style.handle_color,
            ),
        };
        vec![
            body,
            edge(DragHandle::Left, bar.x),
            edge(DragHandle::Right, bar.x + bar.width),
        ]
    }
}
