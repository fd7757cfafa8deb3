use crate::error::{GanttError, GanttResult};
use crate::render::Color;

/// Colors and stroke widths used when building a [`RenderFrame`](crate::render::RenderFrame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub bar_color: Color,
    pub selected_bar_color: Color,
    pub handle_color: Color,
    pub brush_color: Color,
    pub instance_color: Color,
    pub lane_rule_color: Color,
    pub instance_stroke_width: f64,
    pub lane_rule_stroke_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bar_color: Color::rgb(70, 130, 180),
            selected_bar_color: Color::rgb(242, 153, 51),
            handle_color: Color::BLUE.with_opacity(0.3),
            brush_color: Color::rgb(128, 128, 128).with_opacity(0.3),
            instance_color: Color::rgb(51, 51, 51),
            lane_rule_color: Color::BLACK,
            instance_stroke_width: 2.0,
            lane_rule_stroke_width: 1.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> GanttResult<()> {
        for color in [
            self.bar_color,
            self.selected_bar_color,
            self.handle_color,
            self.brush_color,
            self.instance_color,
            self.lane_rule_color,
        ] {
            color.validate()?;
        }
        for (name, width) in [
            ("instance", self.instance_stroke_width),
            ("lane rule", self.lane_rule_stroke_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(GanttError::InvalidData(format!(
                    "{name} stroke width must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
