use crate::error::{GanttError, GanttResult};

/// Fill or stroke paint: an 8-bit RGB triple with a separate opacity.
///
/// Overlays (resize handles, the brush) are drawn translucent through
/// `opacity`; bars and rules are opaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub const fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn validate(self) -> GanttResult<()> {
        if (0.0..=1.0).contains(&self.opacity) {
            Ok(())
        } else {
            Err(GanttError::InvalidData(format!(
                "opacity {} must be in [0, 1]",
                self.opacity
            )))
        }
    }
}

fn ensure_finite(what: &str, values: &[f64]) -> GanttResult<()> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(GanttError::InvalidData(format!("{what} must be finite")))
    }
}

/// Axis-aligned stroke: a lane rule, the time axis, or an instance marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn horizontal(y: f64, x1: f64, x2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1: y,
            x2,
            y2: y,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub const fn vertical(x: f64, y1: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1: x,
            y1,
            x2: x,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> GanttResult<()> {
        ensure_finite("line endpoints", &[self.x1, self.y1, self.x2, self.y2])?;
        if !(self.stroke_width > 0.0 && self.stroke_width.is_finite()) {
            return Err(GanttError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle: a bar body, a handle, or the brush overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill,
        }
    }

    pub fn validate(self) -> GanttResult<()> {
        ensure_finite("rect geometry", &[self.x, self.y, self.width, self.height])?;
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GanttError::InvalidData("rect size must be >= 0".to_owned()));
        }
        self.fill.validate()
    }
}
