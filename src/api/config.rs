use serde::{Deserialize, Serialize};

use crate::core::Margins;
use crate::error::{GanttError, GanttResult};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup.
/// Every field but `width` falls back to its default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttChartConfig {
    /// Client width of the host element in pixels.
    pub width: u32,
    /// Left edge of the time domain in unix seconds; derived from data when `None`.
    #[serde(default)]
    pub min_date: Option<f64>,
    /// Right edge of the time domain in unix seconds; derived from data when `None`.
    #[serde(default)]
    pub max_date: Option<f64>,
    #[serde(default = "default_left_pad")]
    pub left_pad: f64,
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,
    #[serde(default = "default_bar_padding")]
    pub bar_padding: f64,
    /// Height of the time axis band drawn below the lanes.
    #[serde(default = "default_x_axis_height")]
    pub x_axis_height: f64,
    #[serde(default)]
    pub margin: Margins,
    #[serde(default = "default_handle_width")]
    pub handle_width: f64,
}

impl GanttChartConfig {
    #[must_use]
    pub fn new(width: u32) -> Self {
        Self {
            width,
            min_date: None,
            max_date: None,
            left_pad: default_left_pad(),
            bar_height: default_bar_height(),
            bar_padding: default_bar_padding(),
            x_axis_height: default_x_axis_height(),
            margin: Margins::default(),
            handle_width: default_handle_width(),
        }
    }

    /// Pins the time domain instead of deriving it from the data.
    #[must_use]
    pub fn with_time_domain(mut self, min_date: f64, max_date: f64) -> Self {
        self.min_date = Some(min_date);
        self.max_date = Some(max_date);
        self
    }

    #[must_use]
    pub fn with_left_pad(mut self, left_pad: f64) -> Self {
        self.left_pad = left_pad;
        self
    }

    #[must_use]
    pub fn with_bar_height(mut self, bar_height: f64, bar_padding: f64) -> Self {
        self.bar_height = bar_height;
        self.bar_padding = bar_padding;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margins) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_handle_width(mut self, handle_width: f64) -> Self {
        self.handle_width = handle_width;
        self
    }

    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidData(format!("failed to parse chart config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GanttError::InvalidData(format!("failed to serialize chart config: {e}")))
    }

    /// Plot width: host width minus horizontal margins.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width) - self.margin.left - self.margin.right
    }

    /// Horizontal pixel range of the time axis.
    #[must_use]
    pub fn time_range(&self) -> (f64, f64) {
        (self.left_pad, self.plot_width())
    }

    #[must_use]
    pub fn chart_height(&self, lane_count: usize) -> f64 {
        lane_count as f64 * self.bar_height
    }

    /// Lanes plus the time axis band below them.
    #[must_use]
    pub fn canvas_height(&self, lane_count: usize) -> f64 {
        self.chart_height(lane_count) + self.x_axis_height
    }

    /// Vertical position of the time axis baseline.
    #[must_use]
    pub fn time_axis_y(&self, lane_count: usize) -> f64 {
        self.chart_height(lane_count) + TIME_AXIS_GAP.min(self.x_axis_height)
    }

    #[must_use]
    pub fn bar_body_height(&self) -> f64 {
        self.bar_height - self.bar_padding * 2.0
    }

    pub fn validate(&self) -> GanttResult<()> {
        for (name, value) in [
            ("left_pad", self.left_pad),
            ("x_axis_height", self.x_axis_height),
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("margin.left", self.margin.left),
            ("bar_padding", self.bar_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GanttError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.bar_height.is_finite() || self.bar_height < 2.0 {
            return Err(GanttError::InvalidData(
                "bar height must be finite and >= 2".to_owned(),
            ));
        }
        if self.bar_body_height() <= 0.0 {
            return Err(GanttError::InvalidData(
                "bar padding must leave a positive bar body".to_owned(),
            ));
        }
        if !self.handle_width.is_finite() || self.handle_width <= 0.0 {
            return Err(GanttError::InvalidData(
                "handle width must be finite and > 0".to_owned(),
            ));
        }
        if self.plot_width() <= self.left_pad {
            return Err(GanttError::InvalidData(format!(
                "plot width {} must exceed left pad {}",
                self.plot_width(),
                self.left_pad
            )));
        }
        if let (Some(min_date), Some(max_date)) = (self.min_date, self.max_date) {
            if !min_date.is_finite() || !max_date.is_finite() || min_date >= max_date {
                return Err(GanttError::InvalidData(
                    "min_date must be < max_date and both finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Gap between the last lane and the time axis baseline.
const TIME_AXIS_GAP: f64 = 10.0;

fn default_left_pad() -> f64 {
    80.0
}

fn default_bar_height() -> f64 {
    25.0
}

fn default_bar_padding() -> f64 {
    4.0
}

fn default_x_axis_height() -> f64 {
    60.0
}

fn default_handle_width() -> f64 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = GanttChartConfig::from_json_str(
            r#"{"width":1000,"min_date":0.0}"#,
        )
        .expect("config");
        assert_eq!(config.left_pad, 80.0);
        assert_eq!(config.margin, Margins::default());
        assert_eq!(config.min_date, Some(0.0));
        assert_eq!(config.max_date, None);
        assert_eq!(config.time_range(), (80.0, 920.0));
    }

    #[test]
    fn narrow_width_is_rejected() {
        assert!(GanttChartConfig::new(150).validate().is_err());
        assert!(GanttChartConfig::new(0).validate().is_err());
    }

    #[test]
    fn axis_band_sits_below_lanes() {
        let config = GanttChartConfig::new(1000);
        assert_eq!(config.canvas_height(4), 160.0);
        assert_eq!(config.time_axis_y(4), 110.0);

        let tight = GanttChartConfig {
            x_axis_height: 4.0,
            ..config
        };
        assert_eq!(tight.time_axis_y(2), 54.0);
    }
}
