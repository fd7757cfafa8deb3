use serde::{Deserialize, Serialize};

/// Host element size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 200.0,
            right: 40.0,
            bottom: 200.0,
            left: 40.0,
        }
    }
}

/// Time bounds of the chart in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub min_date: f64,
    pub max_date: f64,
}

impl TimeDomain {
    #[must_use]
    pub fn new(min_date: f64, max_date: f64) -> Self {
        Self { min_date, max_date }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max_date - self.min_date
    }

    #[must_use]
    pub fn clamp(self, time: f64) -> f64 {
        time.clamp(self.min_date, self.max_date)
    }
}
