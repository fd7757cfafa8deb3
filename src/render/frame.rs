use crate::core::{EventId, Viewport};
use crate::error::{GanttError, GanttResult};
use crate::interaction::DragHandle;
use crate::render::{LinePrimitive, RectPrimitive};

/// Rendered interval, addressed by its event handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarShape {
    pub id: EventId,
    pub rect: RectPrimitive,
    pub selected: bool,
    pub editable: bool,
}

/// Rendered point event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceShape {
    pub id: EventId,
    pub line: LinePrimitive,
    pub selected: bool,
}

/// Resize handle overlay of the selected bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleShape {
    pub id: EventId,
    pub handle: DragHandle,
    pub rect: RectPrimitive,
}

/// Backend-agnostic scene for one timeline draw pass.
///
/// Shapes carry [`EventId`]s so the render layer can route pointer input
/// back to the chart without holding references into the event set.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lane_rules: Vec<LinePrimitive>,
    pub bars: Vec<BarShape>,
    pub instances: Vec<InstanceShape>,
    pub handles: Vec<HandleShape>,
    pub brush: Option<RectPrimitive>,
    /// Baseline of the time axis band below the lanes.
    pub time_axis: Option<LinePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lane_rules: Vec::new(),
            bars: Vec::new(),
            instances: Vec::new(),
            handles: Vec::new(),
            brush: None,
            time_axis: None,
        }
    }

    #[must_use]
    pub fn bar(&self, id: EventId) -> Option<&BarShape> {
        self.bars.iter().find(|bar| bar.id == id)
    }

    #[must_use]
    pub fn handle(&self, handle: DragHandle) -> Option<&HandleShape> {
        self.handles.iter().find(|shape| shape.handle == handle)
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.viewport.is_valid() {
            return Err(GanttError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lane_rules {
            line.validate()?;
        }
        for bar in &self.bars {
            bar.rect.validate()?;
        }
        for instance in &self.instances {
            instance.line.validate()?;
        }
        for handle in &self.handles {
            handle.rect.validate()?;
        }
        if let Some(brush) = self.brush {
            brush.validate()?;
        }
        if let Some(axis) = self.time_axis {
            axis.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lane_rules.is_empty()
            && self.bars.is_empty()
            && self.instances.is_empty()
            && self.handles.is_empty()
            && self.brush.is_none()
            && self.time_axis.is_none()
    }
}
