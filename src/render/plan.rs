use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartBounds, DataPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// End-of-series marker: a line across the chart, a tag box and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPointTag {
    pub line: LinePrimitive,
    pub rect: RectPrimitive,
    pub text: TextPrimitive,
}

/// Touch feedback geometry: a vertical line through the tracked column and a
/// dot on the path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchIndicator {
    pub line: LinePrimitive,
    pub circle: CirclePrimitive,
    pub data_point: DataPoint,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Fields are listed in paint order: guidelines, baseline, second path, main
/// path, fill, Y-bounds line and labels, last-point tag, touch indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub bounds: ChartBounds,
    pub guidelines: Vec<LinePrimitive>,
    pub baseline: Option<LinePrimitive>,
    pub second_path: Option<PathPrimitive>,
    pub main_path: Option<PathPrimitive>,
    pub fill_path: Option<PathPrimitive>,
    pub y_bounds_line: Option<LinePrimitive>,
    pub bound_labels: SmallVec<[TextPrimitive; 5]>,
    pub last_point_tag: Option<LastPointTag>,
    pub touch_indicator: Option<TouchIndicator>,
}

impl RenderPlan {
    /// Plan with nothing to draw.
    #[must_use]
    pub fn empty(bounds: ChartBounds) -> Self {
        Self {
            bounds,
            guidelines: Vec::new(),
            baseline: None,
            second_path: None,
            main_path: None,
            fill_path: None,
            y_bounds_line: None,
            bound_labels: SmallVec::new(),
            last_point_tag: None,
            touch_indicator: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_count() == 0
            && self.line_count() == 0
            && self.text_count() == 0
            && self.touch_indicator.is_none()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        [&self.second_path, &self.main_path, &self.fill_path]
            .iter()
            .filter(|path| path.is_some())
            .count()
    }

    /// Straight line primitives, including the tag and indicator lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.guidelines.len()
            + usize::from(self.baseline.is_some())
            + usize::from(self.y_bounds_line.is_some())
            + usize::from(self.last_point_tag.is_some())
            + usize::from(self.touch_indicator.is_some())
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.bound_labels.len() + usize::from(self.last_point_tag.is_some())
    }

    /// Checks every primitive. An empty plan is valid for any bounds, so
    /// zero-sized hosts can still be rendered.
    pub fn validate(&self) -> ChartResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        self.bounds.validate()?;

        for line in &self.guidelines {
            line.validate()?;
        }
        if let Some(baseline) = self.baseline {
            baseline.validate()?;
        }
        for path in [&self.second_path, &self.main_path, &self.fill_path]
            .into_iter()
            .flatten()
        {
            path.validate()?;
        }
        if let Some(line) = self.y_bounds_line {
            line.validate()?;
        }
        for label in &self.bound_labels {
            label.validate()?;
        }
        if let Some(tag) = &self.last_point_tag {
            tag.line.validate()?;
            tag.rect.validate()?;
            tag.text.validate()?;
        }
        if let Some(indicator) = self.touch_indicator {
            indicator.line.validate()?;
            indicator.circle.validate()?;
        }
        Ok(())
    }

    /// Serializes the plan to pretty JSON for snapshots and debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize render plan: {e}")))
    }
}
