use serde::{Deserialize, Serialize};

use super::LiveChartStyle;

/// Side of the chart that carries the Y-bounds line and its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisGravity {
    Start,
    #[default]
    End,
}

/// Single drawing option toggled on a chart.
///
/// Options are accumulated into [`DrawModes`]; later options win when they
/// touch the same setting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawMode {
    /// Draw the main series through Bezier control points instead of straight segments.
    SmoothPath,
    /// Fill the area below the series. `gradient` fades the fill towards the bottom.
    Fill { gradient: bool },
    /// Draw the baseline, taken from the first point's value.
    Baseline,
    /// Same as [`DrawMode::Baseline`], clearing any manual baseline value.
    BaselineFromFirstPoint,
    /// Pick positive/negative colors from the last value against the baseline.
    BaselineConditionalColor,
    YBounds,
    YAxisGravity(YAxisGravity),
    VerticalGuidelines { steps: u32 },
    HorizontalGuidelines { steps: u32 },
    LastPointLabel,
    /// Use a fixed baseline value instead of the first point's value.
    ManualBaseline(f64),
}

/// Resolved set of drawing options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawModes {
    pub smooth_path: bool,
    pub fill: bool,
    pub gradient_fill: bool,
    pub baseline: bool,
    pub baseline_conditional_color: bool,
    pub y_bounds: bool,
    pub y_axis_gravity: YAxisGravity,
    pub vertical_guidelines: Option<u32>,
    pub horizontal_guidelines: Option<u32>,
    pub last_point_label: bool,
    pub manual_baseline: Option<f64>,
}

impl Default for DrawModes {
    fn default() -> Self {
        Self {
            smooth_path: false,
            fill: false,
            gradient_fill: true,
            baseline: false,
            baseline_conditional_color: false,
            y_bounds: false,
            y_axis_gravity: YAxisGravity::End,
            vertical_guidelines: None,
            horizontal_guidelines: None,
            last_point_label: false,
            manual_baseline: None,
        }
    }
}

impl DrawModes {
    #[must_use]
    pub fn from_modes(modes: impl IntoIterator<Item = DrawMode>) -> Self {
        modes
            .into_iter()
            .fold(Self::default(), |resolved, mode| resolved.with(mode))
    }

    #[must_use]
    pub fn with(mut self, mode: DrawMode) -> Self {
        match mode {
            DrawMode::SmoothPath => self.smooth_path = true,
            DrawMode::Fill { gradient } => {
                self.fill = true;
                self.gradient_fill = gradient;
            }
            DrawMode::Baseline => self.baseline = true,
            DrawMode::BaselineFromFirstPoint => {
                self.baseline = true;
                self.manual_baseline = None;
            }
            DrawMode::BaselineConditionalColor => self.baseline_conditional_color = true,
            DrawMode::YBounds => self.y_bounds = true,
            DrawMode::YAxisGravity(gravity) => self.y_axis_gravity = gravity,
            DrawMode::VerticalGuidelines { steps } => self.vertical_guidelines = Some(steps),
            DrawMode::HorizontalGuidelines { steps } => self.horizontal_guidelines = Some(steps),
            DrawMode::LastPointLabel => self.last_point_label = true,
            DrawMode::ManualBaseline(value) => self.manual_baseline = Some(value),
        }
        self
    }

    /// Horizontal space kept free for bound labels and the last-point tag.
    #[must_use]
    pub fn reserved_label_width(self, style: &LiveChartStyle) -> f64 {
        if self.y_bounds || self.last_point_label {
            style.chart_end_padding
        } else {
            0.0
        }
    }
}
