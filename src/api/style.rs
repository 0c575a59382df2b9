use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::validation::validate_style;

/// Immutable style configuration for a chart.
///
/// Colors and stroke widths are opaque to the geometry; only
/// `chart_end_padding`, `text_height`, `tag_width` and `tag_padding` influence
/// layout. Missing JSON fields fall back to [`LiveChartStyle::default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveChartStyle {
    pub main_color: Color,
    pub main_fill_color: Color,
    pub positive_color: Color,
    pub negative_color: Color,
    pub positive_fill_color: Color,
    pub negative_fill_color: Color,
    pub second_color: Color,
    pub text_color: Color,
    pub tag_text_color: Color,
    pub baseline_color: Color,
    pub bounds_line_color: Color,
    pub guide_line_color: Color,
    pub overlay_line_color: Color,
    pub overlay_circle_color: Color,
    pub path_stroke_width: f64,
    pub second_path_stroke_width: f64,
    pub baseline_stroke_width: f64,
    /// Dash length of the baseline; ignored when `baseline_dash_gap` is zero.
    pub baseline_dash_width: f64,
    pub baseline_dash_gap: f64,
    pub bounds_line_width: f64,
    pub guide_line_width: f64,
    pub end_point_line_width: f64,
    pub overlay_line_width: f64,
    pub overlay_circle_diameter: f64,
    /// Width reserved right of the chart for Y-bound labels when they are drawn.
    pub chart_end_padding: f64,
    pub text_height: f64,
    pub tag_width: f64,
    pub tag_padding: f64,
}

impl Default for LiveChartStyle {
    fn default() -> Self {
        Self {
            main_color: Color::BLACK,
            main_fill_color: Color::rgba8(0x30, 0x30, 0x30, 0x11),
            positive_color: Color::rgba8(0x01, 0xC1, 0x94, 0xFF),
            negative_color: Color::rgba8(0xD7, 0x0A, 0x53, 0xFF),
            positive_fill_color: Color::rgba8(0x01, 0xC1, 0x94, 0x11),
            negative_fill_color: Color::rgba8(0xD7, 0x0A, 0x53, 0x11),
            second_color: Color::GRAY,
            text_color: Color::BLACK,
            tag_text_color: Color::WHITE,
            baseline_color: Color::GRAY,
            bounds_line_color: Color::GRAY,
            guide_line_color: Color::rgba8(0x00, 0x00, 0x00, 0x1F),
            overlay_line_color: Color::GRAY,
            overlay_circle_color: Color::BLACK,
            path_stroke_width: 4.0,
            second_path_stroke_width: 4.0,
            baseline_stroke_width: 2.0,
            baseline_dash_width: 10.0,
            baseline_dash_gap: 15.0,
            bounds_line_width: 1.0,
            guide_line_width: 1.0,
            end_point_line_width: 3.0,
            overlay_line_width: 2.0,
            overlay_circle_diameter: 12.0,
            chart_end_padding: 140.0,
            text_height: 30.0,
            tag_width: 120.0,
            tag_padding: 8.0,
        }
    }
}

impl LiveChartStyle {
    #[must_use]
    pub fn with_main_color(mut self, color: Color) -> Self {
        self.main_color = color;
        self
    }

    #[must_use]
    pub fn with_main_fill_color(mut self, color: Color) -> Self {
        self.main_fill_color = color;
        self
    }

    /// Sets the line/fill palette used when the series ends above or below the baseline.
    #[must_use]
    pub fn with_conditional_palette(
        mut self,
        positive: Color,
        negative: Color,
        positive_fill: Color,
        negative_fill: Color,
    ) -> Self {
        self.positive_color = positive;
        self.negative_color = negative;
        self.positive_fill_color = positive_fill;
        self.negative_fill_color = negative_fill;
        self
    }

    #[must_use]
    pub fn with_second_path(mut self, color: Color, stroke_width: f64) -> Self {
        self.second_color = color;
        self.second_path_stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_path_stroke_width(mut self, width: f64) -> Self {
        self.path_stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_baseline_dash(mut self, dash_width: f64, dash_gap: f64) -> Self {
        self.baseline_dash_width = dash_width;
        self.baseline_dash_gap = dash_gap;
        self
    }

    #[must_use]
    pub fn with_chart_end_padding(mut self, padding: f64) -> Self {
        self.chart_end_padding = padding;
        self
    }

    #[must_use]
    pub fn with_text_height(mut self, text_height: f64) -> Self {
        self.text_height = text_height;
        self
    }

    #[must_use]
    pub fn with_overlay(mut self, line_color: Color, circle_color: Color, diameter: f64) -> Self {
        self.overlay_line_color = line_color;
        self.overlay_circle_color = circle_color;
        self.overlay_circle_diameter = diameter;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_style(self).map(|_| ())
    }

    /// Serializes the style to pretty JSON for config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize style: {e}")))
    }

    /// Deserializes and validates a style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse style: {e}")))?;
        validate_style(style)
    }
}
