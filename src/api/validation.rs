use crate::core::{ChartBounds, MAX_TABLE_COLUMNS};
use crate::error::{ChartError, ChartResult};

use super::{DrawModes, LiveChartStyle};

pub(super) fn validate_style(style: LiveChartStyle) -> ChartResult<LiveChartStyle> {
    for color in [
        style.main_color,
        style.main_fill_color,
        style.positive_color,
        style.negative_color,
        style.positive_fill_color,
        style.negative_fill_color,
        style.second_color,
        style.text_color,
        style.tag_text_color,
        style.baseline_color,
        style.bounds_line_color,
        style.guide_line_color,
        style.overlay_line_color,
        style.overlay_circle_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("path_stroke_width", style.path_stroke_width),
        ("second_path_stroke_width", style.second_path_stroke_width),
        ("baseline_stroke_width", style.baseline_stroke_width),
        ("bounds_line_width", style.bounds_line_width),
        ("guide_line_width", style.guide_line_width),
        ("end_point_line_width", style.end_point_line_width),
        ("overlay_line_width", style.overlay_line_width),
        ("text_height", style.text_height),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "style `{name}` must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("baseline_dash_width", style.baseline_dash_width),
        ("baseline_dash_gap", style.baseline_dash_gap),
        ("overlay_circle_diameter", style.overlay_circle_diameter),
        ("chart_end_padding", style.chart_end_padding),
        ("tag_width", style.tag_width),
        ("tag_padding", style.tag_padding),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "style `{name}` must be finite and >= 0"
            )));
        }
    }

    if style.baseline_dash_gap > 0.0 && style.baseline_dash_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "style `baseline_dash_width` must be > 0 when a dash gap is set".to_owned(),
        ));
    }

    Ok(style)
}

pub(super) fn validate_draw_modes(modes: DrawModes) -> ChartResult<DrawModes> {
    for (name, steps) in [
        ("vertical", modes.vertical_guidelines),
        ("horizontal", modes.horizontal_guidelines),
    ] {
        if steps == Some(0) {
            return Err(ChartError::InvalidData(format!(
                "{name} guideline steps must be >= 1"
            )));
        }
    }

    if let Some(baseline) = modes.manual_baseline {
        if !baseline.is_finite() {
            return Err(ChartError::InvalidInput(
                "manual baseline must be finite".to_owned(),
            ));
        }
    }

    Ok(modes)
}

/// Bounds supplied by the host may be zero-sized; non-finite, negative or
/// oversized extents are rejected.
pub(super) fn validate_host_bounds(bounds: ChartBounds) -> ChartResult<ChartBounds> {
    let finite = [bounds.top, bounds.start, bounds.end, bounds.bottom]
        .iter()
        .all(|value| value.is_finite());
    let max_extent = MAX_TABLE_COLUMNS as f64;
    let extents_in_range = [bounds.end, bounds.bottom]
        .iter()
        .all(|extent| (0.0..=max_extent).contains(extent));
    if !finite || !extents_in_range {
        return Err(ChartError::InvalidBounds {
            top: bounds.top,
            start: bounds.start,
            end: bounds.end,
            bottom: bounds.bottom,
        });
    }
    Ok(bounds)
}
