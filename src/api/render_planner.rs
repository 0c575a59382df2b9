use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    ChartBounds, ChartPath, CoordinateMapper, Dataset, PointF, format_label_value,
    smooth_path_through,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LastPointTag, LinePrimitive, LineStrokeStyle, PathFill, PathPrimitive, RectPrimitive,
    RenderPlan, TextPrimitive,
};

use super::{DrawModes, LiveChartStyle, YAxisGravity};

/// Fractions of the chart height at which intermediate bound labels sit.
const BOUND_LABEL_FRACTIONS: [f64; 3] = [0.25, 0.5, 0.75];

/// Everything the planner reads for one pass.
#[derive(Debug, Clone, Copy)]
pub struct PlanInput<'a> {
    pub bounds: ChartBounds,
    pub dataset: &'a Dataset,
    pub second_dataset: Option<&'a Dataset>,
    pub style: &'a LiveChartStyle,
    pub modes: DrawModes,
}

/// Pixel geometry shared by the render planner and the touch table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub mapper: CoordinateMapper,
    pub knots: Vec<PointF>,
    pub main_path: ChartPath,
    pub second_path: Option<ChartPath>,
    pub baseline_value: f64,
}

impl ChartGeometry {
    /// Straight polyline through the knots, dropped to the chart bottom and closed.
    #[must_use]
    pub fn fill_path(&self) -> ChartPath {
        let mut path = ChartPath::polyline(&self.knots);
        if let (Some(first), Some(last)) = (self.knots.first(), self.knots.last()) {
            let bottom = self.mapper.chart_height();
            path.line_to(PointF::new(last.x, bottom));
            path.line_to(PointF::new(first.x, bottom));
            path.close();
        }
        path
    }
}

/// Resolves the mapper and paths, or `None` when there is nothing to draw.
///
/// Empty datasets, datasets without positive X, zero-sized bounds and
/// degenerate ranges all yield `None`.
pub fn resolve_geometry(input: &PlanInput<'_>) -> ChartResult<Option<ChartGeometry>> {
    let dataset = input.dataset;
    if dataset.is_empty() || !dataset.has_data() {
        debug!(points_len = dataset.len(), "dataset has nothing to draw");
        return Ok(None);
    }
    if !input.bounds.is_valid() {
        debug!(
            end = input.bounds.end,
            bottom = input.bounds.bottom,
            "chart bounds are not drawable"
        );
        return Ok(None);
    }

    let reserved = input.modes.reserved_label_width(input.style);
    let mapper = match CoordinateMapper::new(input.bounds, dataset, input.second_dataset, reserved)
    {
        Ok(mapper) => mapper,
        Err(err @ (ChartError::DegenerateRange { .. } | ChartError::InvalidBounds { .. })) => {
            debug!(error = %err, "skipping plan for degenerate mapping");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let smooth = input.modes.smooth_path;
    let knots = project(&mapper, dataset);
    let main_path = series_path(&knots, smooth)?;
    let second_path = match input.second_dataset {
        Some(second) if second.len() > 1 => Some(series_path(&project(&mapper, second), smooth)?),
        _ => None,
    };

    let baseline_value = match (input.modes.manual_baseline, dataset.first()) {
        (Some(value), _) => value,
        (None, Some(first)) => first.y,
        (None, None) => mapper.lower_bound(),
    };

    Ok(Some(ChartGeometry {
        mapper,
        knots,
        main_path,
        second_path,
        baseline_value,
    }))
}

/// Builds the full chart scene without touch feedback.
pub fn plan_chart(input: &PlanInput<'_>) -> ChartResult<RenderPlan> {
    let Some(geometry) = resolve_geometry(input)? else {
        return Ok(RenderPlan::empty(input.bounds));
    };

    let style = input.style;
    let modes = input.modes;
    let bounds = input.bounds;
    let mapper = &geometry.mapper;
    let palette = Palette::resolve(input.dataset, geometry.baseline_value, style, modes);
    let plot_end = bounds.start + mapper.available_width();

    let mut plan = RenderPlan::empty(bounds);
    plan.guidelines = guidelines(bounds, mapper, style, modes);

    if modes.baseline {
        let y = mapper.y_to_pixels(geometry.baseline_value);
        let stroke =
            LineStrokeStyle::dashed_or_solid(style.baseline_dash_width, style.baseline_dash_gap);
        plan.baseline = Some(
            LinePrimitive::new(
                bounds.start,
                y,
                plot_end,
                y,
                style.baseline_stroke_width,
                style.baseline_color,
            )
            .with_stroke_style(stroke),
        );
    }

    plan.second_path = geometry.second_path.clone().map(|path| {
        PathPrimitive::stroked(path, style.second_path_stroke_width, style.second_color)
    });
    plan.main_path = Some(PathPrimitive::stroked(
        geometry.main_path.clone(),
        style.path_stroke_width,
        palette.line,
    ));

    if modes.fill {
        let fill = if modes.gradient_fill {
            PathFill::LinearGradient {
                x0: bounds.start,
                y0: mapper.y_to_pixels(input.dataset.upper_bound()),
                x1: bounds.start,
                y1: mapper.chart_height(),
                from: palette.fill,
                to: Color::TRANSPARENT,
            }
        } else {
            PathFill::Solid(palette.fill)
        };
        plan.fill_path = Some(PathPrimitive::filled(geometry.fill_path(), fill));
    }

    if modes.y_bounds {
        let (axis_x, label_x) = match modes.y_axis_gravity {
            YAxisGravity::End => (plot_end, plot_end + style.tag_padding),
            YAxisGravity::Start => (
                bounds.start + style.chart_end_padding,
                bounds.start + style.tag_padding,
            ),
        };
        plan.y_bounds_line = Some(LinePrimitive::new(
            axis_x,
            bounds.top,
            axis_x,
            bounds.bottom,
            style.bounds_line_width,
            style.bounds_line_color,
        ));
        plan.bound_labels = bound_labels(bounds, mapper, style, label_x);
    }

    if modes.last_point_label {
        if let Some(last) = input.dataset.last() {
            plan.last_point_tag = Some(last_point_tag(
                bounds.start,
                plot_end,
                mapper.y_to_pixels(last.y),
                last.y,
                palette.line,
                style,
            ));
        }
    }

    debug!(
        points_len = input.dataset.len(),
        smooth = modes.smooth_path,
        paths = plan.path_count(),
        lines = plan.line_count(),
        texts = plan.text_count(),
        "built render plan"
    );
    Ok(plan)
}

fn project(mapper: &CoordinateMapper, dataset: &Dataset) -> Vec<PointF> {
    dataset
        .points()
        .iter()
        .map(|point| mapper.point_to_pixels(*point))
        .collect()
}

fn series_path(knots: &[PointF], smooth: bool) -> ChartResult<ChartPath> {
    if smooth && knots.len() > 1 {
        smooth_path_through(knots)
    } else {
        Ok(ChartPath::polyline(knots))
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    line: Color,
    fill: Color,
}

impl Palette {
    fn resolve(
        dataset: &Dataset,
        baseline_value: f64,
        style: &LiveChartStyle,
        modes: DrawModes,
    ) -> Self {
        if !modes.baseline_conditional_color {
            return Self {
                line: style.main_color,
                fill: style.main_fill_color,
            };
        }

        let above = dataset.last().is_some_and(|last| last.y > baseline_value);
        trace!(above, baseline_value, "conditional palette");
        if above {
            Self {
                line: style.positive_color,
                fill: style.positive_fill_color,
            }
        } else {
            Self {
                line: style.negative_color,
                fill: style.negative_fill_color,
            }
        }
    }
}

fn guidelines(
    bounds: ChartBounds,
    mapper: &CoordinateMapper,
    style: &LiveChartStyle,
    modes: DrawModes,
) -> Vec<LinePrimitive> {
    let mut lines = Vec::new();
    let width = mapper.available_width();

    if let Some(steps) = modes.vertical_guidelines.filter(|steps| *steps > 0) {
        let step = width / f64::from(steps);
        lines.extend((0..=steps).map(|i| {
            let x = bounds.start + step * f64::from(i);
            LinePrimitive::new(
                x,
                bounds.bottom,
                x,
                bounds.top,
                style.guide_line_width,
                style.guide_line_color,
            )
        }));
    }

    if let Some(steps) = modes.horizontal_guidelines.filter(|steps| *steps > 0) {
        let step = bounds.bottom / f64::from(steps);
        lines.extend((0..=steps).map(|i| {
            let y = step * f64::from(i);
            LinePrimitive::new(
                bounds.start,
                y,
                bounds.start + width,
                y,
                style.guide_line_width,
                style.guide_line_color,
            )
        }));
    }

    lines
}

/// Lower bound at the bottom, upper bound at the top, and the values sitting
/// at each quarter of the chart height in between.
fn bound_labels(
    bounds: ChartBounds,
    mapper: &CoordinateMapper,
    style: &LiveChartStyle,
    x: f64,
) -> SmallVec<[TextPrimitive; 5]> {
    let upper = mapper.upper_bound();
    let lower = mapper.lower_bound();
    let range = upper - lower;
    let label = |value: f64, y: f64| {
        TextPrimitive::new(
            format_label_value(value),
            x,
            y,
            style.text_height,
            style.text_color,
        )
    };

    let mut labels = SmallVec::new();
    labels.push(label(lower, bounds.bottom));
    for fraction in BOUND_LABEL_FRACTIONS {
        labels.push(label(
            upper - range * fraction,
            bounds.top + bounds.bottom * fraction,
        ));
    }
    labels.push(label(upper, bounds.top));
    labels
}

fn last_point_tag(
    start: f64,
    plot_end: f64,
    y: f64,
    value: f64,
    color: Color,
    style: &LiveChartStyle,
) -> LastPointTag {
    LastPointTag {
        line: LinePrimitive::new(start, y, plot_end, y, style.end_point_line_width, color),
        rect: RectPrimitive::new(
            plot_end,
            y - style.text_height - style.tag_padding,
            plot_end + style.tag_width,
            y,
            color,
        ),
        text: TextPrimitive::new(
            format_label_value(value),
            plot_end + style.tag_padding,
            y - style.tag_padding,
            style.text_height,
            style.tag_text_color,
        ),
    }
}
