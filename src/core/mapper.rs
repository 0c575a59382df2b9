use crate::core::{ChartBounds, DataPoint, Dataset, PointF};
use crate::error::{ChartError, ChartResult};

/// Data-space ↔ pixel-space transform for both axes.
///
/// Built from the current chart bounds and one or two datasets. The vertical
/// mapping is inverted (pixel Y grows downward) and spans `[0, bottom]`; the
/// horizontal mapping places the smallest X at `bounds.start` and divides the
/// X span over the available width, which excludes the Y-bound label column
/// when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    start: f64,
    chart_height: f64,
    available_width: f64,
    lower_bound: f64,
    upper_bound: f64,
    min_x: f64,
    max_x: f64,
    y_scale: f64,
    x_scale: f64,
}

impl CoordinateMapper {
    /// `reserved_label_width` is subtracted from `bounds.end` and should be
    /// zero unless Y-bound labels are drawn.
    pub fn new(
        bounds: ChartBounds,
        primary: &Dataset,
        second: Option<&Dataset>,
        reserved_label_width: f64,
    ) -> ChartResult<Self> {
        bounds.validate()?;
        if !reserved_label_width.is_finite() || reserved_label_width < 0.0 {
            return Err(ChartError::InvalidInput(
                "reserved label width must be finite and >= 0".to_owned(),
            ));
        }

        let chart_height = bounds.chart_height();
        let available_width = bounds.end - reserved_label_width;
        if available_width <= 0.0 {
            return Err(ChartError::InvalidBounds {
                top: bounds.top,
                start: bounds.start,
                end: available_width,
                bottom: bounds.bottom,
            });
        }

        let second = second.filter(|dataset| dataset.has_data());
        let (lower_bound, upper_bound) = match second {
            Some(second) => (
                primary.lower_bound().min(second.lower_bound()),
                primary.upper_bound().max(second.upper_bound()),
            ),
            None => (primary.lower_bound(), primary.upper_bound()),
        };
        if upper_bound == lower_bound {
            return Err(ChartError::DegenerateRange {
                axis: "y",
                min: lower_bound,
                max: upper_bound,
            });
        }

        let (min_x, max_x) = x_extent(primary, second)?;
        if max_x == min_x {
            return Err(ChartError::DegenerateRange {
                axis: "x",
                min: min_x,
                max: max_x,
            });
        }

        Ok(Self {
            start: bounds.start,
            chart_height,
            available_width,
            lower_bound,
            upper_bound,
            min_x,
            max_x,
            y_scale: (upper_bound - lower_bound) / chart_height,
            x_scale: (max_x - min_x) / available_width,
        })
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn x_extent(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.available_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    /// Data units per vertical pixel.
    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    /// Data units per horizontal pixel.
    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_to_pixels(&self, value: f64) -> f64 {
        self.chart_height - (value - self.lower_bound) / self.y_scale
    }

    #[must_use]
    pub fn pixels_to_y(&self, pixel: f64) -> f64 {
        (pixel - self.chart_height) * (-self.y_scale) + self.lower_bound
    }

    /// X offset relative to `bounds.start`; the smallest X maps to `0`.
    #[must_use]
    pub fn x_to_pixels(&self, value: f64) -> f64 {
        (value - self.min_x) / self.x_scale
    }

    /// Inverse of [`Self::x_to_pixels`]; `pixel` is relative to `bounds.start`.
    #[must_use]
    pub fn pixels_to_x(&self, pixel: f64) -> f64 {
        pixel * self.x_scale + self.min_x
    }

    /// Maps a data point to absolute chart pixels (start offset applied).
    #[must_use]
    pub fn point_to_pixels(&self, point: DataPoint) -> PointF {
        PointF::new(
            self.start + self.x_to_pixels(point.x),
            self.y_to_pixels(point.y),
        )
    }

    /// Inverse of [`Self::point_to_pixels`].
    #[must_use]
    pub fn pixels_to_point(&self, pixel: PointF) -> DataPoint {
        DataPoint::new(
            self.pixels_to_x(pixel.x - self.start),
            self.pixels_to_y(pixel.y),
        )
    }
}

fn x_extent(primary: &Dataset, second: Option<&Dataset>) -> ChartResult<(f64, f64)> {
    let (Some(first), Some(last)) = (primary.first(), primary.last()) else {
        return Err(ChartError::InvalidInput(
            "primary dataset has no points".to_owned(),
        ));
    };

    match second.and_then(|dataset| dataset.first().zip(dataset.last())) {
        Some((second_first, second_last)) => Ok((
            first.x.min(second_first.x),
            last.x.max(second_last.x),
        )),
        None => Ok((first.x, last.x)),
    }
}
