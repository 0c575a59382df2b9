use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

/// Pixel-space rectangle available for drawing.
///
/// `start` and `top` are the offsets of the drawable area inside the host
/// surface. `end` and `bottom` are the drawable extents as delivered by host
/// layout (surface size minus padding); `bottom` doubles as the chart height
/// used by the vertical transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub top: f64,
    pub start: f64,
    pub end: f64,
    pub bottom: f64,
}

impl ChartBounds {
    #[must_use]
    pub fn new(top: f64, start: f64, end: f64, bottom: f64) -> Self {
        Self {
            top,
            start,
            end,
            bottom,
        }
    }

    /// Builds bounds from a surface size and its padding, the way host layout does on resize.
    #[must_use]
    pub fn from_surface(
        width: f64,
        height: f64,
        padding_left: f64,
        padding_top: f64,
        padding_right: f64,
        padding_bottom: f64,
    ) -> Self {
        Self {
            top: padding_top,
            start: padding_left,
            end: width - (padding_left + padding_right),
            bottom: height - (padding_top + padding_bottom),
        }
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.start, self.end, self.bottom]
            .iter()
            .all(|value| value.is_finite())
            && self.end > 0.0
            && self.bottom > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidBounds {
                top: self.top,
                start: self.start,
                end: self.end,
                bottom: self.bottom,
            })
        }
    }
}

/// One chart sample. `x` is an index or time coordinate, `y` the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a timestamp (unix seconds on X) and a decimal value.
    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(self.x, "point x")?;
        ensure_finite(self.y, "point y")?;
        Ok(())
    }
}
