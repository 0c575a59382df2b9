use serde::{Deserialize, Serialize};

use crate::core::PointF;
use crate::error::{ChartError, ChartResult};

/// One drawing command of a [`ChartPath`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo(PointF),
    LineTo(PointF),
    CubicTo {
        control1: PointF,
        control2: PointF,
        to: PointF,
    },
    Close,
}

/// Backend-agnostic pixel-space path made of lines and cubic Bezier segments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartPath {
    segments: Vec<PathSegment>,
}

impl ChartPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight path through `points` in order. Empty input yields an empty path.
    #[must_use]
    pub fn polyline(points: &[PointF]) -> Self {
        let mut path = Self::new();
        let mut iter = points.iter().copied();
        if let Some(first) = iter.next() {
            path.move_to(first);
            for point in iter {
                path.line_to(point);
            }
        }
        path
    }

    pub fn move_to(&mut self, point: PointF) {
        self.segments.push(PathSegment::MoveTo(point));
    }

    pub fn line_to(&mut self, point: PointF) {
        self.segments.push(PathSegment::LineTo(point));
    }

    pub fn cubic_to(&mut self, control1: PointF, control2: PointF, to: PointF) {
        self.segments.push(PathSegment::CubicTo {
            control1,
            control2,
            to,
        });
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the first command, usually the `MoveTo` origin.
    #[must_use]
    pub fn first_point(&self) -> Option<PointF> {
        self.segments.iter().find_map(|segment| segment.end_point())
    }

    /// End point of the last drawing command, ignoring a trailing `Close`.
    #[must_use]
    pub fn last_point(&self) -> Option<PointF> {
        self.segments
            .iter()
            .rev()
            .find_map(|segment| segment.end_point())
    }

    /// Number of cubic segments in the path.
    #[must_use]
    pub fn cubic_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, PathSegment::CubicTo { .. }))
            .count()
    }

    pub fn validate(&self) -> ChartResult<()> {
        let all_finite = self.segments.iter().all(|segment| match segment {
            PathSegment::MoveTo(point) | PathSegment::LineTo(point) => point.is_finite(),
            PathSegment::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
            PathSegment::Close => true,
        });
        if !all_finite {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if !matches!(self.segments.first(), None | Some(PathSegment::MoveTo(_))) {
            return Err(ChartError::InvalidData(
                "path must start with a move command".to_owned(),
            ));
        }
        Ok(())
    }
}

impl PathSegment {
    #[must_use]
    pub fn end_point(&self) -> Option<PointF> {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => Some(point),
            Self::CubicTo { to, .. } => Some(to),
            Self::Close => None,
        }
    }
}
