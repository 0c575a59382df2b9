use crate::core::{ChartPath, PathSegment, PointF};

/// Default maximum distance (pixels) between a cubic and its flattened chords.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.25;

const MAX_SUBDIVISION_DEPTH: u32 = 16;

/// Arc-length measure over the first contour of a [`ChartPath`].
///
/// Cubic segments are flattened by adaptive subdivision; every later lookup
/// walks the resulting polyline by distance travelled.
#[derive(Debug, Clone, PartialEq)]
pub struct PathMeasure {
    points: Vec<PointF>,
    cumulative: Vec<f64>,
}

impl PathMeasure {
    #[must_use]
    pub fn new(path: &ChartPath) -> Self {
        Self::with_tolerance(path, DEFAULT_FLATTEN_TOLERANCE)
    }

    #[must_use]
    pub fn with_tolerance(path: &ChartPath, tolerance: f64) -> Self {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            DEFAULT_FLATTEN_TOLERANCE
        };

        let points = flatten_first_contour(path, tolerance);
        let mut cumulative = Vec::with_capacity(points.len());
        let mut travelled = 0.0;
        for (index, point) in points.iter().enumerate() {
            if index > 0 {
                travelled += points[index - 1].distance_to(*point);
            }
            cumulative.push(travelled);
        }

        Self { points, cumulative }
    }

    /// Total arc length of the measured contour.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position at `distance` along the contour, clamped to `[0, length]`.
    #[must_use]
    pub fn position_at(&self, distance: f64) -> Option<PointF> {
        let first = *self.points.first()?;
        let distance = if distance.is_nan() {
            0.0
        } else {
            distance.clamp(0.0, self.length())
        };

        let index = self.cumulative.partition_point(|&value| value < distance);
        if index == 0 {
            return Some(first);
        }
        if index >= self.points.len() {
            return self.points.last().copied();
        }

        let from = self.cumulative[index - 1];
        let to = self.cumulative[index];
        let t = (distance - from) / (to - from);
        Some(self.points[index - 1].lerp(self.points[index], t))
    }
}

fn flatten_first_contour(path: &ChartPath, tolerance: f64) -> Vec<PointF> {
    let mut points: Vec<PointF> = Vec::new();
    let mut contour_start = None;

    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo(point) => {
                if contour_start.is_some() {
                    break;
                }
                contour_start = Some(point);
                points.push(point);
            }
            PathSegment::LineTo(point) => {
                if points.is_empty() {
                    contour_start = Some(point);
                }
                points.push(point);
            }
            PathSegment::CubicTo {
                control1,
                control2,
                to,
            } => match points.last().copied() {
                Some(from) => flatten_cubic(from, control1, control2, to, tolerance, 0, &mut points),
                None => {
                    contour_start = Some(to);
                    points.push(to);
                }
            },
            PathSegment::Close => {
                if let Some(start) = contour_start {
                    points.push(start);
                }
                break;
            }
        }
    }

    points
}

fn flatten_cubic(
    p0: PointF,
    p1: PointF,
    p2: PointF,
    p3: PointF,
    tolerance: f64,
    depth: u32,
    out: &mut Vec<PointF>,
) {
    if depth >= MAX_SUBDIVISION_DEPTH || is_flat(p0, p1, p2, p3, tolerance) {
        out.push(p3);
        return;
    }

    let p01 = p0.lerp(p1, 0.5);
    let p12 = p1.lerp(p2, 0.5);
    let p23 = p2.lerp(p3, 0.5);
    let p012 = p01.lerp(p12, 0.5);
    let p123 = p12.lerp(p23, 0.5);
    let mid = p012.lerp(p123, 0.5);

    flatten_cubic(p0, p01, p012, mid, tolerance, depth + 1, out);
    flatten_cubic(mid, p123, p23, p3, tolerance, depth + 1, out);
}

fn is_flat(p0: PointF, p1: PointF, p2: PointF, p3: PointF, tolerance: f64) -> bool {
    let chord = p0.distance_to(p3);
    if chord <= f64::EPSILON {
        return p0.distance_to(p1) <= tolerance && p0.distance_to(p2) <= tolerance;
    }
    let dx = p3.x - p0.x;
    let dy = p3.y - p0.y;
    let offset = |p: PointF| ((p.x - p0.x) * dy - (p.y - p0.y) * dx).abs() / chord;
    offset(p1) <= tolerance && offset(p2) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::PathMeasure;
    use crate::core::{ChartPath, PointF};

    #[test]
    fn polyline_length_sums_segments() {
        let path = ChartPath::polyline(&[
            PointF::new(0.0, 0.0),
            PointF::new(3.0, 4.0),
            PointF::new(3.0, 10.0),
        ]);
        let measure = PathMeasure::new(&path);
        assert_eq!(measure.length(), 11.0);
        assert_eq!(measure.position_at(5.0), Some(PointF::new(3.0, 4.0)));
        assert_eq!(measure.position_at(8.0), Some(PointF::new(3.0, 7.0)));
        assert_eq!(measure.position_at(100.0), Some(PointF::new(3.0, 10.0)));
        assert_eq!(measure.position_at(-1.0), Some(PointF::new(0.0, 0.0)));
    }

    #[test]
    fn measure_stops_at_second_contour() {
        let mut path = ChartPath::polyline(&[PointF::new(0.0, 0.0), PointF::new(10.0, 0.0)]);
        path.move_to(PointF::new(0.0, 50.0));
        path.line_to(PointF::new(100.0, 50.0));
        assert_eq!(PathMeasure::new(&path).length(), 10.0);
    }

    #[test]
    fn straight_cubic_flattens_to_its_chord_length() {
        let mut path = ChartPath::new();
        path.move_to(PointF::new(0.0, 0.0));
        path.cubic_to(
            PointF::new(10.0, 0.0),
            PointF::new(20.0, 0.0),
            PointF::new(30.0, 0.0),
        );
        let measure = PathMeasure::new(&path);
        assert!((measure.length() - 30.0).abs() <= 1e-9);
    }

    #[test]
    fn empty_path_has_no_positions() {
        let measure = PathMeasure::new(&ChartPath::new());
        assert_eq!(measure.length(), 0.0);
        assert!(measure.position_at(0.0).is_none());
    }
}
