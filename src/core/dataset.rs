use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::DataPoint;
use crate::error::ChartResult;

/// Ordered chart samples with bounds cached at construction.
///
/// Bounds only consider points with `x >= 0`. A dataset whose bounds collapse
/// to one value gets its upper bound nudged by [`flat_range_increment`] so the
/// vertical range is never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<DataPoint>,
    upper_bound: f64,
    lower_bound: f64,
}

impl Dataset {
    /// Builds a dataset, rejecting non-finite points.
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        for point in &points {
            point.validate()?;
        }

        let (lower_bound, mut upper_bound) = raw_bounds(&points);
        let has_data = points.iter().any(|point| point.x > 0.0);
        if has_data && lower_bound == upper_bound {
            let increment = flat_range_increment(upper_bound);
            trace!(bound = upper_bound, increment, "nudging flat dataset upper bound");
            upper_bound += increment;
        }

        Ok(Self {
            points,
            upper_bound,
            lower_bound,
        })
    }

    /// Placeholder dataset holding the single point `(0, 0)`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: vec![DataPoint::new(0.0, 0.0)],
            upper_bound: 0.0,
            lower_bound: 0.0,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` when at least one point lies strictly right of the origin.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.points.iter().any(|point| point.x > 0.0)
    }

    #[must_use]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub fn first(&self) -> Option<DataPoint> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<DataPoint> {
        self.points.last().copied()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}

fn raw_bounds(points: &[DataPoint]) -> (f64, f64) {
    let in_range = || points.iter().filter(|point| point.x >= 0.0);
    let lower = in_range()
        .map(|point| OrderedFloat(point.y))
        .min()
        .map_or(0.0, |value| value.0);
    let upper = in_range()
        .map(|point| OrderedFloat(point.y))
        .max()
        .map_or(0.0, |value| value.0);
    (lower, upper)
}

/// Increment added to the upper bound of a flat dataset.
///
/// Starting from `0.1`, the increment shrinks tenfold for every decade the
/// bound's magnitude sits below `1.0`; a zero bound keeps `0.1`.
#[must_use]
pub fn flat_range_increment(bound: f64) -> f64 {
    let mut working = bound.abs();
    let mut increment = 0.1;
    if working == 0.0 {
        return increment;
    }
    while working < 1.0 {
        working *= 10.0;
        increment *= 0.1;
    }
    increment
}

#[cfg(test)]
mod tests {
    use super::flat_range_increment;

    #[test]
    fn increment_is_a_tenth_for_bounds_at_or_above_one() {
        assert_eq!(flat_range_increment(1.0), 0.1);
        assert_eq!(flat_range_increment(50.0), 0.1);
        assert_eq!(flat_range_increment(-50.0), 0.1);
    }

    #[test]
    fn increment_shrinks_per_decade_below_one() {
        let expected = 0.1 * 0.1 * 0.1;
        assert_eq!(flat_range_increment(0.05), expected);
        assert_eq!(flat_range_increment(0.5), 0.1 * 0.1);
    }

    #[test]
    fn zero_bound_keeps_default_increment() {
        assert_eq!(flat_range_increment(0.0), 0.1);
    }
}
