use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-sampling")]
use rayon::prelude::*;

use crate::core::{ChartPath, PathMeasure, PointF};

/// Widest drawable area, in pixel columns, that gets a coordinate table.
pub const MAX_TABLE_COLUMNS: usize = 100_000;

/// How a pointer column is matched against the sampled table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchResolvePolicy {
    /// First entry whose rounded X equals the column. A miss reports nothing.
    #[default]
    FirstMatch,
    /// Entry with the smallest `|x - column|`; earliest entry wins ties.
    Closest,
}

/// Per-pixel-column lookup of path coordinates.
///
/// Entry `i` is the path position at arc length `length * i / width`, for
/// every integer column `i` in `[0, width]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathCoordinateTable {
    entries: Vec<PointF>,
}

impl PathCoordinateTable {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Samples `path` across `chart_width` pixel columns.
    ///
    /// Widths below one column, non-finite or above [`MAX_TABLE_COLUMNS`]
    /// give an empty table.
    #[must_use]
    pub fn build(path: &ChartPath, chart_width: f64) -> Self {
        Self::from_measure(&PathMeasure::new(path), chart_width)
    }

    #[must_use]
    pub fn from_measure(measure: &PathMeasure, chart_width: f64) -> Self {
        if measure.is_empty() || !(1.0..=MAX_TABLE_COLUMNS as f64).contains(&chart_width) {
            return Self::empty();
        }

        let columns = chart_width.floor() as usize;
        let length = measure.length();
        let sample = |column: usize| {
            let normalized = column as f64 / columns as f64;
            measure.position_at(length * normalized)
        };

        #[cfg(feature = "parallel-sampling")]
        let entries = (0..=columns).into_par_iter().filter_map(sample).collect();

        #[cfg(not(feature = "parallel-sampling"))]
        let entries = (0..=columns).filter_map(sample).collect();

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[PointF] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<PointF> {
        self.entries.get(index).copied()
    }

    /// Finds the sampled coordinate for an integer pointer column.
    #[must_use]
    pub fn resolve(&self, column: i64, policy: TouchResolvePolicy) -> Option<PointF> {
        let column = column as f64;
        match policy {
            TouchResolvePolicy::FirstMatch => self
                .entries
                .iter()
                .find(|entry| entry.x.round() == column)
                .copied(),
            TouchResolvePolicy::Closest => self
                .entries
                .iter()
                .min_by_key(|entry| OrderedFloat((entry.x - column).abs()))
                .copied(),
        }
    }
}

/// Rounds a raw pointer X to its pixel column.
#[must_use]
pub fn pointer_column(pointer_x: f64) -> i64 {
    pointer_x.round() as i64
}
