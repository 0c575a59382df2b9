//! Natural poly-Bezier fitting.
//!
//! Given knots `k_0..=k_n`, the first control point `c_i0` of every segment
//! solves a tridiagonal system (main diagonal `[2, 4, .., 4, 7]`, sub-diagonal
//! `[1, .., 1, 2]`, super-diagonal all `1`). The second control point follows
//! from C1/C2 continuity, and both ends satisfy natural boundary conditions.
//! Elimination order is fixed (forward sweep ascending, back substitution
//! descending) so identical knots always give bit-identical control points.

use serde::{Deserialize, Serialize};

use crate::core::{ChartPath, PointF};
use crate::error::{ChartError, ChartResult};

/// Control points of one cubic segment between consecutive knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentControlPoints {
    pub first: PointF,
    pub second: PointF,
}

/// Builds a twice-differentiable path through every knot.
///
/// Two knots produce one straight segment.
pub fn smooth_path_through(knots: &[PointF]) -> ChartResult<ChartPath> {
    validate_knots(knots, 2)?;

    let mut path = ChartPath::new();
    path.move_to(knots[0]);
    if knots.len() == 2 {
        path.line_to(knots[1]);
        return Ok(path);
    }

    let controls = solve_control_points(knots);
    for (control, target) in controls.iter().zip(&knots[1..]) {
        path.cubic_to(control.first, control.second, *target);
    }
    Ok(path)
}

/// Solves the control points for `knots.len() - 1` cubic segments.
///
/// Requires at least three knots; two knots are a straight line and have no
/// system to solve.
pub fn compute_control_points(knots: &[PointF]) -> ChartResult<Vec<SegmentControlPoints>> {
    validate_knots(knots, 3)?;
    Ok(solve_control_points(knots))
}

fn validate_knots(knots: &[PointF], minimum: usize) -> ChartResult<()> {
    if knots.len() < minimum {
        return Err(ChartError::InvalidInput(format!(
            "curve fitting needs at least {minimum} knots, got {}",
            knots.len()
        )));
    }
    if let Some(index) = knots.iter().position(|knot| !knot.is_finite()) {
        return Err(ChartError::InvalidInput(format!(
            "knot {index} has non-finite coordinates"
        )));
    }
    Ok(())
}

fn solve_control_points(knots: &[PointF]) -> Vec<SegmentControlPoints> {
    let n = knots.len() - 1;
    let target = target_vector(n, knots);
    let lower = lower_diagonal(n - 1);
    let main = main_diagonal(n);
    let upper = vec![1.0; n - 1];

    // Forward sweep.
    let mut new_upper = vec![0.0; n - 1];
    let mut new_target = vec![PointF::ZERO; n];
    new_upper[0] = upper[0] / main[0];
    new_target[0] = target[0].scale_by(1.0 / main[0]);
    for i in 1..n - 1 {
        new_upper[i] = upper[i] / (main[i] - lower[i - 1] * new_upper[i - 1]);
    }
    for i in 1..n {
        let target_scale = 1.0 / (main[i] - lower[i - 1] * new_upper[i - 1]);
        new_target[i] = target[i]
            .minus_scaled(lower[i - 1], new_target[i - 1])
            .scale_by(target_scale);
    }

    // Back substitution for c_i0.
    let mut first = vec![PointF::ZERO; n];
    first[n - 1] = new_target[n - 1];
    for i in (0..n - 1).rev() {
        first[i] = new_target[i].minus_scaled(new_upper[i], first[i + 1]);
    }

    // c_i1 follows directly.
    let mut second = Vec::with_capacity(n);
    for i in 0..n - 1 {
        second.push(knots[i + 1].scale_by(2.0) - first[i + 1]);
    }
    second.push((knots[n] + first[n - 1]).scale_by(0.5));

    first
        .into_iter()
        .zip(second)
        .map(|(first, second)| SegmentControlPoints { first, second })
        .collect()
}

fn target_vector(n: usize, knots: &[PointF]) -> Vec<PointF> {
    let mut target = Vec::with_capacity(n);
    target.push(knots[0].plus_scaled(2.0, knots[1]));
    for i in 1..n - 1 {
        target.push((knots[i].scale_by(2.0) + knots[i + 1]).scale_by(2.0));
    }
    target.push(knots[n - 1].scale_by(8.0) + knots[n]);
    target
}

fn main_diagonal(n: usize) -> Vec<f64> {
    let mut diagonal = vec![4.0; n];
    diagonal[0] = 2.0;
    diagonal[n - 1] = 7.0;
    diagonal
}

fn lower_diagonal(length: usize) -> Vec<f64> {
    let mut diagonal = vec![1.0; length];
    diagonal[length - 1] = 2.0;
    diagonal
}
