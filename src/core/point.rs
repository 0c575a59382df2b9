use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Pixel-space working point used while fitting curves.
///
/// The scaled helpers keep the exact operation order of the curve solver, so
/// `a.plus_scaled(2.0, b)` is `a + 2 * b` evaluated component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn plus_scaled(self, factor: f64, other: Self) -> Self {
        Self::new(self.x + factor * other.x, self.y + factor * other.y)
    }

    #[must_use]
    pub fn minus_scaled(self, factor: f64, other: Self) -> Self {
        Self::new(self.x - factor * other.x, self.y - factor * other.y)
    }

    #[must_use]
    pub fn scale_by(self, factor: f64) -> Self {
        Self::new(factor * self.x, factor * self.y)
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for PointF {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus_scaled(1.0, rhs)
    }
}

impl Sub for PointF {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus_scaled(1.0, rhs)
    }
}

impl Mul<f64> for PointF {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale_by(rhs)
    }
}
