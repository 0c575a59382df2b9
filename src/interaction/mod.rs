use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, PointF, TouchResolvePolicy};

/// Pointer input translated by the host from platform gesture callbacks.
///
/// `Down` and `Move` carry the raw pointer X in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(f64),
    Move(f64),
    Up,
    Cancel,
    Leave,
}

impl PointerEvent {
    #[must_use]
    pub fn pointer_x(self) -> Option<f64> {
        match self {
            Self::Down(x) | Self::Move(x) => Some(x),
            Self::Up | Self::Cancel | Self::Leave => None,
        }
    }
}

/// Point currently marked by the touch indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub column: i64,
    pub pixel: PointF,
    pub data_point: DataPoint,
}

/// Result of feeding one pointer event to the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TouchOutcome {
    /// The pointer moved to a new column that resolved to a path sample.
    Tracked(TouchSample),
    /// Same column as the previous query; nothing was recomputed.
    Unchanged,
    /// No sample matched the column; the previous report stays displayed.
    Missed { column: i64 },
    /// The gesture ended. `indicator_visible` is true in always-display mode.
    Finished { indicator_visible: bool },
    /// Touch tracking is disabled or there is nothing to track.
    Ignored,
}

/// Touch tracking configuration and runtime state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchState {
    overlay_disabled: bool,
    always_display: bool,
    policy: TouchResolvePolicy,
    last_column: Option<i64>,
    tracking: bool,
    indicator: Option<TouchSample>,
}

impl TouchState {
    #[must_use]
    pub fn overlay_enabled(self) -> bool {
        !self.overlay_disabled
    }

    pub fn set_overlay_enabled(&mut self, enabled: bool) {
        self.overlay_disabled = !enabled;
        if !enabled {
            self.reset();
        }
    }

    #[must_use]
    pub fn always_display(self) -> bool {
        self.always_display
    }

    pub fn set_always_display(&mut self, always_display: bool) {
        self.always_display = always_display;
    }

    #[must_use]
    pub fn policy(self) -> TouchResolvePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: TouchResolvePolicy) {
        self.policy = policy;
        self.last_column = None;
    }

    #[must_use]
    pub fn is_tracking(self) -> bool {
        self.tracking
    }

    #[must_use]
    pub fn last_column(self) -> Option<i64> {
        self.last_column
    }

    /// Sample the indicator should show, if any.
    #[must_use]
    pub fn visible_indicator(self) -> Option<TouchSample> {
        if self.tracking || self.always_display {
            self.indicator
        } else {
            None
        }
    }

    /// Records the queried column. Returns `false` when it repeats the last one.
    pub fn enter_column(&mut self, column: i64) -> bool {
        self.tracking = true;
        if self.last_column == Some(column) {
            return false;
        }
        self.last_column = Some(column);
        true
    }

    pub fn show(&mut self, sample: TouchSample) {
        self.indicator = Some(sample);
    }

    /// Ends the gesture and reports whether the indicator remains visible.
    pub fn finish(&mut self) -> bool {
        self.tracking = false;
        self.last_column = None;
        self.always_display && self.indicator.is_some()
    }

    /// Drops every sample, used when the coordinate table is rebuilt.
    pub fn reset(&mut self) {
        self.tracking = false;
        self.last_column = None;
        self.indicator = None;
    }
}
