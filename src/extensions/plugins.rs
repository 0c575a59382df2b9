use serde::{Deserialize, Serialize};

use crate::core::{ChartBounds, DataPoint};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub bounds: ChartBounds,
    pub points_len: usize,
    pub second_points_len: usize,
    pub touch_tracking: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    DatasetUpdated { points_len: usize },
    SecondDatasetUpdated { points_len: usize },
    StyleUpdated,
    DrawModesUpdated,
    BoundsResized { width: f64, height: f64 },
    /// Pointer resolved to a data point on the main path.
    TouchMoved { x: f64, y: f64 },
    TouchFinished,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read chart context without mutating chart
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}

/// Plugin forwarding touch events to two closures.
pub struct TouchCallback<F, G>
where
    F: FnMut(DataPoint),
    G: FnMut(),
{
    id: String,
    on_touch: F,
    on_touch_finished: G,
}

impl<F, G> TouchCallback<F, G>
where
    F: FnMut(DataPoint),
    G: FnMut(),
{
    #[must_use]
    pub fn new(id: impl Into<String>, on_touch: F, on_touch_finished: G) -> Self {
        Self {
            id: id.into(),
            on_touch,
            on_touch_finished,
        }
    }
}

impl<F, G> ChartPlugin for TouchCallback<F, G>
where
    F: FnMut(DataPoint),
    G: FnMut(),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
        match event {
            PluginEvent::TouchMoved { x, y } => (self.on_touch)(DataPoint::new(x, y)),
            PluginEvent::TouchFinished => (self.on_touch_finished)(),
            _ => {}
        }
    }
}
