//! Hooks for host code that observes the chart.

mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent, TouchCallback};
