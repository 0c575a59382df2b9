mod chart;
mod draw_mode;
mod plugin_registry;
mod render_planner;
mod style;
mod touch_controller;
mod validation;

pub use chart::LiveChart;
pub use draw_mode::{DrawMode, DrawModes, YAxisGravity};
pub use render_planner::{ChartGeometry, PlanInput, plan_chart, resolve_geometry};
pub use style::LiveChartStyle;
