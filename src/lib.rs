//! livechart: headless geometry core for real-time line charts.
//!
//! The crate turns an ordered series of data points into a backend-agnostic
//! [`render::RenderPlan`] (straight or smoothed paths, fills, guidelines and
//! bound labels) and resolves pointer positions back into data space for
//! touch feedback. Actual pixel drawing is left to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DrawMode, DrawModes, LiveChart, LiveChartStyle, YAxisGravity};
pub use error::{ChartError, ChartResult};
