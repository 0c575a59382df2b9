mod null_renderer;
mod plan;
mod primitives;

pub use null_renderer::NullRenderer;
pub use plan::{LastPointTag, RenderPlan, TouchIndicator};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathFill, PathPrimitive,
    RectPrimitive, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderPlan` so
/// drawing code stays isolated from chart geometry and touch handling.
pub trait Renderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()>;
}
