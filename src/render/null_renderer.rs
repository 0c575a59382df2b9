use crate::error::ChartResult;
use crate::render::{RenderPlan, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates plan content so invalid geometry is caught before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, plan: &RenderPlan) -> ChartResult<()> {
        plan.validate()?;
        self.last_path_count = plan.path_count();
        self.last_line_count = plan.line_count();
        self.last_text_count = plan.text_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
