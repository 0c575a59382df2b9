use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{ChartBounds, CoordinateMapper, Dataset, PathCoordinateTable, TouchResolvePolicy};
use crate::error::ChartResult;
use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
use crate::interaction::TouchState;
use crate::render::{CirclePrimitive, LinePrimitive, RenderPlan, Renderer, TouchIndicator};

use super::render_planner::{PlanInput, plan_chart};
use super::validation::{validate_draw_modes, validate_host_bounds, validate_style};
use super::{DrawMode, DrawModes, LiveChartStyle};

/// Mapper and sampled main path published together after a rebuild.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TouchModel {
    pub(super) mapper: CoordinateMapper,
    pub(super) table: PathCoordinateTable,
}

/// Line chart facade owning data, style, draw modes and touch state.
///
/// Every mutation that affects geometry rebuilds the touch coordinate table
/// before returning, so pointer queries never see stale samples.
pub struct LiveChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) bounds: ChartBounds,
    pub(super) dataset: Dataset,
    pub(super) second_dataset: Option<Dataset>,
    pub(super) style: LiveChartStyle,
    pub(super) modes: DrawModes,
    pub(super) touch: TouchState,
    pub(super) touch_model: Option<TouchModel>,
    pub(super) initial_touch_x: Option<f64>,
    pub(super) plugins: IndexMap<String, Box<dyn ChartPlugin>>,
}

impl<R: Renderer> LiveChart<R> {
    /// Creates a chart over the empty dataset.
    pub fn new(renderer: R, bounds: ChartBounds) -> ChartResult<Self> {
        let bounds = validate_host_bounds(bounds)?;
        Ok(Self {
            renderer,
            bounds,
            dataset: Dataset::empty(),
            second_dataset: None,
            style: LiveChartStyle::default(),
            modes: DrawModes::default(),
            touch: TouchState::default(),
            touch_model: None,
            initial_touch_x: None,
            plugins: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn bounds(&self) -> ChartBounds {
        self.bounds
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn second_dataset(&self) -> Option<&Dataset> {
        self.second_dataset.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> &LiveChartStyle {
        &self.style
    }

    #[must_use]
    pub fn draw_modes(&self) -> DrawModes {
        self.modes
    }

    #[must_use]
    pub fn touch_state(&self) -> TouchState {
        self.touch
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Replaces the main dataset.
    ///
    /// Draw modes return to their defaults and the second dataset is cleared.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        debug!(
            points_len = dataset.len(),
            has_data = dataset.has_data(),
            upper_bound = dataset.upper_bound(),
            lower_bound = dataset.lower_bound(),
            "set dataset"
        );
        let points_len = dataset.len();
        self.dataset = dataset;
        self.second_dataset = None;
        self.modes = DrawModes::default();
        self.initial_touch_x = None;
        self.rebuild_touch_model()?;
        self.emit_plugin_event(PluginEvent::DatasetUpdated { points_len });
        Ok(())
    }

    /// Sets a comparison dataset drawn behind the main series.
    pub fn set_second_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        debug!(points_len = dataset.len(), "set second dataset");
        let points_len = dataset.len();
        self.second_dataset = Some(dataset);
        self.rebuild_touch_model()?;
        self.emit_plugin_event(PluginEvent::SecondDatasetUpdated { points_len });
        Ok(())
    }

    pub fn clear_second_dataset(&mut self) -> ChartResult<()> {
        if self.second_dataset.take().is_some() {
            self.rebuild_touch_model()?;
            self.emit_plugin_event(PluginEvent::SecondDatasetUpdated { points_len: 0 });
        }
        Ok(())
    }

    pub fn set_style(&mut self, style: LiveChartStyle) -> ChartResult<()> {
        self.style = validate_style(style)?;
        self.rebuild_touch_model()?;
        self.emit_plugin_event(PluginEvent::StyleUpdated);
        Ok(())
    }

    pub fn set_draw_modes(&mut self, modes: DrawModes) -> ChartResult<()> {
        self.modes = validate_draw_modes(modes)?;
        self.rebuild_touch_model()?;
        self.emit_plugin_event(PluginEvent::DrawModesUpdated);
        Ok(())
    }

    /// Applies one option on top of the current draw modes.
    pub fn apply_draw_mode(&mut self, mode: DrawMode) -> ChartResult<()> {
        self.set_draw_modes(self.modes.with(mode))
    }

    /// Updates the drawable area after a host resize.
    pub fn set_bounds(&mut self, bounds: ChartBounds) -> ChartResult<()> {
        let bounds = validate_host_bounds(bounds)?;
        if bounds == self.bounds {
            return Ok(());
        }
        self.bounds = bounds;
        self.rebuild_touch_model()?;
        self.emit_plugin_event(PluginEvent::BoundsResized {
            width: bounds.end,
            height: bounds.bottom,
        });
        Ok(())
    }

    /// Builds the scene for the current state, including touch feedback.
    pub fn build_render_plan(&self) -> ChartResult<RenderPlan> {
        let input = PlanInput {
            bounds: self.bounds,
            dataset: &self.dataset,
            second_dataset: self.second_dataset.as_ref(),
            style: &self.style,
            modes: self.modes,
        };
        let mut plan = plan_chart(&input)?;
        if plan.main_path.is_some() {
            plan.touch_indicator = self.touch_indicator();
        }
        Ok(plan)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let plan = self.build_render_plan()?;
        if let Err(err) = self.renderer.render(&plan) {
            warn!(error = %err, "renderer rejected plan");
            return Err(err);
        }
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    fn touch_indicator(&self) -> Option<TouchIndicator> {
        if !self.touch.overlay_enabled() {
            return None;
        }
        let sample = self.touch.visible_indicator()?;
        Some(TouchIndicator {
            line: LinePrimitive::new(
                sample.pixel.x,
                self.bounds.top,
                sample.pixel.x,
                self.bounds.bottom,
                self.style.overlay_line_width,
                self.style.overlay_line_color,
            ),
            circle: CirclePrimitive {
                center_x: sample.pixel.x,
                center_y: sample.pixel.y,
                radius: self.style.overlay_circle_diameter / 2.0,
                fill_color: self.style.overlay_circle_color,
            },
            data_point: sample.data_point,
        })
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            bounds: self.bounds,
            points_len: self.dataset.len(),
            second_points_len: self.second_dataset.as_ref().map_or(0, Dataset::len),
            touch_tracking: self.touch.is_tracking(),
        }
    }

    pub fn set_touch_resolve_policy(&mut self, policy: TouchResolvePolicy) {
        self.touch.set_policy(policy);
    }
}
