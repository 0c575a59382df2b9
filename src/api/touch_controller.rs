use tracing::{debug, trace};

use crate::core::{
    CoordinateMapper, DataPoint, PathCoordinateTable, TouchResolvePolicy, ensure_finite,
    pointer_column,
};
use crate::error::ChartResult;
use crate::extensions::PluginEvent;
use crate::interaction::{PointerEvent, TouchOutcome, TouchSample};
use crate::render::Renderer;

use super::LiveChart;
use super::chart::TouchModel;
use super::render_planner::{PlanInput, resolve_geometry};

impl<R: Renderer> LiveChart<R> {
    /// Sampled main path used for touch lookups, if the chart is drawable.
    #[must_use]
    pub fn coordinate_table(&self) -> Option<&PathCoordinateTable> {
        self.touch_model.as_ref().map(|model| &model.table)
    }

    /// Mapper for the current state, if the chart is drawable.
    #[must_use]
    pub fn mapper(&self) -> Option<CoordinateMapper> {
        self.touch_model.as_ref().map(|model| model.mapper)
    }

    /// Keeps the indicator on screen after the gesture ends.
    pub fn set_touch_overlay_always(&mut self, always_display: bool) {
        self.touch.set_always_display(always_display);
    }

    /// Turns touch handling off; pointer events are ignored until re-enabled.
    pub fn disable_touch_overlay(&mut self) {
        self.touch.set_overlay_enabled(false);
    }

    pub fn enable_touch_overlay(&mut self) {
        self.touch.set_overlay_enabled(true);
    }

    /// Places the indicator at the path sample closest to data value `x`.
    ///
    /// The position is kept and re-applied after every geometry rebuild
    /// until the next `set_dataset`. No touch callbacks are emitted.
    pub fn set_initial_touch_position(&mut self, x: f64) -> ChartResult<()> {
        let x = ensure_finite(x, "initial touch x")?;
        self.initial_touch_x = Some(x);
        self.apply_initial_touch_position();
        Ok(())
    }

    /// Feeds one pointer event through the touch pipeline.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<TouchOutcome> {
        if !self.touch.overlay_enabled() {
            return Ok(TouchOutcome::Ignored);
        }

        let Some(pointer_x) = event.pointer_x() else {
            let indicator_visible = self.touch.finish();
            trace!(?event, indicator_visible, "touch finished");
            self.emit_plugin_event(PluginEvent::TouchFinished);
            return Ok(TouchOutcome::Finished { indicator_visible });
        };
        let pointer_x = ensure_finite(pointer_x, "pointer x")?;

        let Some(model) = self.touch_model.as_ref() else {
            return Ok(TouchOutcome::Ignored);
        };

        let column = pointer_column(pointer_x);
        if !self.touch.enter_column(column) {
            return Ok(TouchOutcome::Unchanged);
        }

        let Some(pixel) = model.table.resolve(column, self.touch.policy()) else {
            trace!(column, "touch column has no sample");
            return Ok(TouchOutcome::Missed { column });
        };

        let sample = TouchSample {
            column,
            pixel,
            data_point: model.mapper.pixels_to_point(pixel),
        };
        self.touch.show(sample);
        trace!(
            column,
            x = sample.data_point.x,
            y = sample.data_point.y,
            "touch moved"
        );
        self.emit_plugin_event(PluginEvent::TouchMoved {
            x: sample.data_point.x,
            y: sample.data_point.y,
        });
        Ok(TouchOutcome::Tracked(sample))
    }

    /// Recomputes geometry and publishes a fresh coordinate table.
    pub(super) fn rebuild_touch_model(&mut self) -> ChartResult<()> {
        let input = PlanInput {
            bounds: self.bounds,
            dataset: &self.dataset,
            second_dataset: self.second_dataset.as_ref(),
            style: &self.style,
            modes: self.modes,
        };
        let model = resolve_geometry(&input)?.map(|geometry| TouchModel {
            table: PathCoordinateTable::build(
                &geometry.main_path,
                geometry.mapper.available_width(),
            ),
            mapper: geometry.mapper,
        });
        debug!(
            entries = model.as_ref().map_or(0, |model| model.table.len()),
            "rebuilt touch coordinate table"
        );

        self.touch_model = model;
        self.touch.reset();
        self.apply_initial_touch_position();
        Ok(())
    }

    fn apply_initial_touch_position(&mut self) {
        let (Some(x), Some(model)) = (self.initial_touch_x, self.touch_model.as_ref()) else {
            return;
        };
        let target = model.mapper.point_to_pixels(DataPoint::new(x, 0.0)).x;
        let column = pointer_column(target);
        let Some(pixel) = model.table.resolve(column, TouchResolvePolicy::Closest) else {
            return;
        };
        self.touch.show(TouchSample {
            column,
            pixel,
            data_point: model.mapper.pixels_to_point(pixel),
        });
    }
}
