use std::cell::RefCell;
use std::rc::Rc;

use livechart::ChartError;
use livechart::LiveChart;
use livechart::core::{ChartBounds, DataPoint, Dataset};
use livechart::extensions::{ChartPlugin, PluginContext, PluginEvent, TouchCallback};
use livechart::interaction::PointerEvent;
use livechart::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<PluginEvent>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<PluginEvent>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, _context: PluginContext) {
        self.events.borrow_mut().push(event);
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::DatasetUpdated { .. } => "dataset",
        PluginEvent::SecondDatasetUpdated { .. } => "second_dataset",
        PluginEvent::StyleUpdated => "style",
        PluginEvent::DrawModesUpdated => "draw_modes",
        PluginEvent::BoundsResized { .. } => "resize",
        PluginEvent::TouchMoved { .. } => "touch_move",
        PluginEvent::TouchFinished => "touch_finished",
        PluginEvent::Rendered => "rendered",
    }
}

fn chart() -> LiveChart<NullRenderer> {
    LiveChart::new(
        NullRenderer::default(),
        ChartBounds::new(0.0, 0.0, 100.0, 100.0),
    )
    .expect("chart init")
}

fn diagonal() -> Dataset {
    Dataset::new(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)])
        .expect("valid dataset")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.set_dataset(diagonal()).expect("set dataset");
    chart
        .set_bounds(ChartBounds::new(0.0, 0.0, 200.0, 100.0))
        .expect("resize");
    chart
        .handle_pointer(PointerEvent::Down(100.0))
        .expect("pointer down");
    chart.handle_pointer(PointerEvent::Up).expect("pointer up");
    chart.render().expect("render");

    let kinds: Vec<&str> = events.borrow().iter().map(event_kind).collect();
    assert_eq!(
        kinds,
        vec!["dataset", "resize", "touch_move", "touch_finished", "rendered"]
    );
    assert_eq!(
        events.borrow()[0],
        PluginEvent::DatasetUpdated { points_len: 2 }
    );
}

#[test]
fn debounced_and_missed_moves_emit_nothing() {
    let mut chart = chart();
    chart.set_dataset(diagonal()).expect("set dataset");
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart
        .handle_pointer(PointerEvent::Down(10.0))
        .expect("pointer down");
    chart
        .handle_pointer(PointerEvent::Move(10.2))
        .expect("pointer move");
    chart
        .handle_pointer(PointerEvent::Move(400.0))
        .expect("pointer move");

    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn touch_callback_receives_data_points() {
    let mut chart = chart();
    chart.set_dataset(diagonal()).expect("set dataset");

    let touched = Rc::new(RefCell::new(Vec::<DataPoint>::new()));
    let finished = Rc::new(RefCell::new(0_usize));
    let touched_sink = touched.clone();
    let finished_sink = finished.clone();
    chart
        .register_plugin(Box::new(TouchCallback::new(
            "touch",
            move |point| touched_sink.borrow_mut().push(point),
            move || *finished_sink.borrow_mut() += 1,
        )))
        .expect("register callback");

    chart
        .handle_pointer(PointerEvent::Down(25.0))
        .expect("pointer down");
    chart
        .handle_pointer(PointerEvent::Cancel)
        .expect("pointer cancel");

    let touched = touched.borrow();
    assert_eq!(touched.len(), 1);
    assert!((touched[0].x - 2.5).abs() <= 1e-6);
    assert!((touched[0].y - 2.5).abs() <= 1e-6);
    assert_eq!(*finished.borrow(), 1);
}

#[test]
fn plugin_registry_rejects_duplicate_and_empty_ids() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::<PluginEvent>::new()));

    chart
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("first registration");
    let err = chart
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect_err("duplicate id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = chart
        .register_plugin(Box::new(RecordingPlugin::new("", events)))
        .expect_err("empty id");
    assert!(matches!(err, ChartError::InvalidData(_)));

    assert_eq!(chart.plugin_count(), 1);
    assert!(chart.has_plugin("a"));
    assert!(chart.unregister_plugin("a"));
    assert!(!chart.unregister_plugin("a"));
    assert_eq!(chart.plugin_count(), 0);
}
