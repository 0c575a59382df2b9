use approx::assert_relative_eq;
use livechart::core::{ChartBounds, DataPoint, Dataset, TouchResolvePolicy};
use livechart::interaction::{PointerEvent, TouchOutcome};
use livechart::render::NullRenderer;
use livechart::{ChartError, LiveChart};

fn diagonal_chart() -> LiveChart<NullRenderer> {
    let mut chart = LiveChart::new(
        NullRenderer::default(),
        ChartBounds::new(0.0, 0.0, 100.0, 100.0),
    )
    .expect("chart init");
    let dataset = Dataset::new(vec![DataPoint::new(0.0, 0.0), DataPoint::new(10.0, 10.0)])
        .expect("valid dataset");
    chart.set_dataset(dataset).expect("set dataset");
    chart
}

#[test]
fn pointer_down_resolves_data_point_under_column() {
    let mut chart = diagonal_chart();

    let outcome = chart
        .handle_pointer(PointerEvent::Down(50.4))
        .expect("pointer down");
    let TouchOutcome::Tracked(sample) = outcome else {
        panic!("expected tracked sample, got {outcome:?}");
    };
    assert_eq!(sample.column, 50);
    assert_relative_eq!(sample.pixel.x, 50.0, epsilon = 1e-6);
    assert_relative_eq!(sample.pixel.y, 50.0, epsilon = 1e-6);
    assert_relative_eq!(sample.data_point.x, 5.0, epsilon = 1e-6);
    assert_relative_eq!(sample.data_point.y, 5.0, epsilon = 1e-6);
    assert!(chart.touch_state().is_tracking());
}

#[test]
fn repeated_column_is_debounced() {
    let mut chart = diagonal_chart();
    chart
        .handle_pointer(PointerEvent::Down(20.0))
        .expect("pointer down");

    let outcome = chart
        .handle_pointer(PointerEvent::Move(20.3))
        .expect("pointer move");
    assert_eq!(outcome, TouchOutcome::Unchanged);

    let outcome = chart
        .handle_pointer(PointerEvent::Move(21.0))
        .expect("pointer move");
    assert!(matches!(outcome, TouchOutcome::Tracked(sample) if sample.column == 21));
}

#[test]
fn miss_keeps_previous_indicator_with_first_match_policy() {
    let mut chart = diagonal_chart();
    chart
        .handle_pointer(PointerEvent::Down(30.0))
        .expect("pointer down");

    let outcome = chart
        .handle_pointer(PointerEvent::Move(180.0))
        .expect("pointer move");
    assert_eq!(outcome, TouchOutcome::Missed { column: 180 });

    let indicator = chart
        .touch_state()
        .visible_indicator()
        .expect("previous sample stays visible");
    assert_eq!(indicator.column, 30);
}

#[test]
fn closest_policy_resolves_outside_the_path() {
    let mut chart = diagonal_chart();
    chart.set_touch_resolve_policy(TouchResolvePolicy::Closest);

    let outcome = chart
        .handle_pointer(PointerEvent::Down(180.0))
        .expect("pointer down");
    let TouchOutcome::Tracked(sample) = outcome else {
        panic!("expected tracked sample, got {outcome:?}");
    };
    assert_relative_eq!(sample.data_point.x, 10.0, epsilon = 1e-6);
    assert_relative_eq!(sample.data_point.y, 10.0, epsilon = 1e-6);
}

#[test]
fn gesture_end_hides_indicator_unless_always_displayed() {
    let mut chart = diagonal_chart();
    chart
        .handle_pointer(PointerEvent::Down(40.0))
        .expect("pointer down");
    let outcome = chart.handle_pointer(PointerEvent::Up).expect("pointer up");
    assert_eq!(
        outcome,
        TouchOutcome::Finished {
            indicator_visible: false
        }
    );
    assert!(chart.touch_state().visible_indicator().is_none());
    let plan = chart.build_render_plan().expect("plan");
    assert!(plan.touch_indicator.is_none());

    chart.set_touch_overlay_always(true);
    chart
        .handle_pointer(PointerEvent::Down(60.0))
        .expect("pointer down");
    let outcome = chart
        .handle_pointer(PointerEvent::Leave)
        .expect("pointer leave");
    assert_eq!(
        outcome,
        TouchOutcome::Finished {
            indicator_visible: true
        }
    );
    let plan = chart.build_render_plan().expect("plan");
    let indicator = plan.touch_indicator.expect("indicator kept");
    assert_relative_eq!(indicator.line.x1, 60.0, epsilon = 1e-6);
    assert_relative_eq!(indicator.circle.center_y, 40.0, epsilon = 1e-6);
}

#[test]
fn disabled_overlay_ignores_pointer_events() {
    let mut chart = diagonal_chart();
    chart.disable_touch_overlay();

    assert_eq!(
        chart
            .handle_pointer(PointerEvent::Down(50.0))
            .expect("pointer down"),
        TouchOutcome::Ignored
    );
    assert_eq!(
        chart.handle_pointer(PointerEvent::Up).expect("pointer up"),
        TouchOutcome::Ignored
    );

    chart.enable_touch_overlay();
    assert!(matches!(
        chart
            .handle_pointer(PointerEvent::Down(50.0))
            .expect("pointer down"),
        TouchOutcome::Tracked(_)
    ));
}

#[test]
fn chart_without_data_ignores_pointer() {
    let mut chart = LiveChart::new(
        NullRenderer::default(),
        ChartBounds::new(0.0, 0.0, 100.0, 100.0),
    )
    .expect("chart init");

    assert!(chart.coordinate_table().is_none());
    assert_eq!(
        chart
            .handle_pointer(PointerEvent::Move(10.0))
            .expect("pointer move"),
        TouchOutcome::Ignored
    );
}

#[test]
fn non_finite_pointer_is_rejected() {
    let mut chart = diagonal_chart();
    let err = chart
        .handle_pointer(PointerEvent::Move(f64::NAN))
        .expect_err("nan pointer");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn initial_touch_position_shows_indicator_in_always_display_mode() {
    let mut chart = diagonal_chart();
    chart.set_touch_overlay_always(true);
    chart
        .set_initial_touch_position(3.0)
        .expect("initial position");

    let indicator = chart
        .build_render_plan()
        .expect("plan")
        .touch_indicator
        .expect("indicator");
    assert_relative_eq!(indicator.data_point.x, 3.0, epsilon = 1e-6);
    assert_relative_eq!(indicator.data_point.y, 3.0, epsilon = 1e-6);

    chart
        .set_bounds(ChartBounds::new(0.0, 0.0, 200.0, 100.0))
        .expect("resize");
    let indicator = chart
        .build_render_plan()
        .expect("plan")
        .touch_indicator
        .expect("indicator survives resize");
    assert_relative_eq!(indicator.line.x1, 60.0, epsilon = 1e-6);
}

#[test]
fn table_is_rebuilt_when_bounds_change() {
    let mut chart = diagonal_chart();
    assert_eq!(chart.coordinate_table().map(|table| table.len()), Some(101));

    chart
        .set_bounds(ChartBounds::new(0.0, 0.0, 300.0, 100.0))
        .expect("resize");
    assert_eq!(chart.coordinate_table().map(|table| table.len()), Some(301));

    chart
        .set_bounds(ChartBounds::new(0.0, 0.0, 0.0, 0.0))
        .expect("collapse");
    assert!(chart.coordinate_table().is_none());
}

#[test]
fn offset_series_resolves_touches_across_the_plot() {
    let mut chart = LiveChart::new(
        NullRenderer::default(),
        ChartBounds::new(0.0, 0.0, 400.0, 300.0),
    )
    .expect("chart init");
    let dataset = Dataset::new(vec![DataPoint::new(10.0, 1.0), DataPoint::new(20.0, 21.0)])
        .expect("valid dataset");
    chart.set_dataset(dataset).expect("set dataset");

    let outcome = chart
        .handle_pointer(PointerEvent::Down(200.0))
        .expect("pointer down");
    let TouchOutcome::Tracked(sample) = outcome else {
        panic!("expected tracked sample, got {outcome:?}");
    };
    assert_relative_eq!(sample.data_point.x, 15.0, epsilon = 1e-6);
    assert_relative_eq!(sample.data_point.y, 11.0, epsilon = 1e-6);
}

#[test]
fn rightmost_column_resolves_under_both_policies() {
    for policy in [TouchResolvePolicy::FirstMatch, TouchResolvePolicy::Closest] {
        let mut chart = diagonal_chart();
        chart.set_touch_resolve_policy(policy);

        let outcome = chart
            .handle_pointer(PointerEvent::Down(100.0))
            .expect("pointer down");
        let TouchOutcome::Tracked(sample) = outcome else {
            panic!("expected tracked sample for {policy:?}, got {outcome:?}");
        };
        assert_eq!(sample.column, 100);
        assert_relative_eq!(sample.data_point.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(sample.data_point.y, 10.0, epsilon = 1e-6);

        let outcome = chart
            .handle_pointer(PointerEvent::Move(0.0))
            .expect("pointer move");
        assert!(
            matches!(outcome, TouchOutcome::Tracked(sample) if sample.data_point.x.abs() <= 1e-6),
            "leftmost column for {policy:?}: {outcome:?}"
        );
    }
}

#[test]
fn oversized_host_bounds_are_rejected() {
    let mut chart = diagonal_chart();
    let err = chart
        .set_bounds(ChartBounds::new(0.0, 0.0, 1e12, 100.0))
        .expect_err("absurd width");
    assert!(matches!(err, ChartError::InvalidBounds { .. }));
    assert_eq!(chart.coordinate_table().map(|table| table.len()), Some(101));
}
