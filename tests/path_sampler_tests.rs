use approx::assert_relative_eq;
use livechart::core::{
    ChartPath, MAX_TABLE_COLUMNS, PathCoordinateTable, PathMeasure, PointF, TouchResolvePolicy,
    pointer_column, smooth_path_through,
};

fn horizontal_line(width: f64, y: f64) -> ChartPath {
    ChartPath::polyline(&[PointF::new(0.0, y), PointF::new(width, y)])
}

#[test]
fn horizontal_path_samples_constant_y_with_monotonic_x() {
    let table = PathCoordinateTable::build(&horizontal_line(250.0, 5.0), 250.0);

    assert_eq!(table.len(), 251);
    for entry in table.entries() {
        assert_relative_eq!(entry.y, 5.0, epsilon = 1e-9);
    }
    assert!(
        table
            .entries()
            .windows(2)
            .all(|pair| pair[0].x <= pair[1].x)
    );
    assert_relative_eq!(table.entries()[0].x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(table.entries()[250].x, 250.0, epsilon = 1e-9);
}

#[test]
fn fractional_width_is_floored_to_whole_columns() {
    let table = PathCoordinateTable::build(&horizontal_line(100.0, 1.0), 100.9);
    assert_eq!(table.len(), 101);
}

#[test]
fn empty_path_or_width_yields_empty_table() {
    assert!(PathCoordinateTable::build(&ChartPath::new(), 100.0).is_empty());
    assert!(PathCoordinateTable::build(&horizontal_line(10.0, 1.0), 0.0).is_empty());
    assert!(PathCoordinateTable::build(&horizontal_line(10.0, 1.0), f64::NAN).is_empty());
}

#[test]
fn first_match_misses_columns_the_path_never_reaches() {
    let table = PathCoordinateTable::build(&horizontal_line(100.0, 5.0), 100.0);

    let hit = table
        .resolve(42, TouchResolvePolicy::FirstMatch)
        .expect("column on the path");
    assert_relative_eq!(hit.x, 42.0, epsilon = 1e-9);
    assert!(table.resolve(150, TouchResolvePolicy::FirstMatch).is_none());
    assert!(table.resolve(-3, TouchResolvePolicy::FirstMatch).is_none());
}

#[test]
fn closest_policy_always_resolves() {
    let table = PathCoordinateTable::build(&horizontal_line(100.0, 5.0), 100.0);

    let right = table
        .resolve(150, TouchResolvePolicy::Closest)
        .expect("closest entry");
    assert_relative_eq!(right.x, 100.0, epsilon = 1e-9);

    let left = table
        .resolve(-3, TouchResolvePolicy::Closest)
        .expect("closest entry");
    assert_relative_eq!(left.x, 0.0, epsilon = 1e-9);
}

#[test]
fn curved_path_samples_follow_arc_length() {
    let path = smooth_path_through(&[
        PointF::new(0.0, 100.0),
        PointF::new(50.0, 20.0),
        PointF::new(100.0, 80.0),
        PointF::new(150.0, 0.0),
    ])
    .expect("smooth path");
    let measure = PathMeasure::new(&path);
    let table = PathCoordinateTable::from_measure(&measure, 150.0);

    assert_eq!(table.len(), 151);
    let first = table.get(0).expect("first entry");
    let last = table.get(150).expect("last entry");
    assert_relative_eq!(first.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(first.y, 100.0, epsilon = 1e-6);
    assert_relative_eq!(last.x, 150.0, epsilon = 1e-6);
    assert_relative_eq!(last.y, 0.0, epsilon = 1e-6);
    assert!(measure.length() > 150.0);
}

#[test]
fn path_measure_interpolates_along_polyline() {
    let path = ChartPath::polyline(&[
        PointF::new(0.0, 0.0),
        PointF::new(30.0, 40.0),
        PointF::new(60.0, 0.0),
    ]);
    let measure = PathMeasure::new(&path);

    assert_relative_eq!(measure.length(), 100.0, epsilon = 1e-9);
    let middle = measure.position_at(50.0).expect("position");
    assert_relative_eq!(middle.x, 30.0, epsilon = 1e-9);
    assert_relative_eq!(middle.y, 40.0, epsilon = 1e-9);

    let clamped = measure.position_at(500.0).expect("clamped position");
    assert_relative_eq!(clamped.x, 60.0, epsilon = 1e-9);
}

#[test]
fn pointer_column_rounds_to_nearest_pixel() {
    assert_eq!(pointer_column(10.4), 10);
    assert_eq!(pointer_column(10.6), 11);
    assert_eq!(pointer_column(-0.4), 0);
}

#[test]
fn boundary_columns_resolve_under_both_policies() {
    let table = PathCoordinateTable::build(&horizontal_line(100.0, 5.0), 100.0);

    for policy in [TouchResolvePolicy::FirstMatch, TouchResolvePolicy::Closest] {
        let right = table.resolve(100, policy).expect("rightmost column");
        assert_relative_eq!(right.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(right.y, 5.0, epsilon = 1e-9);

        let left = table.resolve(0, policy).expect("leftmost column");
        assert_relative_eq!(left.x, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn oversized_width_yields_empty_table() {
    let path = horizontal_line(10.0, 1.0);
    assert!(PathCoordinateTable::build(&path, 1e12).is_empty());
    assert_eq!(
        PathCoordinateTable::build(&path, MAX_TABLE_COLUMNS as f64).len(),
        MAX_TABLE_COLUMNS + 1
    );
}
