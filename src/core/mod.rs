pub mod bezier;
pub mod dataset;
pub mod mapper;
pub mod path;
pub mod path_measure;
pub mod point;
pub mod primitives;
pub mod sampler;
pub mod types;

pub use bezier::{SegmentControlPoints, compute_control_points, smooth_path_through};
pub use dataset::{Dataset, flat_range_increment};
pub use mapper::CoordinateMapper;
pub use path::{ChartPath, PathSegment};
pub use path_measure::{DEFAULT_FLATTEN_TOLERANCE, PathMeasure};
pub use point::PointF;
pub use primitives::{
    datetime_to_unix_seconds, decimal_to_f64, ensure_finite, format_label_value,
};
pub use sampler::{MAX_TABLE_COLUMNS, PathCoordinateTable, TouchResolvePolicy, pointer_column};
pub use types::{ChartBounds, DataPoint};
