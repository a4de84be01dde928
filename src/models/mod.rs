mod chart;
mod datasets;
mod selection;

pub use chart::{
    AxisBinding, AxisSpec, ChartSeries, EventCluster, EventMarker, EventStem, SeriesKind,
    SeriesStyle, TimelineFrame,
};
pub use datasets::Datasets;
pub use selection::{DateWindow, KeySet, SelectionError, SelectionState};
