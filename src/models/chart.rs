//! Chart-ready records handed to the render sink.

use serde::Serialize;

use crate::config::AxisScale;
use crate::domain::Event;
use crate::models::DateWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesKind {
    Line,
    Marker,
    Stem,
}

/// Which stacked panel (and therefore which value axis) a series is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AxisBinding {
    Events,
    Macro,
    Markets,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    /// HTML hex colour
    pub color: &'static str,
    pub smooth: bool,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Display label
    pub name: &'static str,
    /// Dataset key the series was read from
    pub key: &'static str,
    pub kind: SeriesKind,
    pub axis: AxisBinding,
    pub style: SeriesStyle,
    pub data: Vec<(i64, Option<f64>)>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Finite values only.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().filter_map(|&(_, v)| v).filter(|v| v.is_finite())
    }

    /// Closest point to `t` by timestamp. Data is chronological.
    pub fn nearest(&self, t: i64) -> Option<(i64, Option<f64>)> {
        if self.data.is_empty() {
            return None;
        }
        let idx = self.data.partition_point(|&(pt, _)| pt < t);
        let after = self.data.get(idx).copied();
        let before = idx.checked_sub(1).and_then(|i| self.data.get(i)).copied();
        match (before, after) {
            (Some(b), Some(a)) => Some(if (t - b.0) <= (a.0 - t) { b } else { a }),
            (b, a) => b.or(a),
        }
    }
}

/// Events merged for one annotation. `timestamp_ms` is the first member's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCluster {
    pub timestamp_ms: i64,
    pub label: String,
    pub events: Vec<Event>,
}

/// Vertical segment (t, 0) to (t, height).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventStem {
    pub timestamp_ms: i64,
    pub kind: SeriesKind,
    pub axis: AxisBinding,
    pub from: f64,
    pub to: f64,
}

/// Point at the top of a stem, carrying the cluster label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventMarker {
    pub timestamp_ms: i64,
    pub kind: SeriesKind,
    pub axis: AxisBinding,
    pub y: f64,
    pub label: String,
    pub cluster_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub scale: AxisScale,
    pub title: &'static str,
}

/// One full refresh worth of output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineFrame {
    pub macro_series: Vec<ChartSeries>,
    pub market_series: Vec<ChartSeries>,
    pub clusters: Vec<EventCluster>,
    pub market_axis: AxisSpec,
    pub window: DateWindow,
    pub show_annotations: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(data: Vec<(i64, Option<f64>)>) -> ChartSeries {
        ChartSeries {
            name: "Gold (GLD)",
            key: "GLD",
            kind: SeriesKind::Line,
            axis: AxisBinding::Markets,
            style: SeriesStyle {
                color: "#facc15",
                smooth: false,
                width: 2.0,
            },
            data,
        }
    }

    #[test]
    fn nearest_picks_closest_timestamp() {
        let series = line(vec![(0, Some(1.0)), (10, None), (20, Some(3.0))]);
        assert_eq!(series.nearest(4), Some((0, Some(1.0))));
        assert_eq!(series.nearest(6), Some((10, None)));
        assert_eq!(series.nearest(100), Some((20, Some(3.0))));
        assert_eq!(series.nearest(-5), Some((0, Some(1.0))));
        assert_eq!(line(Vec::new()).nearest(0), None);
    }

    #[test]
    fn values_skip_gaps_and_nan() {
        let series = line(vec![(0, Some(1.0)), (1, None), (2, Some(f64::NAN)), (3, Some(2.0))]);
        assert_eq!(series.values().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }
}
