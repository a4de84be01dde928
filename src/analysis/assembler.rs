use crate::config::{AxisScale, DF, GapDays, MACRO_DEFINITIONS, MARKET_DEFINITIONS, plot::PLOT_CONFIG};
use crate::domain::{IndicatorDefinition, SeriesCategory, SeriesMap};
use crate::models::{
    AxisBinding, AxisSpec, ChartSeries, Datasets, EventCluster, EventMarker, EventStem,
    SelectionState, SeriesKind, SeriesStyle, TimelineFrame,
};
use crate::trace_time;

use super::{cluster_events, filter_by_window, normalize};

/// One line series per selected definition, in definition order.
/// Keys missing from the dataset become empty series rather than errors.
pub fn assemble_category(
    category: SeriesCategory,
    definitions: &[IndicatorDefinition],
    dataset: &SeriesMap,
    selection: &SelectionState,
) -> Vec<ChartSeries> {
    let selected = selection.keys(category);
    let rebase = category.rebase_applies(selection.rebase);
    let axis = match category {
        SeriesCategory::Macro => AxisBinding::Macro,
        SeriesCategory::Market => AxisBinding::Markets,
    };

    definitions
        .iter()
        .filter(|def| selected.contains(def.key))
        .map(|def| {
            let filtered = filter_by_window(def.lookup(dataset), &selection.window);
            ChartSeries {
                name: def.label,
                key: def.key,
                kind: SeriesKind::Line,
                axis,
                style: SeriesStyle {
                    color: def.color,
                    smooth: selection.smooth_lines,
                    width: PLOT_CONFIG.line_width,
                },
                data: normalize(&filtered, rebase),
            }
        })
        .collect()
}

/// Market value axis: log or linear, titled by whether values are rebased.
pub fn market_axis(selection: &SelectionState) -> AxisSpec {
    AxisSpec {
        scale: selection.market_scale(),
        title: if selection.rebase {
            "Markets (rebased = 100)"
        } else {
            "Markets"
        },
    }
}

/// Full refresh: recomputes everything from the raw datasets, no caching between calls.
pub fn build_frame(datasets: &Datasets, selection: &SelectionState, min_gap: GapDays) -> TimelineFrame {
    trace_time!("build_frame", 2_000, {
        let macro_series = assemble_category(
            SeriesCategory::Macro,
            MACRO_DEFINITIONS,
            datasets.series_for(SeriesCategory::Macro),
            selection,
        );
        let market_series = assemble_category(
            SeriesCategory::Market,
            MARKET_DEFINITIONS,
            datasets.series_for(SeriesCategory::Market),
            selection,
        );
        let clusters = cluster_events(&datasets.events, min_gap);

        #[cfg(debug_assertions)]
        if DF.log_engine_core {
            log::info!(
                "🧮 Frame built: {} macro, {} market, {} clusters over {} ({} axis)",
                macro_series.len(),
                market_series.len(),
                clusters.len(),
                selection.window,
                if selection.market_scale() == AxisScale::Log { "log" } else { "linear" },
            );
        }

        TimelineFrame {
            macro_series,
            market_series,
            clusters,
            market_axis: market_axis(selection),
            window: selection.window,
            show_annotations: selection.show_annotations,
        }
    })
}

/// Render-side split of clusters into stem segments and labelled marker points.
pub fn split_clusters(clusters: &[EventCluster]) -> (Vec<EventStem>, Vec<EventMarker>) {
    let height = PLOT_CONFIG.stem_height;
    clusters
        .iter()
        .enumerate()
        .map(|(cluster_index, cluster)| {
            (
                EventStem {
                    timestamp_ms: cluster.timestamp_ms,
                    kind: SeriesKind::Stem,
                    axis: AxisBinding::Events,
                    from: 0.0,
                    to: height,
                },
                EventMarker {
                    timestamp_ms: cluster.timestamp_ms,
                    kind: SeriesKind::Marker,
                    axis: AxisBinding::Events,
                    y: height,
                    label: cluster.label.clone(),
                    cluster_index,
                },
            )
        })
        .unzip()
}
