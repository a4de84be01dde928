use eframe::egui::{Align2, RichText};
use egui_plot::{Line, PlotPoint, PlotPoints, PlotUi, Points, Text};

use crate::config::{AxisScale, plot::PLOT_CONFIG};
use crate::models::{ChartSeries, EventMarker, EventStem};
use crate::ui::styles::{apply_opacity, hex_to_color32};
use crate::ui::utils::truncate_label;
use crate::utils::catmull_rom;

/// Everything a layer may need for one panel.
pub struct LayerContext<'a> {
    pub series: &'a [ChartSeries],
    pub scale: AxisScale,
    pub stems: &'a [EventStem],
    pub markers: &'a [EventMarker],
    pub show_annotations: bool,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

/// Series value to plot-space y. Log panels plot log10; non-positive values have no position.
pub(crate) fn to_plot_y(value: f64, scale: AxisScale) -> Option<f64> {
    if !value.is_finite() {
        return None;
    }
    match scale {
        AxisScale::Linear => Some(value),
        AxisScale::Log => (value > 0.0).then(|| value.log10()),
    }
}

/// Drawable vertices of a series. Gaps are bridged (nulls are skipped, not broken on).
pub(crate) fn plot_vertices(series: &ChartSeries, scale: AxisScale) -> Vec<[f64; 2]> {
    let points: Vec<[f64; 2]> = series
        .data
        .iter()
        .filter_map(|&(t, v)| v.and_then(|v| to_plot_y(v, scale)).map(|y| [t as f64, y]))
        .collect();

    if series.style.smooth {
        catmull_rom(&points, PLOT_CONFIG.smooth_samples)
    } else {
        points
    }
}

// ============================================================================
// 1. SERIES LINES
// ============================================================================
pub struct SeriesLineLayer;

impl PlotLayer for SeriesLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for series in ctx.series {
            let vertices = plot_vertices(series, ctx.scale);
            if vertices.is_empty() {
                continue;
            }
            plot_ui.line(
                Line::new(series.name, PlotPoints::new(vertices))
                    .color(hex_to_color32(series.style.color))
                    .width(series.style.width),
            );
        }
    }
}

// ============================================================================
// 2. EVENT STEMS
// ============================================================================
pub struct EventStemLayer;

impl PlotLayer for EventStemLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let color = apply_opacity(PLOT_CONFIG.stem_color, 0.8);
        for stem in ctx.stems {
            let x = stem.timestamp_ms as f64;
            plot_ui.line(
                Line::new("", PlotPoints::new(vec![[x, stem.from], [x, stem.to]]))
                    .color(color)
                    .width(PLOT_CONFIG.stem_width),
            );
        }
    }
}

// ============================================================================
// 3. EVENT MARKERS (+ optional labels)
// ============================================================================
pub struct EventMarkerLayer;

impl PlotLayer for EventMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.markers.is_empty() {
            return;
        }
        let coords: Vec<[f64; 2]> = ctx
            .markers
            .iter()
            .map(|m| [m.timestamp_ms as f64, m.y])
            .collect();
        plot_ui.points(
            Points::new("Narrative events", PlotPoints::new(coords))
                .radius(PLOT_CONFIG.marker_radius)
                .color(PLOT_CONFIG.marker_color),
        );

        if !ctx.show_annotations {
            return;
        }
        for marker in ctx.markers {
            let label = truncate_label(&marker.label, PLOT_CONFIG.label_max_chars);
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(marker.timestamp_ms as f64, marker.y + 0.04),
                    RichText::new(label).small().color(PLOT_CONFIG.color_text_neutral),
                )
                .anchor(Align2::CENTER_BOTTOM),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AxisBinding, SeriesKind, SeriesStyle};

    fn series(data: Vec<(i64, Option<f64>)>, smooth: bool) -> ChartSeries {
        ChartSeries {
            name: "S&P 500",
            key: "^GSPC",
            kind: SeriesKind::Line,
            axis: AxisBinding::Markets,
            style: SeriesStyle {
                color: "#22c55e",
                smooth,
                width: 2.0,
            },
            data,
        }
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let s = series(vec![(0, Some(100.0)), (1, Some(0.0)), (2, None), (3, Some(1000.0))], false);
        let out = plot_vertices(&s, AxisScale::Log);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1][0], 3.0);
        assert!((out[0][1] - 2.0).abs() < 1e-12 && (out[1][1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn linear_scale_bridges_nulls() {
        let s = series(vec![(0, Some(-1.0)), (1, None), (2, Some(f64::NAN)), (3, Some(2.0))], false);
        assert_eq!(plot_vertices(&s, AxisScale::Linear), vec![[0.0, -1.0], [3.0, 2.0]]);
    }

    #[test]
    fn smoothing_keeps_original_vertices() {
        let s = series(vec![(0, Some(1.0)), (10, Some(3.0)), (20, Some(2.0))], true);
        let out = plot_vertices(&s, AxisScale::Linear);
        assert!(out.len() > 3);
        assert_eq!(out.first(), Some(&[0.0, 1.0]));
        assert_eq!(out.last(), Some(&[20.0, 2.0]));
        assert!(out.contains(&[10.0, 3.0]));
    }
}
