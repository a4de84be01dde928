use eframe::egui::{Grid, Id, RichText, Ui, Vec2b};
use egui_plot::{Corner, Legend, Plot, PlotPoint};

use crate::analysis::split_clusters;
use crate::config::{AxisScale, plot::PLOT_CONFIG};
use crate::models::{ChartSeries, DateWindow, EventCluster, EventMarker, EventStem, TimelineFrame};
use crate::ui::plot_layers::{
    EventMarkerLayer, EventStemLayer, LayerContext, PlotLayer, SeriesLineLayer,
};
use crate::ui::styles::{UiStyleExt, hex_to_color32};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_number;
use crate::utils::{epoch_ms_to_date_string, epoch_ms_to_tooltip_string};

const LINK_GROUP: &str = "timeline_x";
/// Pointer must be this share of the visible x-range from a marker to hover it
const MARKER_HOVER_FRACTION: f64 = 0.012;

/// Render-side data derived once per frame generation.
#[derive(Default)]
struct PlotCache {
    generation: u64,
    stems: Vec<EventStem>,
    markers: Vec<EventMarker>,
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Three stacked panels sharing one x-axis: events, macro, markets.
    pub fn render(&mut self, ui: &mut Ui, frame: &TimelineFrame, generation: u64) {
        let reset = self.cache.as_ref().is_none_or(|c| c.generation != generation);
        if reset {
            let (stems, markers) = split_clusters(&frame.clusters);
            self.cache = Some(PlotCache {
                generation,
                stems,
                markers,
            });
        }
        let Some(cache) = self.cache.as_ref() else {
            return;
        };

        let header_allowance = 3.0 * (ui.text_style_height(&eframe::egui::TextStyle::Body) + 6.0);
        let total = (ui.available_height() - header_allowance - 2.0 * PLOT_CONFIG.panel_spacing).max(240.0);

        panel_header(ui, &UI_TEXT.plot_events, frame.clusters.is_empty());
        render_events_panel(
            ui,
            frame,
            cache,
            total * PLOT_CONFIG.events_panel_share,
            reset,
        );
        ui.add_space(PLOT_CONFIG.panel_spacing);

        panel_header(ui, &UI_TEXT.plot_macro, !has_values(&frame.macro_series));
        render_series_panel(
            ui,
            "macro_plot",
            &frame.macro_series,
            AxisScale::Linear,
            &frame.window,
            total * PLOT_CONFIG.macro_panel_share,
            reset,
        );
        ui.add_space(PLOT_CONFIG.panel_spacing);

        panel_header(ui, frame.market_axis.title, !has_values(&frame.market_series));
        render_series_panel(
            ui,
            "markets_plot",
            &frame.market_series,
            frame.market_axis.scale,
            &frame.window,
            total * PLOT_CONFIG.markets_panel_share,
            reset,
        );
    }
}

fn has_values(series: &[ChartSeries]) -> bool {
    series.iter().any(|s| s.values().next().is_some())
}

fn panel_header(ui: &mut Ui, title: &str, empty: bool) {
    ui.horizontal(|ui| {
        ui.label_subheader(title);
        if empty {
            ui.label_subdued(&UI_TEXT.plot_no_data);
        }
    });
}

/// Shared x-axis setup: linked, date-labelled, fitted to the window on reset.
fn timeline_plot(id: &str, height: f32, window: &DateWindow, reset: bool) -> Plot<'static> {
    let plot = Plot::new(id)
        .height(height)
        .link_axis(Id::new(LINK_GROUP), Vec2b::new(true, false))
        .link_cursor(Id::new(LINK_GROUP), Vec2b::new(true, false))
        .include_x(window.start_ms() as f64)
        .include_x(window.end_ms() as f64)
        .x_axis_formatter(|mark, _range| epoch_ms_to_date_string(mark.value as i64))
        .show_x(false)
        .show_y(false);
    if reset { plot.reset() } else { plot }
}

fn render_events_panel(ui: &mut Ui, frame: &TimelineFrame, cache: &PlotCache, height: f32, reset: bool) {
    let ctx = LayerContext {
        series: &[],
        scale: AxisScale::Linear,
        stems: &cache.stems,
        markers: &cache.markers,
        show_annotations: frame.show_annotations,
    };
    let layers: [&dyn PlotLayer; 2] = [&EventStemLayer, &EventMarkerLayer];

    let response = timeline_plot("events_plot", height, &frame.window, reset)
        .include_y(0.0)
        .include_y(PLOT_CONFIG.events_y_max)
        .show_axes(Vec2b::new(true, false))
        .show_grid(Vec2b::new(true, false))
        .allow_drag(Vec2b::new(true, false))
        .show(ui, |plot_ui| {
            for layer in layers {
                layer.render(plot_ui, &ctx);
            }
            plot_ui
                .pointer_coordinate()
                .map(|p| (p, plot_ui.plot_bounds().width()))
        });

    let Some((pointer, visible_width)) = response.inner else {
        return;
    };
    if !response.response.hovered() {
        return;
    }
    if let Some(cluster) = hovered_cluster(&cache.markers, &frame.clusters, pointer, visible_width) {
        response
            .response
            .on_hover_ui_at_pointer(|ui| cluster_tooltip(ui, cluster));
    }
}

fn hovered_cluster<'a>(
    markers: &[EventMarker],
    clusters: &'a [EventCluster],
    pointer: PlotPoint,
    visible_width: f64,
) -> Option<&'a EventCluster> {
    let tolerance = visible_width * MARKER_HOVER_FRACTION;
    markers
        .iter()
        .map(|m| (m, (m.timestamp_ms as f64 - pointer.x).abs()))
        .filter(|&(_, dist)| dist <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .and_then(|(m, _)| clusters.get(m.cluster_index))
}

fn cluster_tooltip(ui: &mut Ui, cluster: &EventCluster) {
    ui.set_max_width(320.0);
    for event in &cluster.events {
        ui.label_subdued(epoch_ms_to_tooltip_string(event.timestamp_ms));
        ui.label(RichText::new(&event.title).strong());
        if !event.brief.is_empty() {
            ui.label(&event.brief);
        }
        ui.add_space(4.0);
    }
}

fn render_series_panel(
    ui: &mut Ui,
    id: &str,
    series: &[ChartSeries],
    scale: AxisScale,
    window: &DateWindow,
    height: f32,
    reset: bool,
) {
    let ctx = LayerContext {
        series,
        scale,
        stems: &[],
        markers: &[],
        show_annotations: false,
    };

    let mut plot = timeline_plot(id, height, window, reset)
        .legend(Legend::default().position(Corner::LeftTop));
    if scale == AxisScale::Log {
        plot = plot.y_axis_formatter(|mark, _range| format_number(Some(10f64.powf(mark.value))));
    }

    let response = plot.show(ui, |plot_ui| {
        SeriesLineLayer.render(plot_ui, &ctx);
        plot_ui.pointer_coordinate()
    });

    if let Some(pointer) = response.inner
        && response.response.hovered()
        && !series.is_empty()
    {
        response
            .response
            .on_hover_ui_at_pointer(|ui| series_tooltip(ui, series, pointer.x.round() as i64));
    }
}

/// Date header plus one row per series, each at its point nearest the pointer.
fn series_tooltip(ui: &mut Ui, series: &[ChartSeries], t: i64) {
    let anchor_t = series
        .iter()
        .filter_map(|s| s.nearest(t))
        .min_by_key(|(pt, _)| (pt - t).abs())
        .map(|(pt, _)| pt)
        .unwrap_or(t);
    ui.label_subdued(epoch_ms_to_tooltip_string(anchor_t).to_uppercase());

    Grid::new("series_tooltip_grid")
        .num_columns(3)
        .spacing([8.0, 2.0])
        .show(ui, |ui| {
            for s in series {
                ui.color_swatch(hex_to_color32(s.style.color));
                ui.label(s.name);
                ui.label(format_number(s.nearest(t).and_then(|(_, v)| v)));
                ui.end_row();
            }
        });
}
