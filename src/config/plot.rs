//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Share of the plot area height given to each panel (events, macro, markets)
    pub events_panel_share: f32,
    pub macro_panel_share: f32,
    pub markets_panel_share: f32,
    /// Vertical gap between stacked panels (pixels)
    pub panel_spacing: f32,

    pub line_width: f32,
    /// Samples inserted between two points when smoothing
    pub smooth_samples: usize,

    // --- EVENT ANNOTATIONS ---
    pub stem_color: Color32,
    pub stem_width: f32,
    pub marker_color: Color32,
    pub marker_radius: f32,
    /// Stems run from 0 to 1; the panel shows a little headroom above
    pub stem_height: f64,
    pub events_y_max: f64,
    /// Cluster labels longer than this are cut with an ellipsis
    pub label_max_chars: usize,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    // --- SEMANTIC COLORS ---
    pub color_info: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub swatch_size: f32,
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    events_panel_share: 0.16,
    macro_panel_share: 0.38,
    markets_panel_share: 0.46,
    panel_spacing: 6.0,

    line_width: 2.0,
    smooth_samples: 8,

    stem_color: Color32::from_rgb(148, 163, 184), // Slate
    stem_width: 1.0,
    marker_color: Color32::from_rgb(250, 204, 21), // Amber
    marker_radius: 4.0,
    stem_height: 1.0,
    events_y_max: 1.1,
    label_max_chars: 28,

    plot_y_padding_pct: 0.05,

    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
    color_warning: Color32::from_rgb(255, 215, 0), // Gold

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    swatch_size: 10.0,
    color_widget_border: Color32::from_gray(60),
};
