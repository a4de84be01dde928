use std::sync::LazyLock;

pub const ICON_CALENDAR: &str = "📅";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_THEME: &str = "🌓";
pub const ICON_RESET: &str = "⟲";

pub struct UiText {
    pub app_title: String,
    pub app_subtitle: String,

    // Control panel
    pub cp_heading: String,
    pub cp_window: String,
    pub cp_start: String,
    pub cp_end: String,
    pub cp_reset_window: String,
    pub cp_macros: String,
    pub cp_markets: String,
    pub cp_display: String,
    pub cp_rebase: String,
    pub cp_log_scale: String,
    pub cp_annotations: String,
    pub cp_smooth: String,
    pub cp_shortcuts: String,

    // Plot panels
    pub plot_events: String,
    pub plot_macro: String,
    pub plot_no_data: String,

    // Theme button
    pub theme_prefix: String,

    // Loading screen
    pub ls_title: String,
    pub ls_loading: String,

    // Status bar
    pub sb_window: String,
    pub sb_clusters: String,
    pub sb_points: String,
    pub sb_generation: String,
    pub sb_superseded: String,
    pub label_warning: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Macro Timeline".to_string(),
    app_subtitle: "Markets, macro and the events that moved them".to_string(),

    cp_heading: "Controls".to_string(),
    cp_window: format!("{} Date range", ICON_CALENDAR),
    cp_start: "Start".to_string(),
    cp_end: "End".to_string(),
    cp_reset_window: format!("{} Full range", ICON_RESET),
    cp_macros: "Macro indicators".to_string(),
    cp_markets: "Markets".to_string(),
    cp_display: "Display".to_string(),
    cp_rebase: "Rebase markets to 100 (R)".to_string(),
    cp_log_scale: "Log scale (L)".to_string(),
    cp_annotations: "Event labels (A)".to_string(),
    cp_smooth: "Smooth lines (S)".to_string(),
    cp_shortcuts: "T cycles the theme".to_string(),

    plot_events: "Events".to_string(),
    plot_macro: "Macro".to_string(),
    plot_no_data: "No data in the selected range".to_string(),

    theme_prefix: format!("{} Theme:", ICON_THEME),

    ls_title: "Macro Timeline".to_string(),
    ls_loading: "Loading prices, macro and events datasets...".to_string(),

    sb_window: "Window".to_string(),
    sb_clusters: "event clusters".to_string(),
    sb_points: "points".to_string(),
    sb_generation: "gen".to_string(),
    sb_superseded: "superseded".to_string(),
    label_warning: ICON_WARNING.to_string(),
});
