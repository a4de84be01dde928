//! Defaults for the selection state and the refresh pipeline.

use super::types::GapDays;

pub struct TimelineConfig {
    pub default_macros: &'static [&'static str],
    pub default_markets: &'static [&'static str],

    pub default_rebase: bool,
    pub default_log_scale: bool,
    pub default_show_annotations: bool,
    pub default_smooth_lines: bool,

    /// Events closer than this to a cluster's first event join that cluster
    pub min_gap_days: GapDays,
    /// Trailing window used when no series has any data
    pub fallback_window_days: i64,
    /// Index value a rebased series starts at
    pub rebase_index: f64,
}

pub const TIMELINE: TimelineConfig = TimelineConfig {
    default_macros: &["VIX", "TENY", "DXY"],
    default_markets: &["^GSPC", "GLD", "TLT", "UUP", "BTC-USD"],

    default_rebase: true,
    default_log_scale: false,
    default_show_annotations: true,
    default_smooth_lines: true,

    min_gap_days: GapDays::DEFAULT,
    fallback_window_days: 365,
    rebase_index: 100.0,
};
