//! Display catalogue for every plottable series.

use crate::domain::{IndicatorDefinition, SeriesCategory};

pub const MACRO_DEFINITIONS: &[IndicatorDefinition] = &[
    IndicatorDefinition::new("VIX", "VIX", "#f97316"),
    IndicatorDefinition::new("TENY", "US 10Y Yield", "#22d3ee"),
    IndicatorDefinition::new("DXY", "DXY Dollar Index", "#38bdf8"),
    IndicatorDefinition::new("CPI_YoY", "CPI YoY", "#f43f5e"),
    IndicatorDefinition::new("OIL", "WTI Crude", "#a855f7"),
];

pub const MARKET_DEFINITIONS: &[IndicatorDefinition] = &[
    IndicatorDefinition::new("^GSPC", "S&P 500", "#22c55e"),
    // Generated data ships ^NDX, the fetcher writes ^IXIC
    IndicatorDefinition::new("^NDX", "NASDAQ 100", "#3b82f6").with_aliases(&["^IXIC"]),
    IndicatorDefinition::new("GLD", "Gold (GLD)", "#facc15"),
    IndicatorDefinition::new("TLT", "Treasury (TLT)", "#6366f1"),
    IndicatorDefinition::new("UUP", "USD (UUP)", "#0ea5e9"),
    IndicatorDefinition::new("BTC-USD", "Bitcoin", "#f97316"),
];

pub fn definitions_for(category: SeriesCategory) -> &'static [IndicatorDefinition] {
    match category {
        SeriesCategory::Macro => MACRO_DEFINITIONS,
        SeriesCategory::Market => MARKET_DEFINITIONS,
    }
}

pub fn find_definition(category: SeriesCategory, key: &str) -> Option<&'static IndicatorDefinition> {
    definitions_for(category).iter().find(|def| def.key == key)
}
