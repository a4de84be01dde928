//! Configuration module for the timeline dashboard.

// Can all be private now because we have a public re-export.
mod datasets;
mod debug;
mod indicators;
mod persistence;
mod timeline;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use datasets::{DATASETS, DatasetConfig, DatasetName};
pub use debug::DF;
pub use indicators::{MACRO_DEFINITIONS, MARKET_DEFINITIONS, definitions_for, find_definition};
pub use persistence::PERSISTENCE;
pub use timeline::{TIMELINE, TimelineConfig};
pub use types::{AxisScale, GapDays, ThemeMode};

/// Activate the trace_time macro (scope-level timing)
pub const LOG_PERFORMANCE: bool = false;
