// Domain types and value objects
mod event;
mod indicator;
mod time_point;

// Re-export commonly used types to the world
pub use event::{Event, RawEvent};
pub use indicator::{IndicatorDefinition, SeriesCategory};
pub use time_point::{Series, SeriesMap, TimePoint};
