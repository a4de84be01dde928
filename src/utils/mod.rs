mod maths_utils;
mod perf;
pub mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, date_to_epoch_ms, epoch_ms_to_date, epoch_ms_to_date_string,
    epoch_ms_to_tooltip_string, now_timestamp_ms, parse_calendar_date,
};

pub use perf::SlowScope;

pub(crate) use maths_utils::{catmull_rom, interp_linear, round_to, smooth_data};
