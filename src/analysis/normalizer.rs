use crate::config::{DF, TIMELINE};
use crate::domain::TimePoint;

/// Plot pairs, values passed through untouched (nulls included).
pub fn to_pairs(series: &[TimePoint]) -> Vec<(i64, Option<f64>)> {
    series.iter().map(|p| (p.t, p.v)).collect()
}

/// Rebase to 100 at the first non-null, non-NaN value.
///
/// Nulls stay null. With no usable base, or a base of exactly zero,
/// every value comes back null: there is no meaningful index to show.
pub fn rebase_series(series: &[TimePoint]) -> Vec<(i64, Option<f64>)> {
    let base = series.iter().find_map(TimePoint::valid_value);

    match base {
        Some(base) if base != 0.0 => series
            .iter()
            .map(|p| (p.t, p.v.map(|v| (v / base) * TIMELINE.rebase_index)))
            .collect(),
        _ => {
            #[cfg(debug_assertions)]
            if DF.log_rebase && !series.is_empty() {
                log::info!(
                    "📉 No usable rebase base (found {:?}) across {} points: emitting nulls",
                    base,
                    series.len()
                );
            }
            series.iter().map(|p| (p.t, None)).collect()
        }
    }
}

/// Filtered series to plot pairs, rebased or not.
pub fn normalize(series: &[TimePoint], rebase: bool) -> Vec<(i64, Option<f64>)> {
    if rebase {
        rebase_series(series)
    } else {
        to_pairs(series)
    }
}
