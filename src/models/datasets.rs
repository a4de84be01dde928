use serde::Serialize;

use crate::domain::{Event, SeriesCategory, SeriesMap};

/// The three raw datasets, already normalised by the loader:
/// every series sorted by timestamp and every event date validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Datasets {
    pub prices: SeriesMap,
    pub macro_series: SeriesMap,
    pub events: Vec<Event>,
}

impl Datasets {
    pub fn new(prices: SeriesMap, macro_series: SeriesMap, events: Vec<Event>) -> Self {
        let mut datasets = Self {
            prices,
            macro_series,
            events,
        };
        datasets.sort_series();
        datasets
    }

    pub fn series_for(&self, category: SeriesCategory) -> &SeriesMap {
        match category {
            SeriesCategory::Macro => &self.macro_series,
            SeriesCategory::Market => &self.prices,
        }
    }

    /// Stable sort of every series by timestamp. Later stages rely on chronological order.
    pub fn sort_series(&mut self) {
        for series in self.prices.values_mut().chain(self.macro_series.values_mut()) {
            if !series.is_sorted_by_key(|p| p.t) {
                series.sort_by_key(|p| p.t);
            }
        }
    }

    /// Every timestamp across prices and macro (events do not widen the window).
    pub fn all_timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.prices
            .values()
            .chain(self.macro_series.values())
            .flat_map(|series| series.iter().map(|p| p.t))
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.macro_series.is_empty() && self.events.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.prices
            .values()
            .chain(self.macro_series.values())
            .map(Vec::len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimePoint;

    #[test]
    fn new_sorts_every_series() {
        let mut prices = SeriesMap::new();
        prices.insert(
            "GLD".into(),
            vec![TimePoint::new(3, Some(3.0)), TimePoint::new(1, Some(1.0)), TimePoint::new(2, None)],
        );
        let datasets = Datasets::new(prices, SeriesMap::new(), Vec::new());
        let ts: Vec<i64> = datasets.prices["GLD"].iter().map(|p| p.t).collect();
        assert_eq!(ts, vec![1, 2, 3]);
        assert_eq!(datasets.point_count(), 3);
    }

    #[test]
    fn all_timestamps_spans_both_maps() {
        let mut prices = SeriesMap::new();
        prices.insert("GLD".into(), vec![TimePoint::new(5, Some(1.0))]);
        let mut macro_series = SeriesMap::new();
        macro_series.insert("VIX".into(), vec![TimePoint::new(-2, None)]);
        let datasets = Datasets::new(prices, macro_series, Vec::new());
        let mut ts: Vec<i64> = datasets.all_timestamps().collect();
        ts.sort();
        assert_eq!(ts, vec![-2, 5]);
    }
}
