use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{DATASETS, DF, DatasetName};
use crate::data::DatasetSource;
use crate::domain::{Event, RawEvent, SeriesMap, TimePoint};
use crate::models::Datasets;

/// File-level shapes. Entries stay untyped until validated one by one, so a single bad
/// point or event never costs the rest of its file.
type RawSeriesMap = BTreeMap<String, Value>;
type RawEventList = Vec<Value>;

/// Where a dataset ended up coming from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Source(&'static str),
    Fallback(&'static str),
    Missing,
}

/// Outcome of one load: the datasets plus advisories for the banner.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub datasets: Datasets,
    /// User-visible advisories, one per degraded dataset
    pub messages: Vec<String>,
    /// e.g. "prices: Data Directory, macro: Embedded Sample, events: missing"
    pub signature: String,
    pub provenance: Vec<(DatasetName, Provenance)>,
    /// Events dropped because their entry or its date did not parse
    pub dropped_events: usize,
    /// Series points dropped because they were not `{"t": int, "v": number|null}`
    pub dropped_points: usize,
}

impl LoadReport {
    pub fn used_fallback(&self) -> bool {
        self.provenance
            .iter()
            .any(|(_, p)| !matches!(p, Provenance::Source(_)))
    }
}

struct Loaded<T> {
    value: T,
    provenance: Provenance,
    message: Option<String>,
}

/// Loads prices, macro and events concurrently.
///
/// Each dataset degrades on its own: primary sources are tried in order, then the
/// fallback (if any), then an empty default. Never fails.
pub async fn load_datasets(
    sources: &[Box<dyn DatasetSource>],
    fallback: Option<&dyn DatasetSource>,
) -> LoadReport {
    let (prices, macro_series, raw_events) = futures::join!(
        load_one::<RawSeriesMap>(DatasetName::Prices, sources, fallback),
        load_one::<RawSeriesMap>(DatasetName::Macro, sources, fallback),
        load_one::<RawEventList>(DatasetName::Events, sources, fallback),
    );

    let (price_map, dropped_prices) = validate_series(DatasetName::Prices, prices.value);
    let (macro_map, dropped_macro) = validate_series(DatasetName::Macro, macro_series.value);
    let (events, dropped_events) = validate_events(raw_events.value);

    let provenance = vec![
        (DatasetName::Prices, prices.provenance),
        (DatasetName::Macro, macro_series.provenance),
        (DatasetName::Events, raw_events.provenance),
    ];
    let messages = [prices.message, macro_series.message, raw_events.message]
        .into_iter()
        .flatten()
        .collect();

    LoadReport {
        datasets: Datasets::new(price_map, macro_map, events),
        messages,
        signature: signature_of(&provenance),
        provenance,
        dropped_events,
        dropped_points: dropped_prices + dropped_macro,
    }
}

async fn load_one<T: DeserializeOwned + Default>(
    name: DatasetName,
    sources: &[Box<dyn DatasetSource>],
    fallback: Option<&dyn DatasetSource>,
) -> Loaded<T> {
    for source in sources {
        if let Some(value) = fetch_parsed::<T>(source.as_ref(), name).await {
            #[cfg(debug_assertions)]
            if DF.log_loader {
                log::info!("✅ {} loaded from {}", name, source.signature());
            }
            return Loaded {
                value,
                provenance: Provenance::Source(source.signature()),
                message: None,
            };
        }
    }

    if let Some(fallback) = fallback
        && let Some(value) = fetch_parsed::<T>(fallback, name).await
    {
        log::warn!("⚠️ {} unavailable, using {}", name, fallback.signature());
        return Loaded {
            value,
            provenance: Provenance::Fallback(fallback.signature()),
            message: Some(DATASETS.fallback_message(name)),
        };
    }

    log::warn!("⚠️ {} unavailable from every source, continuing with no data", name);
    Loaded {
        value: T::default(),
        provenance: Provenance::Missing,
        message: Some(DATASETS.unavailable_message(name)),
    }
}

/// Missing, unreadable and malformed all count as "not here"; the caller moves on.
async fn fetch_parsed<T: DeserializeOwned>(source: &dyn DatasetSource, name: DatasetName) -> Option<T> {
    let text = match source.fetch(name).await {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("{} fetch from {} failed: {:#}", name, source.signature(), e);
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} from {} is malformed: {}", name, source.signature(), e);
            None
        }
    }
}

/// Keeps every well-formed point. A key whose value is not a list is skipped whole.
fn validate_series(name: DatasetName, raw: RawSeriesMap) -> (SeriesMap, usize) {
    let mut dropped = 0;
    let mut series_map = SeriesMap::new();
    for (key, value) in raw {
        let Value::Array(points) = value else {
            log::warn!("Skipping {} series {:?}: not a list of points", name, key);
            continue;
        };
        let total = points.len();
        let series: Vec<TimePoint> = points
            .into_iter()
            .filter_map(|point| serde_json::from_value(point).ok())
            .collect();
        if series.len() < total {
            log::warn!("{} {:?}: dropped {} malformed points", name, key, total - series.len());
            dropped += total - series.len();
        }
        series_map.insert(key, series);
    }
    (series_map, dropped)
}

/// Drops events that are not objects with a parseable date, so ordering never sees a
/// bogus timestamp. A missing title or brief is kept as empty.
fn validate_events(raw: RawEventList) -> (Vec<Event>, usize) {
    let total = raw.len();
    let events: Vec<Event> = raw
        .into_iter()
        .filter_map(|entry| {
            let raw: RawEvent = serde_json::from_value(entry)
                .map_err(|e| log::warn!("Dropping event entry: {}", e))
                .ok()?;
            let title = raw.title.clone();
            Event::from_raw(raw)
                .map_err(|e| log::warn!("Dropping event {:?}: {:#}", title, e))
                .ok()
        })
        .collect();
    let dropped = total - events.len();
    (events, dropped)
}

fn signature_of(provenance: &[(DatasetName, Provenance)]) -> String {
    provenance
        .iter()
        .map(|(name, p)| match p {
            Provenance::Source(sig) => format!("{name}: {sig}"),
            Provenance::Fallback(sig) => format!("{name}: {sig} (fallback)"),
            Provenance::Missing => format!("{name}: missing"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
