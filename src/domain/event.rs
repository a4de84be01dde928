use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::{date_to_epoch_ms, parse_calendar_date};

/// Wire shape of one `events.json` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub brief: String,
}

/// A dated narrative event with its date already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub date: NaiveDate,
    /// UTC midnight of `date`
    pub timestamp_ms: i64,
    pub title: String,
    pub brief: String,
}

impl Event {
    pub fn new(date: NaiveDate, title: impl Into<String>, brief: impl Into<String>) -> Self {
        Self {
            date,
            timestamp_ms: date_to_epoch_ms(date),
            title: title.into(),
            brief: brief.into(),
        }
    }

    /// Fails when the date does not parse; such events never reach the clusterer.
    pub fn from_raw(raw: RawEvent) -> Result<Self> {
        let date = parse_calendar_date(&raw.date)?;
        Ok(Self::new(date, raw.title, raw.brief))
    }
}

impl From<&Event> for RawEvent {
    fn from(event: &Event) -> Self {
        Self {
            date: event.date.format("%Y-%m-%d").to_string(),
            title: event.title.clone(),
            brief: event.brief.clone(),
        }
    }
}
