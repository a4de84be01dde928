use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const TOOLTIP_TIME_FORMAT: &str = "%b %-d, %Y";

    /// Whole days to milliseconds (the clustering gap is configured in days).
    pub const fn days_to_ms(days: i64) -> i64 {
        days * Self::MS_IN_D
    }
}

// Time Helper functions

/// `YYYY-MM-DD` for a UTC epoch-ms timestamp. Out-of-range timestamps render as "–".
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    format_epoch_ms(epoch_ms, TimeUtils::STANDARD_TIME_FORMAT)
}

/// "Mar 10, 2023" style, used by the plot tooltip.
pub fn epoch_ms_to_tooltip_string(epoch_ms: i64) -> String {
    format_epoch_ms(epoch_ms, TimeUtils::TOOLTIP_TIME_FORMAT)
}

fn format_epoch_ms(epoch_ms: i64, fmt: &str) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(fmt).to_string(),
        None => "–".to_string(),
    }
}

/// UTC calendar date of an epoch-ms timestamp.
pub fn epoch_ms_to_date(epoch_ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(epoch_ms).map(|dt| dt.date_naive())
}

/// Midnight UTC of `date` in epoch ms.
pub fn date_to_epoch_ms(date: NaiveDate) -> i64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Parses a calendar date. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_calendar_date(date_str: &str) -> Result<NaiveDate> {
    let trimmed = date_str.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, TimeUtils::STANDARD_TIME_FORMAT) {
        return Ok(date);
    }
    let dt = DateTime::parse_from_rfc3339(trimmed)
        .with_context(|| format!("Unparseable calendar date: {:?}", date_str))?;
    Ok(dt.with_timezone(&Utc).date_naive())
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_string_round_trips_through_epoch() {
        let date = parse_calendar_date("2023-03-10").unwrap();
        let ms = date_to_epoch_ms(date);
        assert_eq!(ms, 1_678_406_400_000);
        assert_eq!(epoch_ms_to_date_string(ms), "2023-03-10");
        assert_eq!(epoch_ms_to_date(ms), Some(date));
    }

    #[test]
    fn rfc3339_dates_use_their_utc_day() {
        let date = parse_calendar_date("2020-03-16T23:30:00-05:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 17).unwrap());
    }

    #[test]
    fn garbage_dates_are_errors() {
        assert!(parse_calendar_date("not a date").is_err());
        assert!(parse_calendar_date("2023-13-40").is_err());
    }

    #[test]
    fn tooltip_format_is_human_readable() {
        assert_eq!(epoch_ms_to_tooltip_string(1_678_406_400_000), "Mar 10, 2023");
    }
}
