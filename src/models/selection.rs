use std::collections::BTreeSet;

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{AxisScale, MACRO_DEFINITIONS, MARKET_DEFINITIONS, TIMELINE, find_definition};
use crate::domain::SeriesCategory;
use crate::utils::{
    TimeUtils, date_to_epoch_ms, epoch_ms_to_date, epoch_ms_to_date_string, now_timestamp_ms,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cannot deselect {key:?}: at least one series must stay selected")]
    LastMember { key: String },
    #[error("a selection needs at least one key")]
    Empty,
    #[error("window start {start} is after window end {end}")]
    InvertedWindow { start: String, end: String },
}

impl SelectionError {
    fn inverted(start_ms: i64, end_ms: i64) -> Self {
        Self::InvertedWindow {
            start: epoch_ms_to_date_string(start_ms),
            end: epoch_ms_to_date_string(end_ms),
        }
    }
}

// ============================================================================
// KeySet: non-empty set of series keys
// ============================================================================

/// Set of selected series keys that can never become empty.
/// Iteration order is lexical; plot order comes from the definition lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct KeySet(BTreeSet<String>);

impl KeySet {
    pub fn single(key: impl Into<String>) -> Self {
        Self(BTreeSet::from([key.into()]))
    }

    pub fn from_keys<I, S>(keys: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = keys.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns true when the key was newly added.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    /// Removing the last member is rejected and leaves the set untouched.
    /// Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<bool, SelectionError> {
        if !self.0.contains(key) {
            return Ok(false);
        }
        if self.0.len() == 1 {
            return Err(SelectionError::LastMember { key: key.to_string() });
        }
        Ok(self.0.remove(key))
    }

    /// Checkbox semantics: `on` inserts, `!on` removes. Returns whether the set changed.
    pub fn toggle(&mut self, key: &str, on: bool) -> Result<bool, SelectionError> {
        if on {
            Ok(self.insert(key))
        } else {
            self.remove(key)
        }
    }
}

impl TryFrom<Vec<String>> for KeySet {
    type Error = SelectionError;

    fn try_from(keys: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_keys(keys)
    }
}

impl From<KeySet> for Vec<String> {
    fn from(set: KeySet) -> Self {
        set.0.into_iter().collect()
    }
}

// ============================================================================
// DateWindow: inclusive [start, end] in epoch ms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start_ms: i64,
    end_ms: i64,
}

impl DateWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> Result<Self, SelectionError> {
        if start_ms > end_ms {
            return Err(SelectionError::inverted(start_ms, end_ms));
        }
        Ok(Self { start_ms, end_ms })
    }

    /// Trailing window ending at `now_ms`.
    pub fn trailing(now_ms: i64, days: i64) -> Self {
        Self {
            start_ms: now_ms - TimeUtils::days_to_ms(days),
            end_ms: now_ms,
        }
    }

    /// Min/max over every timestamp, or the trailing fallback window when there are none.
    pub fn from_series_bounds<I>(timestamps: I, now_ms: i64) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        match timestamps.into_iter().minmax() {
            MinMaxResult::NoElements => Self::trailing(now_ms, TIMELINE.fallback_window_days),
            MinMaxResult::OneElement(t) => Self { start_ms: t, end_ms: t },
            MinMaxResult::MinMax(start_ms, end_ms) => Self { start_ms, end_ms },
        }
    }

    #[inline]
    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    #[inline]
    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// Both bounds inclusive.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        t >= self.start_ms && t <= self.end_ms
    }

    pub fn set_start(&mut self, start_ms: i64) -> Result<(), SelectionError> {
        *self = Self::new(start_ms, self.end_ms)?;
        Ok(())
    }

    pub fn set_end(&mut self, end_ms: i64) -> Result<(), SelectionError> {
        *self = Self::new(self.start_ms, end_ms)?;
        Ok(())
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        epoch_ms_to_date(self.start_ms)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        epoch_ms_to_date(self.end_ms)
    }

    /// Date pickers work in whole days; the bound becomes UTC midnight.
    pub fn set_start_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        self.set_start(date_to_epoch_ms(date))
    }

    pub fn set_end_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        self.set_end(date_to_epoch_ms(date))
    }

    /// Replaces either bound, or both, in one step. Each missing date keeps the current
    /// bound; only the resolved pair is checked, so the result may lie wholly outside it.
    pub fn with_dates(
        self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, SelectionError> {
        let start_ms = start.map_or(self.start_ms, date_to_epoch_ms);
        let end_ms = end.map_or(self.end_ms, date_to_epoch_ms);
        Self::new(start_ms, end_ms)
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::trailing(now_timestamp_ms(), TIMELINE.fallback_window_days)
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} → {}",
            epoch_ms_to_date_string(self.start_ms),
            epoch_ms_to_date_string(self.end_ms)
        )
    }
}

// ============================================================================
// SelectionState
// ============================================================================

/// Everything the user can change. Passed by value into each pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub macros: KeySet,
    pub markets: KeySet,
    pub rebase: bool,
    pub log_scale: bool,
    pub show_annotations: bool,
    pub smooth_lines: bool,
    /// Re-derived from the loaded data on every start, so never persisted
    #[serde(skip)]
    pub window: DateWindow,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            macros: default_keys(TIMELINE.default_macros, SeriesCategory::Macro),
            markets: default_keys(TIMELINE.default_markets, SeriesCategory::Market),
            rebase: TIMELINE.default_rebase,
            log_scale: TIMELINE.default_log_scale,
            show_annotations: TIMELINE.default_show_annotations,
            smooth_lines: TIMELINE.default_smooth_lines,
            window: DateWindow::default(),
        }
    }
}

fn default_keys(keys: &[&str], category: SeriesCategory) -> KeySet {
    KeySet::from_keys(keys.iter().copied()).unwrap_or_else(|_| {
        let first = match category {
            SeriesCategory::Macro => MACRO_DEFINITIONS[0].key,
            SeriesCategory::Market => MARKET_DEFINITIONS[0].key,
        };
        KeySet::single(first)
    })
}

impl SelectionState {
    pub fn with_window(mut self, window: DateWindow) -> Self {
        self.window = window;
        self
    }

    pub fn keys(&self, category: SeriesCategory) -> &KeySet {
        match category {
            SeriesCategory::Macro => &self.macros,
            SeriesCategory::Market => &self.markets,
        }
    }

    pub fn toggle_key(
        &mut self,
        category: SeriesCategory,
        key: &str,
        on: bool,
    ) -> Result<bool, SelectionError> {
        let set = match category {
            SeriesCategory::Macro => &mut self.macros,
            SeriesCategory::Market => &mut self.markets,
        };
        set.toggle(key, on)
    }

    pub fn market_scale(&self) -> AxisScale {
        AxisScale::from_log_flag(self.log_scale)
    }

    /// Drops keys with no definition (e.g. restored from an older build).
    /// A set left empty goes back to its defaults.
    pub fn retain_known(mut self) -> Self {
        let defaults = Self::default();
        self.macros = known_keys(&self.macros, SeriesCategory::Macro).unwrap_or(defaults.macros);
        self.markets = known_keys(&self.markets, SeriesCategory::Market).unwrap_or(defaults.markets);
        self
    }
}

fn known_keys(set: &KeySet, category: SeriesCategory) -> Option<KeySet> {
    KeySet::from_keys(set.iter().filter(|key| find_definition(category, key).is_some())).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = TimeUtils::MS_IN_D;

    #[test]
    fn removing_last_member_is_rejected() {
        let mut set = KeySet::single("VIX");
        let err = set.remove("VIX").unwrap_err();
        assert_eq!(err, SelectionError::LastMember { key: "VIX".into() });
        assert_eq!(set.len(), 1);
        assert!(set.contains("VIX"));
    }

    #[test]
    fn toggle_off_down_to_one_then_rejects() {
        let mut set = KeySet::from_keys(["VIX", "DXY"]).unwrap();
        assert_eq!(set.toggle("DXY", false), Ok(true));
        assert!(set.toggle("VIX", false).is_err());
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["VIX"]);
        assert_eq!(set.toggle("TENY", true), Ok(true));
        assert_eq!(set.toggle("TENY", true), Ok(false));
    }

    #[test]
    fn removing_absent_key_is_noop() {
        let mut set = KeySet::single("GLD");
        assert_eq!(set.remove("TLT"), Ok(false));
    }

    #[test]
    fn empty_keyset_does_not_deserialize() {
        assert!(serde_json::from_str::<KeySet>("[]").is_err());
        let set: KeySet = serde_json::from_str(r#"["GLD","TLT"]"#).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn window_rejects_inversion() {
        assert!(DateWindow::new(10, 5).is_err());
        let mut window = DateWindow::new(0, 10 * DAY).unwrap();
        assert!(window.set_start(11 * DAY).is_err());
        assert_eq!(window.start_ms(), 0);
        assert!(window.set_end(-1).is_err());
        assert_eq!(window.end_ms(), 10 * DAY);
        window.set_start(10 * DAY).unwrap();
        assert_eq!(window.start_ms(), window.end_ms());
    }

    #[test]
    fn both_dates_are_checked_together() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let data = DateWindow::new(date_to_epoch_ms(date(2000, 1, 3)), date_to_epoch_ms(date(2025, 6, 30)))
            .unwrap();

        let later = data.with_dates(Some(date(2030, 1, 1)), Some(date(2030, 6, 1))).unwrap();
        assert_eq!(later.start_date(), Some(date(2030, 1, 1)));
        assert_eq!(later.end_date(), Some(date(2030, 6, 1)));

        let earlier = data.with_dates(Some(date(1998, 1, 1)), Some(date(1998, 6, 1))).unwrap();
        assert_eq!(earlier.end_date(), Some(date(1998, 6, 1)));

        let start_only = data.with_dates(Some(date(2010, 1, 1)), None).unwrap();
        assert_eq!(start_only.end_ms(), data.end_ms());

        assert!(matches!(
            data.with_dates(Some(date(2030, 1, 1)), None),
            Err(SelectionError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn window_contains_both_bounds() {
        let window = DateWindow::new(100, 200).unwrap();
        assert!(window.contains(100));
        assert!(window.contains(200));
        assert!(!window.contains(99));
        assert!(!window.contains(201));
    }

    #[test]
    fn window_from_bounds_uses_min_and_max() {
        let window = DateWindow::from_series_bounds([30, 10, 20], 0);
        assert_eq!((window.start_ms(), window.end_ms()), (10, 30));
    }

    #[test]
    fn window_without_data_trails_now() {
        let now = 1_700_000_000_000;
        let window = DateWindow::from_series_bounds(std::iter::empty(), now);
        assert_eq!(window.end_ms(), now);
        assert_eq!(window.end_ms() - window.start_ms(), 365 * DAY);
    }

    #[test]
    fn default_selection_matches_dashboard_defaults() {
        let selection = SelectionState::default();
        assert!(selection.macros.contains("TENY"));
        assert!(!selection.macros.contains("OIL"));
        assert_eq!(selection.markets.len(), 5);
        assert!(selection.rebase && selection.smooth_lines && selection.show_annotations);
        assert_eq!(selection.market_scale(), AxisScale::Linear);
    }

    #[test]
    fn unknown_keys_are_dropped_on_restore() {
        let mut selection = SelectionState::default();
        selection.macros = KeySet::from_keys(["VIX", "GONE"]).unwrap();
        selection.markets = KeySet::single("DELISTED");
        let restored = selection.retain_known();
        assert_eq!(restored.macros.iter().collect::<Vec<_>>(), vec!["VIX"]);
        assert_eq!(restored.markets, SelectionState::default().markets);
    }

    #[test]
    fn persisted_selection_omits_window() {
        let json = serde_json::to_string(&SelectionState::default()).unwrap();
        assert!(!json.contains("window"));
        let restored: SelectionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.macros, SelectionState::default().macros);
    }
}
