use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::domain::{SeriesMap, TimePoint};

/// Static display identity of one dataset key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorDefinition {
    pub key: &'static str,
    pub label: &'static str,
    /// HTML hex colour, e.g. "#22c55e"
    pub color: &'static str,
    /// Alternative dataset keys, tried in order after `key`
    pub aliases: &'static [&'static str],
}

impl IndicatorDefinition {
    pub const fn new(key: &'static str, label: &'static str, color: &'static str) -> Self {
        Self {
            key,
            label,
            color,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Raw series for this definition. An absent key is an empty series, never an error.
    pub fn lookup<'a>(&self, dataset: &'a SeriesMap) -> &'a [TimePoint] {
        std::iter::once(self.key)
            .chain(self.aliases.iter().copied())
            .find_map(|key| dataset.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum SeriesCategory {
    Macro,
    Market,
}

impl SeriesCategory {
    /// Market series follow the global flag; macro series are never rebased.
    pub fn rebase_applies(self, global_rebase: bool) -> bool {
        match self {
            Self::Macro => false,
            Self::Market => global_rebase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> SeriesMap {
        let mut map = SeriesMap::new();
        map.insert("^IXIC".into(), vec![TimePoint::new(1, Some(10.0))]);
        map.insert("GLD".into(), vec![TimePoint::new(1, Some(5.0))]);
        map
    }

    #[test]
    fn lookup_prefers_key_then_aliases() {
        let data = dataset();
        let nasdaq = IndicatorDefinition::new("^NDX", "NASDAQ 100", "#3b82f6").with_aliases(&["^IXIC"]);
        assert_eq!(nasdaq.lookup(&data), &[TimePoint::new(1, Some(10.0))]);
        let gold = IndicatorDefinition::new("GLD", "Gold (GLD)", "#facc15");
        assert_eq!(gold.lookup(&data).len(), 1);
    }

    #[test]
    fn missing_key_is_empty() {
        let oil = IndicatorDefinition::new("OIL", "WTI Crude", "#a855f7");
        assert!(oil.lookup(&dataset()).is_empty());
    }

    #[test]
    fn macro_series_never_rebase() {
        assert!(!SeriesCategory::Macro.rebase_applies(true));
        assert!(SeriesCategory::Market.rebase_applies(true));
        assert!(!SeriesCategory::Market.rebase_applies(false));
    }
}
