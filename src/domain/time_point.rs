use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One observation. `v = None` is a missing reading at that timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Epoch milliseconds (UTC)
    pub t: i64,
    pub v: Option<f64>,
}

impl TimePoint {
    pub const fn new(t: i64, v: Option<f64>) -> Self {
        Self { t, v }
    }

    /// Non-null and not NaN.
    #[inline]
    pub fn valid_value(&self) -> Option<f64> {
        self.v.filter(|v| !v.is_nan())
    }
}

/// Chronologically ordered observations for one indicator or asset.
pub type Series = Vec<TimePoint>;

/// Dataset keyed by indicator/asset identifier, e.g. "VIX" or "^GSPC".
pub type SeriesMap = BTreeMap<String, Series>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_values_deserialize_as_none() {
        let pts: Series = serde_json::from_str(r#"[{"t":1,"v":null},{"t":2,"v":3.5}]"#).unwrap();
        assert_eq!(pts, vec![TimePoint::new(1, None), TimePoint::new(2, Some(3.5))]);
    }

    #[test]
    fn nan_is_not_a_valid_value() {
        assert_eq!(TimePoint::new(0, Some(f64::NAN)).valid_value(), None);
        assert_eq!(TimePoint::new(0, None).valid_value(), None);
        assert_eq!(TimePoint::new(0, Some(2.0)).valid_value(), Some(2.0));
    }
}
