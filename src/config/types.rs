//! Small value types shared by the config and the pipeline.

use eframe::egui::ThemePreference;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::utils::TimeUtils;

/// Colour theme preference. Cycles Dark -> Light -> Auto -> Dark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, Default,
)]
pub enum ThemeMode {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Auto,
            Self::Auto => Self::Dark,
        }
    }

    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Auto => ThemePreference::System,
            Self::Light => ThemePreference::Light,
            Self::Dark => ThemePreference::Dark,
        }
    }
}

/// Value-axis scale of the market panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Display, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    pub fn from_log_flag(log_scale: bool) -> Self {
        if log_scale { Self::Log } else { Self::Linear }
    }
}

/// Minimum gap (whole days) between cluster anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GapDays(u32);

impl GapDays {
    pub const DEFAULT: Self = Self(10);

    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    #[inline]
    pub const fn days(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        TimeUtils::days_to_ms(self.0 as i64)
    }
}

impl Default for GapDays {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GapDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.0)
    }
}
