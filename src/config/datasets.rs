//! Dataset names, lookup paths and the advisories shown when loading degrades.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum DatasetName {
    Prices,
    Macro,
    Events,
}

impl DatasetName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn file_name(self) -> String {
        format!("{}.json", self.as_str())
    }
}

pub struct DatasetConfig {
    /// Directories tried in order; the first readable file wins
    pub search_dirs: &'static [&'static str],
    /// Bundled sample, used on wasm32 and as the per-dataset fallback
    pub embedded_sample: &'static str,
    pub msg_unavailable: &'static str,
    pub msg_fallback: &'static str,
}

pub const DATASETS: DatasetConfig = DatasetConfig {
    search_dirs: &["data", "../data", "."],
    embedded_sample: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sample_data.json")),
    msg_unavailable: "Unable to load {name} dataset from the bundled data directory.",
    msg_fallback: "Live {name} feed unavailable. Showing cached sample.",
};

impl DatasetConfig {
    pub fn unavailable_message(&self, name: DatasetName) -> String {
        self.msg_unavailable.replace("{name}", name.as_str())
    }

    pub fn fallback_message(&self, name: DatasetName) -> String {
        self.msg_fallback.replace("{name}", name.as_str())
    }
}
