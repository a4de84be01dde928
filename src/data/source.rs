use anyhow::{Context, Result};
use async_trait::async_trait;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::config::{DATASETS, DatasetName};

/// Somewhere a named dataset can be read from, as raw JSON text.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Short human-readable name, logged and shown in the report.
    fn signature(&self) -> &'static str;

    /// `Ok(None)` when this source simply does not have the dataset.
    async fn fetch(&self, name: DatasetName) -> Result<Option<String>>;
}

// ============================================================================
// DirectorySource: <dir>/<name>.json across a list of directories
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub struct DirectorySource {
    dirs: Vec<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectorySource {
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    /// Configured search dirs, with `preferred` (e.g. from `--data-dir`) tried first.
    pub fn with_defaults(preferred: Option<PathBuf>) -> Self {
        let dirs = preferred
            .into_iter()
            .chain(DATASETS.search_dirs.iter().map(PathBuf::from))
            .collect();
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl DatasetSource for DirectorySource {
    fn signature(&self) -> &'static str {
        "Data Directory"
    }

    async fn fetch(&self, name: DatasetName) -> Result<Option<String>> {
        for dir in &self.dirs {
            let path = dir.join(name.file_name());
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => {
                    log::debug!("📂 {} read from {}", name, path.display());
                    return Ok(Some(text));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    // Unreadable file: keep walking the chain
                    log::debug!("Skipping {}: {}", path.display(), e);
                }
            }
        }
        Ok(None)
    }
}

// ============================================================================
// EmbeddedSample: the sample set compiled into the binary
// ============================================================================

pub struct EmbeddedSample {
    text: &'static str,
}

impl EmbeddedSample {
    pub fn new() -> Self {
        Self {
            text: DATASETS.embedded_sample,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_text(text: &'static str) -> Self {
        Self { text }
    }
}

impl Default for EmbeddedSample {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetSource for EmbeddedSample {
    fn signature(&self) -> &'static str {
        "Embedded Sample"
    }

    async fn fetch(&self, name: DatasetName) -> Result<Option<String>> {
        let bundle: serde_json::Value =
            serde_json::from_str(self.text).context("Embedded sample is not valid JSON")?;
        Ok(bundle.get(name.as_str()).map(|section| section.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_sample_has_every_dataset() {
        let sample = EmbeddedSample::new();
        for name in [DatasetName::Prices, DatasetName::Macro, DatasetName::Events] {
            assert!(sample.fetch(name).await.unwrap().is_some(), "{name}");
        }
    }

    #[tokio::test]
    async fn embedded_sample_missing_section_is_none() {
        let sample = EmbeddedSample::from_text(r#"{"prices":{}}"#);
        assert_eq!(sample.fetch(DatasetName::Prices).await.unwrap().as_deref(), Some("{}"));
        assert!(sample.fetch(DatasetName::Events).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn directory_source_walks_dirs_in_order() {
        let root = std::env::temp_dir().join(format!("mt-src-{}", std::process::id()));
        let first = root.join("first");
        let second = root.join("second");
        std::fs::create_dir_all(&first).unwrap();
        std::fs::create_dir_all(&second).unwrap();
        std::fs::write(second.join("macro.json"), "{}").unwrap();

        let source = DirectorySource::new(vec![root.join("absent"), first, second]);
        assert_eq!(source.fetch(DatasetName::Macro).await.unwrap().as_deref(), Some("{}"));
        assert!(source.fetch(DatasetName::Prices).await.unwrap().is_none());

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn preferred_dir_goes_first() {
        let source = DirectorySource::with_defaults(Some(PathBuf::from("/srv/feeds")));
        assert_eq!(source.dirs()[0], PathBuf::from("/srv/feeds"));
        assert_eq!(source.dirs().len(), DATASETS.search_dirs.len() + 1);
    }
}
