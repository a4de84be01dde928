#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the headless tools and tests)
pub use app::App;
pub use config::{GapDays, PERSISTENCE, TIMELINE};
pub use data::{DatasetSource, EmbeddedSample, LoadReport, Provenance, fetch_datasets, load_datasets};
pub use domain::{Event, Series, SeriesMap, TimePoint};
pub use engine::TimelineEngine;
pub use models::{Datasets, SelectionState, TimelineFrame};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding prices.json, macro.json and events.json (searched before the defaults)
    #[arg(long)]
    pub data_dir: Option<std::path::PathBuf>,

    /// Show missing datasets as empty instead of substituting the bundled sample
    #[arg(long, default_value_t = false)]
    pub no_sample_fallback: bool,

    /// Events closer than this many days to a cluster's anchor join that cluster
    #[arg(long, default_value_t = TIMELINE.min_gap_days.days())]
    pub min_gap_days: u32,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            data_dir: None,
            no_sample_fallback: false,
            min_gap_days: TIMELINE.min_gap_days.days(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
