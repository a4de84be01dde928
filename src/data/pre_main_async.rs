// Async code to run before the GUI has any data (so can't rely on gui app state)

use crate::Cli;
use crate::data::{DatasetSource, EmbeddedSample, LoadReport, load_datasets};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::DirectorySource;

/// Native: the data directories first, the embedded sample as per-dataset fallback
/// unless `--no-sample-fallback` was given.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_datasets(args: &Cli) -> LoadReport {
    let sources: Vec<Box<dyn DatasetSource>> =
        vec![Box::new(DirectorySource::with_defaults(args.data_dir.clone()))];
    let sample = EmbeddedSample::new();
    let fallback: Option<&dyn DatasetSource> = if args.no_sample_fallback {
        None
    } else {
        Some(&sample)
    };

    let report = load_datasets(&sources, fallback).await;
    log_report(&report);
    report
}

/// Web: there is no filesystem, the embedded sample is the data.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_datasets(_args: &Cli) -> LoadReport {
    let sources: Vec<Box<dyn DatasetSource>> = vec![Box::new(EmbeddedSample::new())];
    let report = load_datasets(&sources, None).await;
    log_report(&report);
    report
}

fn log_report(report: &LoadReport) {
    log::info!(
        "📦 Datasets ready ({}): {} series points, {} events",
        report.signature,
        report.datasets.point_count(),
        report.datasets.events.len()
    );
    if report.dropped_events > 0 {
        log::warn!("{} events dropped for unparseable entries", report.dropped_events);
    }
    if report.dropped_points > 0 {
        log::warn!("{} series points dropped as malformed", report.dropped_points);
    }
}
