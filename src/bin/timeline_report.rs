use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabled::{Table, Tabled};

use macro_timeline::analysis::build_frame;
use macro_timeline::data::{DatasetSource, DirectorySource, EmbeddedSample, load_datasets};
use macro_timeline::models::{ChartSeries, DateWindow, SelectionState};
use macro_timeline::ui::utils::{format_number, truncate_label};
use macro_timeline::utils::{epoch_ms_to_date_string, now_timestamp_ms, parse_calendar_date};
use macro_timeline::{GapDays, TIMELINE};

/// Prints the series and event clusters the dashboard would draw for a window.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the datasets (searched before the defaults)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Window start, YYYY-MM-DD (defaults to the earliest data point)
    #[arg(long)]
    start: Option<String>,

    /// Window end, YYYY-MM-DD (defaults to the latest data point)
    #[arg(long)]
    end: Option<String>,

    /// Show raw market values instead of rebasing to 100
    #[arg(long, default_value_t = false)]
    no_rebase: bool,

    #[arg(long, default_value_t = TIMELINE.min_gap_days.days())]
    min_gap_days: u32,
}

#[derive(Tabled)]
struct SeriesRow {
    #[tabled(rename = "Axis")]
    axis: String,
    #[tabled(rename = "Series")]
    name: &'static str,
    #[tabled(rename = "Points")]
    points: usize,
    #[tabled(rename = "First")]
    first: String,
    #[tabled(rename = "Last")]
    last: String,
}

#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Events")]
    count: usize,
}

impl SeriesRow {
    fn from_series(series: &ChartSeries) -> Self {
        Self {
            axis: format!("{:?}", series.axis),
            name: series.name,
            points: series.data.len(),
            first: format_number(series.values().next()),
            last: format_number(series.values().last()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let sources: Vec<Box<dyn DatasetSource>> =
        vec![Box::new(DirectorySource::with_defaults(args.data_dir.clone()))];
    let sample = EmbeddedSample::new();
    let report = load_datasets(&sources, Some(&sample)).await;
    for message in &report.messages {
        log::warn!("{}", message);
    }
    log::info!("📦 Loaded ({})", report.signature);

    let start = args.start.as_deref().map(parse_calendar_date).transpose()?;
    let end = args.end.as_deref().map(parse_calendar_date).transpose()?;
    let window = DateWindow::from_series_bounds(report.datasets.all_timestamps(), now_timestamp_ms())
        .with_dates(start, end)?;

    let mut selection = SelectionState::default().with_window(window);
    selection.rebase = !args.no_rebase;

    let frame = build_frame(&report.datasets, &selection, GapDays::new(args.min_gap_days));

    println!("Window: {}  |  {}", frame.window, frame.market_axis.title);

    let series_rows: Vec<SeriesRow> = frame
        .macro_series
        .iter()
        .chain(&frame.market_series)
        .map(SeriesRow::from_series)
        .collect();
    println!("{}", Table::new(series_rows));

    let cluster_rows: Vec<ClusterRow> = frame
        .clusters
        .iter()
        .map(|c| ClusterRow {
            date: epoch_ms_to_date_string(c.timestamp_ms),
            label: truncate_label(&c.label, 48),
            count: c.events.len(),
        })
        .collect();
    println!("{}", Table::new(cluster_rows));

    Ok(())
}
