use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::{Path, PathBuf};

use macro_timeline::config::DatasetName;
use macro_timeline::data::sample_gen::{
    MACRO_RECIPES, PRICE_RECIPES, generate_payload, last_business_day,
};
use macro_timeline::data::{DatasetSource, DirectorySource, EmbeddedSample, write_dataset};
use macro_timeline::domain::RawEvent;
use macro_timeline::utils::parse_calendar_date;

/// Writes prices.json, macro.json and events.json built from anchored random walks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output directory (created if missing)
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Last calendar date to generate, YYYY-MM-DD (defaults to the most recent business day)
    #[arg(long)]
    end: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let end: NaiveDate = match &args.end {
        Some(s) => parse_calendar_date(s)?,
        None => last_business_day(Utc::now().date_naive()),
    };

    log::info!("🚀 Generating sample datasets through {} into {}", end, args.out_dir.display());

    let prices = generate_payload(PRICE_RECIPES, end).context("Failed to generate prices")?;
    let macro_series = generate_payload(MACRO_RECIPES, end).context("Failed to generate macro")?;
    let events = load_events(&args.out_dir).await?;

    for (name, path) in [
        (DatasetName::Prices, write_dataset(&args.out_dir, DatasetName::Prices, &prices)?),
        (DatasetName::Macro, write_dataset(&args.out_dir, DatasetName::Macro, &macro_series)?),
        (DatasetName::Events, write_dataset(&args.out_dir, DatasetName::Events, &events)?),
    ] {
        log::info!("✅ Wrote {} to {}", name, path.display());
    }

    log::info!(
        "Done: {} price series, {} macro series, {} events",
        prices.len(),
        macro_series.len(),
        events.len()
    );
    Ok(())
}

/// Keeps a hand-edited events.json in the output directory, otherwise uses the bundled events.
async fn load_events(out_dir: &Path) -> Result<Vec<RawEvent>> {
    let existing = DirectorySource::new(vec![out_dir.to_path_buf()]);
    let text = match existing.fetch(DatasetName::Events).await? {
        Some(text) => {
            log::info!("Keeping existing events from {}", out_dir.display());
            text
        }
        None => EmbeddedSample::new()
            .fetch(DatasetName::Events)
            .await?
            .context("Embedded sample has no events")?,
    };
    serde_json::from_str(&text).context("events.json is not a list of events")
}
