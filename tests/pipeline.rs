use chrono::NaiveDate;

use macro_timeline::analysis::{build_frame, cluster_events, filter_by_window, normalize};
use macro_timeline::config::DatasetName;
use macro_timeline::domain::SeriesCategory;
use macro_timeline::models::{DateWindow, SelectionError};
use macro_timeline::utils::{TimeUtils, date_to_epoch_ms};
use macro_timeline::{
    DatasetSource, Datasets, EmbeddedSample, Event, GapDays, Provenance, SelectionState, SeriesMap,
    TimePoint, TimelineEngine, load_datasets,
};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(n)
}

fn event(n: i64, title: &str) -> Event {
    Event::new(day(n), title, "")
}

fn sample_datasets() -> Datasets {
    let mut prices = SeriesMap::new();
    prices.insert(
        "^GSPC".into(),
        (0..30)
            .map(|i| TimePoint::new(date_to_epoch_ms(day(i)), Some(3000.0 + i as f64)))
            .collect(),
    );
    prices.insert(
        "GLD".into(),
        vec![
            TimePoint::new(date_to_epoch_ms(day(2)), None),
            TimePoint::new(date_to_epoch_ms(day(3)), Some(150.0)),
        ],
    );
    let mut macro_series = SeriesMap::new();
    macro_series.insert(
        "VIX".into(),
        (0..30)
            .map(|i| TimePoint::new(date_to_epoch_ms(day(i)), Some(15.0 + (i % 4) as f64)))
            .collect(),
    );
    let events = vec![
        event(20, "Late"),
        event(0, "Start"),
        event(4, "Follow-up"),
    ];
    Datasets::new(prices, macro_series, events)
}

fn full_window(datasets: &Datasets) -> DateWindow {
    DateWindow::from_series_bounds(datasets.all_timestamps(), 0)
}

#[test]
fn window_bounds_are_inclusive_end_to_end() {
    let series: Vec<TimePoint> = (0..5).map(|i| TimePoint::new(i * 10, Some(i as f64))).collect();
    let window = DateWindow::new(10, 30).unwrap();
    let kept: Vec<i64> = filter_by_window(&series, &window).iter().map(|p| p.t).collect();
    assert_eq!(kept, vec![10, 20, 30]);
}

#[test]
fn rebase_uses_first_valid_value() {
    let series = vec![
        TimePoint::new(0, None),
        TimePoint::new(1, Some(50.0)),
        TimePoint::new(2, Some(100.0)),
    ];
    assert_eq!(
        normalize(&series, true),
        vec![(0, None), (1, Some(100.0)), (2, Some(200.0))]
    );
    let all_null = vec![TimePoint::new(0, None), TimePoint::new(5, None)];
    assert_eq!(normalize(&all_null, true), vec![(0, None), (5, None)]);
}

#[test]
fn anchor_rule_splits_drifting_runs() {
    let gap = GapDays::DEFAULT;
    let events = vec![event(0, "a"), event(9, "b"), event(18, "c"), event(27, "d")];
    let clusters = cluster_events(&events, gap);
    let titles: Vec<Vec<&str>> = clusters
        .iter()
        .map(|c| c.events.iter().map(|e| e.title.as_str()).collect())
        .collect();
    assert_eq!(titles, vec![vec!["a", "b"], vec!["c", "d"]]);

    let events = vec![event(30, "w"), event(5, "y"), event(0, "x"), event(9, "z")];
    let clusters = cluster_events(&events, gap);
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].label, "x +2 more");
    assert_eq!(clusters[1].label, "w");
    assert_eq!(clusters[0].timestamp_ms + TimeUtils::days_to_ms(30), clusters[1].timestamp_ms);
}

#[test]
fn frame_follows_selection_and_is_repeatable() {
    let datasets = sample_datasets();
    let selection = SelectionState::default().with_window(full_window(&datasets));

    let first = build_frame(&datasets, &selection, GapDays::DEFAULT);
    let second = build_frame(&datasets, &selection, GapDays::DEFAULT);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let gld = first.market_series.iter().find(|s| s.key == "GLD").unwrap();
    assert_eq!(gld.data[0].1, None);
    assert_eq!(gld.data[1].1, Some(100.0));

    let vix = first.macro_series.iter().find(|s| s.key == "VIX").unwrap();
    assert_eq!(vix.data[0].1, Some(15.0), "macro series are never rebased");

    // Selected keys with no data still produce an (empty) series
    let dxy = first.macro_series.iter().find(|s| s.key == "DXY").unwrap();
    assert!(dxy.is_empty());

    assert_eq!(first.clusters.len(), 2);
    assert_eq!(first.clusters[0].label, "Start +1 more");
}

#[test]
fn window_past_the_data_gives_empty_series() {
    let datasets = sample_datasets();
    let window = full_window(&datasets)
        .with_dates(Some(day(400)), Some(day(500)))
        .unwrap();
    let frame = build_frame(&datasets, &SelectionState::default().with_window(window), GapDays::DEFAULT);

    assert!(!frame.market_series.is_empty());
    assert!(frame.market_series.iter().all(|s| s.is_empty()));
    assert!(frame.macro_series.iter().all(|s| s.is_empty()));
}

#[test]
fn removing_last_key_is_rejected() {
    let mut selection = SelectionState::default();
    let keys: Vec<String> = selection
        .keys(SeriesCategory::Macro)
        .iter()
        .map(str::to_owned)
        .collect();
    let (last, rest) = keys.split_last().unwrap();
    for key in rest {
        assert_eq!(selection.toggle_key(SeriesCategory::Macro, key, false), Ok(true));
    }
    assert!(matches!(
        selection.toggle_key(SeriesCategory::Macro, last, false),
        Err(SelectionError::LastMember { .. })
    ));
    assert_eq!(selection.keys(SeriesCategory::Macro).len(), 1);
    assert!(selection.keys(SeriesCategory::Macro).contains(last));
}

#[test]
fn empty_datasets_build_an_empty_frame() {
    let datasets = Datasets::default();
    let selection = SelectionState::default().with_window(full_window(&datasets));
    let frame = build_frame(&datasets, &selection, GapDays::DEFAULT);

    assert!(frame.macro_series.iter().all(|s| s.is_empty()));
    assert!(frame.market_series.iter().all(|s| s.is_empty()));
    assert!(frame.clusters.is_empty());
    assert!(cluster_events(&[], GapDays::DEFAULT).is_empty());
}

#[test]
fn engine_keeps_only_the_newest_request() {
    let datasets = sample_datasets();
    let window = full_window(&datasets);
    let mut engine = TimelineEngine::new(datasets, GapDays::DEFAULT);

    let mut raw = SelectionState::default().with_window(window);
    raw.rebase = false;
    engine.request(SelectionState::default().with_window(window));
    let newest = engine.request(raw);

    assert!(engine.update());
    assert_eq!(engine.frame_generation(), newest);
    let gld = engine
        .frame()
        .and_then(|f| f.market_series.iter().find(|s| s.key == "GLD"))
        .unwrap();
    assert_eq!(gld.data[1].1, Some(150.0));
}

#[tokio::test]
async fn embedded_sample_loads_every_dataset() {
    let sources: Vec<Box<dyn DatasetSource>> = vec![Box::new(EmbeddedSample::new())];
    let report = load_datasets(&sources, None).await;

    assert!(report.messages.is_empty());
    assert!(!report.used_fallback());
    assert!(report.provenance.iter().all(|(_, p)| *p == Provenance::Source("Embedded Sample")));
    assert!(report.datasets.prices.contains_key("^GSPC"));
    assert!(report.datasets.macro_series.contains_key("VIX"));
    assert!(report.datasets.events.iter().any(|e| e.title.contains("Lehman")));

    let window = DateWindow::from_series_bounds(report.datasets.all_timestamps(), 0);
    let frame = build_frame(&report.datasets, &SelectionState::default().with_window(window), GapDays::DEFAULT);
    assert!(!frame.clusters.is_empty());
    assert!(frame.market_series.iter().any(|s| !s.is_empty()));

    let sample = EmbeddedSample::new();
    assert!(sample.fetch(DatasetName::Events).await.unwrap().is_some());
}
