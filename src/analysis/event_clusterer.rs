use crate::config::{DF, GapDays};
use crate::domain::Event;
use crate::models::EventCluster;

/// Greedy single pass over events sorted by date.
///
/// An event joins the most recent cluster when it lies within `min_gap` of that
/// cluster's *first* event; otherwise it opens a new cluster. The anchor never moves,
/// so a run of events each just under the gap from its neighbour still splits once it
/// drifts past the gap from the anchor.
pub fn cluster_events(events: &[Event], min_gap: GapDays) -> Vec<EventCluster> {
    let gap_ms = min_gap.as_millis();

    let mut sorted: Vec<&Event> = events.iter().collect();
    // Stable: same-day events keep their input order
    sorted.sort_by_key(|event| event.timestamp_ms);

    let mut clusters: Vec<EventCluster> = Vec::new();
    for event in sorted {
        match clusters.last_mut() {
            Some(cluster) if (event.timestamp_ms - cluster.timestamp_ms).abs() <= gap_ms => {
                cluster.events.push(event.clone());
            }
            _ => clusters.push(EventCluster {
                timestamp_ms: event.timestamp_ms,
                label: String::new(),
                events: vec![event.clone()],
            }),
        }
    }

    for cluster in &mut clusters {
        cluster.label = cluster_label(&cluster.events);
    }

    #[cfg(debug_assertions)]
    if DF.log_clusters {
        log::info!(
            "🗂️ Clustered {} events into {} clusters (gap {})",
            events.len(),
            clusters.len(),
            min_gap
        );
    }

    clusters
}

/// First title, plus `" +N more"` when the cluster holds N further events.
pub fn cluster_label(events: &[Event]) -> String {
    match events {
        [] => String::new(),
        [only] => only.title.clone(),
        [first, rest @ ..] => format!("{} +{} more", first.title, rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn day(offset: u64, title: &str) -> Event {
        let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        Event::new(epoch + Days::new(offset), title, "")
    }

    fn member_titles(cluster: &EventCluster) -> Vec<&str> {
        cluster.events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn events_within_gap_of_anchor_merge() {
        let events = vec![day(0, "a"), day(5, "b"), day(9, "c"), day(30, "d")];
        let clusters = cluster_events(&events, GapDays::new(10));
        assert_eq!(clusters.len(), 2);
        assert_eq!(member_titles(&clusters[0]), vec!["a", "b", "c"]);
        assert_eq!(clusters[0].label, "a +2 more");
        assert_eq!(member_titles(&clusters[1]), vec!["d"]);
        assert_eq!(clusters[1].label, "d");
    }

    #[test]
    fn gap_is_measured_from_anchor_not_previous_event() {
        let events = vec![day(0, "a"), day(9, "b"), day(18, "c"), day(27, "d")];
        let clusters = cluster_events(&events, GapDays::new(10));
        assert_eq!(clusters.len(), 2);
        assert_eq!(member_titles(&clusters[0]), vec!["a", "b"]);
        assert_eq!(member_titles(&clusters[1]), vec!["c", "d"]);
        assert_eq!(clusters[1].timestamp_ms, day(18, "").timestamp_ms);
    }

    #[test]
    fn exact_gap_is_inclusive() {
        let clusters = cluster_events(&[day(0, "a"), day(10, "b"), day(21, "c")], GapDays::new(10));
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].label, "a +1 more");
    }

    #[test]
    fn unsorted_input_is_sorted_first() {
        let events = vec![day(30, "late"), day(0, "early"), day(4, "mid")];
        let clusters = cluster_events(&events, GapDays::DEFAULT);
        assert_eq!(member_titles(&clusters[0]), vec!["early", "mid"]);
        assert_eq!(member_titles(&clusters[1]), vec!["late"]);
    }

    #[test]
    fn same_day_events_keep_input_order() {
        let clusters = cluster_events(&[day(3, "x"), day(3, "y")], GapDays::DEFAULT);
        assert_eq!(member_titles(&clusters[0]), vec!["x", "y"]);
    }

    #[test]
    fn zero_gap_only_merges_same_day() {
        let clusters = cluster_events(&[day(0, "a"), day(0, "b"), day(1, "c")], GapDays::new(0));
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn no_events_no_clusters() {
        assert!(cluster_events(&[], GapDays::DEFAULT).is_empty());
    }
}
