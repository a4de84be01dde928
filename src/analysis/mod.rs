// Data-preparation pipeline: raw datasets in, chart-ready series and event clusters out.
mod assembler;
mod event_clusterer;
mod normalizer;
mod range_filter;

pub use assembler::{assemble_category, build_frame, market_axis, split_clusters};
pub use event_clusterer::{cluster_events, cluster_label};
pub use normalizer::{normalize, rebase_series, to_pairs};
pub use range_filter::filter_by_window;
