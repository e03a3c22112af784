//! State tracking and dataset ingestion

pub mod tracker;
pub mod dataset;

pub use tracker::{OrientationStateTracker, TrackerSnapshot};
pub use dataset::{parse_poi_list, parse_country_dataset, DatasetError, MARKER_PALETTE};
