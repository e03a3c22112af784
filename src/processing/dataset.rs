//! Point-of-interest datasets
//!
//! Two JSON shapes are accepted: a plain list of `{name, lat, lon, color?}`
//! records, and a country list of `{name: {common}, latlng: [lat, lon]}`
//! records as served by public country-information APIs.

use crate::core::PointOfInterest;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Colours assigned cyclically to dataset entries without one
pub const MARKER_PALETTE: [&str; 7] = [
    "#f87171", "#fb923c", "#fbbf24", "#34d399", "#60a5fa", "#a78bfa", "#f472b6",
];

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("dataset entry {index} has a non-finite coordinate")]
    InvalidCoordinate { index: usize },
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(default)]
    name: Option<CountryName>,
    #[serde(default)]
    latlng: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: Option<String>,
}

/// Parse a plain list of points of interest
pub fn parse_poi_list(json: &str) -> Result<Vec<PointOfInterest>, DatasetError> {
    let pois: Vec<PointOfInterest> = serde_json::from_str(json)?;

    if let Some(index) = pois
        .iter()
        .position(|p| !p.point.latitude.is_finite() || !p.point.longitude.is_finite())
    {
        return Err(DatasetError::InvalidCoordinate { index });
    }

    debug!(count = pois.len(), "parsed point-of-interest list");
    Ok(pois)
}

/// Parse a country dataset, colouring entries from [`MARKER_PALETTE`]
///
/// Entries without coordinates are placed at (0, 0); entries without a
/// name get an empty one.
pub fn parse_country_dataset(json: &str) -> Result<Vec<PointOfInterest>, DatasetError> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;

    let pois = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let name = record.name.and_then(|n| n.common).unwrap_or_default();
            let (lat, lon) = match record.latlng.as_deref() {
                Some([lat, lon, ..]) => (*lat, *lon),
                _ => {
                    warn!(index = i, name = %name, "country without coordinates, placing at origin");
                    (0.0, 0.0)
                }
            };
            PointOfInterest::new(name, lat, lon).with_color(MARKER_PALETTE[i % MARKER_PALETTE.len()])
        })
        .collect::<Vec<_>>();

    debug!(count = pois.len(), "parsed country dataset");
    Ok(pois)
}
