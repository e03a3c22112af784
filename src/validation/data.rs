//! Input sanitation for callers of the math core
//!
//! The math functions accept anything and propagate NaN. Callers that
//! ingest untrusted coordinates (datasets, config files, sensor adapters)
//! use these checks before handing data over.

use crate::core::{GeoPoint, PointOfInterest, PositionFix};
use tracing::warn;

/// Reason a coordinate was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateIssue {
    NonFinite,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    NegativeAccuracy(f64),
}

pub struct CoordinateValidator;

impl CoordinateValidator {
    pub fn validate_point(point: &GeoPoint) -> Result<(), CoordinateIssue> {
        if !point.latitude.is_finite() || !point.longitude.is_finite() {
            return Err(CoordinateIssue::NonFinite);
        }
        if !(-90.0..=90.0).contains(&point.latitude) {
            return Err(CoordinateIssue::LatitudeOutOfRange(point.latitude));
        }
        if !(-180.0..=180.0).contains(&point.longitude) {
            return Err(CoordinateIssue::LongitudeOutOfRange(point.longitude));
        }
        Ok(())
    }

    pub fn validate_fix(fix: &PositionFix) -> Result<(), CoordinateIssue> {
        Self::validate_point(&fix.point)?;
        if !fix.accuracy_m.is_finite() {
            return Err(CoordinateIssue::NonFinite);
        }
        if fix.accuracy_m < 0.0 {
            return Err(CoordinateIssue::NegativeAccuracy(fix.accuracy_m));
        }
        Ok(())
    }

    /// Keep only points of interest with valid coordinates
    pub fn retain_valid(pois: Vec<PointOfInterest>) -> Vec<PointOfInterest> {
        pois.into_iter()
            .filter(|poi| match Self::validate_point(&poi.point) {
                Ok(()) => true,
                Err(issue) => {
                    warn!(name = %poi.name, ?issue, "dropping point of interest");
                    false
                }
            })
            .collect()
    }
}
