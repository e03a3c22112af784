//! Great-circle distance and bearing on a spherical Earth
//!
//! All functions are total: malformed input (NaN, out-of-range degrees)
//! propagates through the arithmetic instead of raising an error.

use crate::core::{GeoPoint, EARTH_RADIUS_M};

/// Haversine distance between two points (m)
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Initial compass bearing from `a` towards `b`, in [0, 360)
///
/// The value is arbitrary when both points coincide.
pub fn initial_bearing_deg(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Total length of a polyline, summing each leg (m)
pub fn path_length_meters(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|leg| distance_meters(&leg[0], &leg[1]))
        .sum()
}

/// Wrap an angle into [0, 360)
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
