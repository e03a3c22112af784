//! Core data types for the overlay system

use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Named point of interest, read-only for the length of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    #[serde(flatten)]
    pub point: GeoPoint,
    /// CSS-style colour or icon reference used by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(latitude, longitude),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Device orientation, heading clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrientationSample {
    /// Degrees in [0, 360)
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl OrientationSample {
    pub fn new(heading: f64, pitch: f64, roll: f64) -> Self {
        Self { heading, pitch, roll }
    }
}

/// Position reported by a geolocation source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub point: GeoPoint,
    /// Horizontal accuracy radius (m)
    pub accuracy_m: f64,
    pub timestamp_ms: u64,
    #[serde(default)]
    pub altitude_m: Option<f64>,
    #[serde(default)]
    pub altitude_accuracy_m: Option<f64>,
    #[serde(default)]
    pub speed_mps: Option<f64>,
    /// Direction of travel, not device orientation
    #[serde(default)]
    pub heading_deg: Option<f64>,
}

impl PositionFix {
    pub fn new(point: GeoPoint, accuracy_m: f64, timestamp_ms: u64) -> Self {
        Self {
            point,
            accuracy_m,
            timestamp_ms,
            altitude_m: None,
            altitude_accuracy_m: None,
            speed_mps: None,
            heading_deg: None,
        }
    }

    pub fn with_altitude(mut self, altitude_m: f64, altitude_accuracy_m: Option<f64>) -> Self {
        self.altitude_m = Some(altitude_m);
        self.altitude_accuracy_m = altitude_accuracy_m;
        self
    }

    pub fn with_speed(mut self, speed_mps: f64) -> Self {
        self.speed_mps = Some(speed_mps);
        self
    }

    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = Some(heading_deg);
        self
    }
}

/// Per-frame placement of a point of interest on the HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedMarker {
    pub poi: PointOfInterest,
    pub bearing_deg: f64,
    pub distance_m: f64,
    /// Signed angle from the heading to the bearing, in [-180, 180)
    pub diff_deg: f64,
    /// Horizontal offset from the HUD centre; zero when not visible
    pub screen_offset: f64,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poi_json_shape() {
        let poi: PointOfInterest =
            serde_json::from_str(r#"{"name":"Nice","lat":43.7009,"lon":7.2683}"#).unwrap();

        assert_eq!(poi.name, "Nice");
        assert_eq!(poi.point, GeoPoint::new(43.7009, 7.2683));
        assert!(poi.color.is_none());

        let json = serde_json::to_value(poi.with_color("#7dd3fc")).unwrap();
        assert_eq!(json["lat"], 43.7009);
        assert_eq!(json["color"], "#7dd3fc");
    }

    #[test]
    fn test_position_fix_builder() {
        let fix = PositionFix::new(GeoPoint::new(1.0, 2.0), 5.0, 42)
            .with_altitude(120.0, Some(3.0))
            .with_speed(1.5);

        assert_eq!(fix.altitude_m, Some(120.0));
        assert_eq!(fix.altitude_accuracy_m, Some(3.0));
        assert_eq!(fix.speed_mps, Some(1.5));
        assert!(fix.heading_deg.is_none());
    }
}
