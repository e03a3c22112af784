//! Human-readable and serialized output for HUD frames
//!
//! Text output is what a HUD paints next to markers and in its status
//! panel; JSON output is for logging frames or handing them to a renderer
//! in another process.

use crate::api::overlay::OverlayFrame;
use crate::core::{PointOfInterest, PositionFix, ProjectedMarker, DEFAULT_MARKER_COLOR};
use serde::Serialize;

/// Placeholder shown for values the platform did not report
pub const MISSING_VALUE: &str = "—";

/// Distance in kilometres with `digits` decimals
pub fn format_distance_km(distance_m: f64, digits: usize) -> String {
    format!("{:.*} km", digits, distance_m / 1000.0)
}

/// Speed in m/s with the km/h equivalent
pub fn format_speed(speed_mps: Option<f64>) -> String {
    match speed_mps {
        Some(v) => format!("{:.2} m/s ({:.1} km/h)", v, v * 3.6),
        None => MISSING_VALUE.to_string(),
    }
}

fn format_meters(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1} m", v))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

/// Colour a renderer should use for a marker
pub fn marker_color(poi: &PointOfInterest) -> &str {
    poi.color.as_deref().unwrap_or(DEFAULT_MARKER_COLOR)
}

/// Two-line label drawn under a HUD marker
pub fn marker_label(marker: &ProjectedMarker) -> String {
    format!("{}\n{}", marker.poi.name, format_distance_km(marker.distance_m, 1))
}

/// Orientation readout for the status panel
pub fn status_line(heading: f64, pitch: f64) -> String {
    format!("heading: {:.0}°  pitch: {:.0}°", heading, pitch)
}

pub fn accuracy_line(accuracy_m: f64) -> String {
    format!("GPS ±{:.0} m", accuracy_m)
}

/// Textual rows describing one position fix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixReadout {
    pub latitude: String,
    pub longitude: String,
    pub altitude: String,
    pub accuracy: String,
    pub altitude_accuracy: String,
    pub speed: String,
    pub heading: String,
}

impl FixReadout {
    pub fn from_fix(fix: &PositionFix) -> Self {
        Self {
            latitude: format!("{:.6}", fix.point.latitude),
            longitude: format!("{:.6}", fix.point.longitude),
            altitude: format_meters(fix.altitude_m),
            accuracy: format_meters(Some(fix.accuracy_m)),
            altitude_accuracy: format_meters(fix.altitude_accuracy_m),
            speed: format_speed(fix.speed_mps),
            heading: fix
                .heading_deg
                .map(|h| format!("{:.0}°", h))
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
        }
    }

    /// Label/value pairs in display order
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("Latitude", self.latitude.as_str()),
            ("Longitude", self.longitude.as_str()),
            ("Altitude", self.altitude.as_str()),
            ("Accuracy", self.accuracy.as_str()),
            ("Altitude accuracy", self.altitude_accuracy.as_str()),
            ("Speed", self.speed.as_str()),
            ("Heading", self.heading.as_str()),
        ]
    }
}

/// Plain-text frame summary
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    include_hidden: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also list markers outside the field of view
    pub fn with_hidden(mut self) -> Self {
        self.include_hidden = true;
        self
    }

    pub fn format_text(&self, frame: &OverlayFrame) -> String {
        let mut out = match frame.heading {
            Some(heading) => status_line(heading, frame.pitch),
            None => "waiting for orientation".to_string(),
        };
        match frame.accuracy_m {
            Some(acc) => {
                out.push_str("  ");
                out.push_str(&accuracy_line(acc));
            }
            None => out.push_str("  waiting for position"),
        }

        for marker in frame.markers.iter().filter(|m| self.include_hidden || m.visible) {
            out.push('\n');
            if marker.visible {
                out.push_str(&format!(
                    "  {:<12} x={:>7.1}  {}",
                    marker.poi.name,
                    frame.layout.screen_x(marker),
                    format_distance_km(marker.distance_m, 1)
                ));
            } else {
                out.push_str(&format!(
                    "  {:<12} off-screen ({:+.0}°)  {}",
                    marker.poi.name,
                    marker.diff_deg,
                    format_distance_km(marker.distance_m, 1)
                ));
            }
        }
        out
    }
}

/// JSON frame export
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, frame: &OverlayFrame) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(frame)
        } else {
            serde_json::to_string(frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::HudLayout;
    use crate::core::GeoPoint;

    fn marker(name: &str, diff_deg: f64, offset: f64, visible: bool) -> ProjectedMarker {
        ProjectedMarker {
            poi: PointOfInterest::new(name, 0.0, 0.0),
            bearing_deg: 0.0,
            distance_m: 159_594.0,
            diff_deg,
            screen_offset: offset,
            visible,
        }
    }

    fn frame() -> OverlayFrame {
        OverlayFrame {
            markers: vec![marker("Marseille", 4.0, 120.0, true), marker("Milan", 70.0, 0.0, false)],
            heading: Some(250.2),
            pitch: -3.2,
            accuracy_m: Some(11.8),
            layout: HudLayout::new(1000.0, 40.0),
        }
    }

    #[test]
    fn test_distance_and_speed() {
        assert_eq!(format_distance_km(159_594.0, 1), "159.6 km");
        assert_eq!(format_distance_km(2_340.0, 2), "2.34 km");
        assert_eq!(format_speed(Some(2.0)), "2.00 m/s (7.2 km/h)");
        assert_eq!(format_speed(None), "—");
    }

    #[test]
    fn test_fix_readout() {
        let fix = PositionFix::new(GeoPoint::new(43.7009, 7.2683), 8.24, 0).with_altitude(12.34, None);
        let readout = FixReadout::from_fix(&fix);

        assert_eq!(readout.latitude, "43.700900");
        assert_eq!(readout.longitude, "7.268300");
        assert_eq!(readout.altitude, "12.3 m");
        assert_eq!(readout.accuracy, "8.2 m");
        assert_eq!(readout.altitude_accuracy, "—");
        assert_eq!(readout.speed, "—");
        assert_eq!(readout.rows()[0], ("Latitude", "43.700900"));
    }

    #[test]
    fn test_labels() {
        let m = marker("Marseille", 4.0, 120.0, true);
        assert_eq!(marker_label(&m), "Marseille\n159.6 km");
        assert_eq!(status_line(250.2, -3.2), "heading: 250°  pitch: -3°");
        assert_eq!(accuracy_line(11.8), "GPS ±12 m");
    }

    #[test]
    fn test_marker_color_fallback() {
        let plain = PointOfInterest::new("A", 0.0, 0.0);
        assert_eq!(marker_color(&plain), DEFAULT_MARKER_COLOR);
        assert_eq!(marker_color(&plain.with_color("#86efac")), "#86efac");
    }

    #[test]
    fn test_text_formatter() {
        let text = TextFormatter::new().format_text(&frame());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("heading: 250°"));
        assert!(lines[0].ends_with("GPS ±12 m"));
        assert!(lines[1].contains("Marseille"));
        assert!(lines[1].contains("x=  620.0"));

        let all = TextFormatter::new().with_hidden().format_text(&frame());
        assert!(all.contains("Milan        off-screen (+70°)"));
    }

    #[test]
    fn test_text_before_orientation() {
        let waiting = OverlayFrame {
            markers: Vec::new(),
            heading: None,
            pitch: 0.0,
            accuracy_m: Some(11.8),
            layout: HudLayout::new(1000.0, 40.0),
        };

        let text = TextFormatter::new().format_text(&waiting);
        assert_eq!(text, "waiting for orientation  GPS ±12 m");
    }

    #[test]
    fn test_json_formatter() {
        let json = JsonFormatter::new().format_json(&frame()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["markers"][0]["poi"]["name"], "Marseille");
        assert_eq!(value["markers"][0]["screen_offset"], 120.0);
        assert_eq!(value["accuracy_m"], 11.8);

        let pretty = JsonFormatter::pretty().format_json(&frame()).unwrap();
        assert!(pretty.contains('\n'));
    }
}
