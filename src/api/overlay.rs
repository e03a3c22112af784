//! Per-frame overlay session
//!
//! Glues configuration, the sensor hub and the projection together. A
//! renderer calls [`OverlaySession::pump`] when sensors may have new data
//! and [`OverlaySession::frame`] once per render tick.

use crate::algorithms::{to_unit_sphere, FieldOfViewProjector, GeoBounds, GlobeSpin, HudLayout};
use crate::api::subscription::SensorHub;
use crate::api::types::{HubResult, SensorEvent};
use crate::core::{GeoPoint, PointOfInterest, ProjectedMarker, DEFAULT_BOUNDS_PADDING};
use crate::hardware::SensorSource;
use crate::utils::OverlayConfig;
use crate::validation::CoordinateValidator;
use nalgebra::{UnitQuaternion, Vector3};
use serde::Serialize;
use tracing::{debug, info};

/// Everything a HUD needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub markers: Vec<ProjectedMarker>,
    /// `None` before the first orientation sample
    pub heading: Option<f64>,
    pub pitch: f64,
    /// Horizontal accuracy of the current fix; `None` before the first fix
    pub accuracy_m: Option<f64>,
    pub layout: HudLayout,
}

impl OverlayFrame {
    pub fn visible(&self) -> impl Iterator<Item = &ProjectedMarker> {
        self.markers.iter().filter(|m| m.visible)
    }

    /// Absolute x coordinate of every visible marker, by name
    pub fn screen_positions(&self) -> Vec<(&str, f64)> {
        self.visible()
            .map(|m| (m.poi.name.as_str(), self.layout.screen_x(m)))
            .collect()
    }

    pub fn has_fix(&self) -> bool {
        self.accuracy_m.is_some()
    }
}

/// Overlay state for one viewing session
pub struct OverlaySession {
    config: OverlayConfig,
    hub: SensorHub,
}

impl OverlaySession {
    /// Points of interest with invalid coordinates are dropped here
    pub fn new(mut config: OverlayConfig) -> Self {
        config.pois = CoordinateValidator::retain_valid(std::mem::take(&mut config.pois));
        let hub = SensorHub::new(config.watch);

        info!(fov = config.fov_deg, pois = config.pois.len(), "overlay session created");
        Self { config, hub }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn hub(&self) -> &SensorHub {
        &self.hub
    }

    pub fn hub_mut(&mut self) -> &mut SensorHub {
        &mut self.hub
    }

    pub fn add_source(&mut self, source: Box<dyn SensorSource>) -> HubResult<()> {
        self.hub.add_source(source)
    }

    pub fn start(&mut self, now_ms: u64) {
        self.hub.start(now_ms);
    }

    pub fn pump(&mut self, now_ms: u64) -> HubResult<Vec<SensorEvent>> {
        self.hub.pump(now_ms)
    }

    pub fn set_pois(&mut self, pois: Vec<PointOfInterest>) {
        self.config.pois = CoordinateValidator::retain_valid(pois);
        debug!(pois = self.config.pois.len(), "points of interest replaced");
    }

    pub fn projector(&self, width: f64) -> FieldOfViewProjector {
        FieldOfViewProjector::new(self.config.fov_deg, HudLayout::new(width, self.config.hud_margin))
    }

    /// Project the configured points of interest for a HUD `width` pixels wide
    ///
    /// Until both a fix and an orientation sample have arrived the frame
    /// carries no markers.
    pub fn frame(&self, width: f64) -> OverlayFrame {
        let snapshot = self.hub.snapshot();
        let projector = self.projector(width);
        let heading = snapshot.heading();

        let markers = match heading {
            Some(h) if snapshot.can_project() => {
                projector.project(snapshot.position.as_ref(), h, &self.config.pois)
            }
            _ => Vec::new(),
        };

        OverlayFrame {
            markers,
            heading,
            pitch: snapshot.orientation.map(|o| o.pitch).unwrap_or(0.0),
            accuracy_m: snapshot.position.map(|p| p.accuracy_m),
            layout: *projector.layout(),
        }
    }

    /// Globe position of the user marker, once a fix exists
    pub fn user_marker_position(&self) -> Option<Vector3<f64>> {
        let fix = self.hub.snapshot().position?;
        let globe = &self.config.globe;
        Some(to_unit_sphere(
            fix.point.latitude,
            fix.point.longitude,
            globe.radius,
            globe.user_altitude,
        ))
    }

    /// Globe position of every point of interest
    pub fn poi_positions(&self) -> Vec<(&PointOfInterest, Vector3<f64>)> {
        let globe = &self.config.globe;
        self.config
            .pois
            .iter()
            .map(|poi| {
                let position = to_unit_sphere(
                    poi.point.latitude,
                    poi.point.longitude,
                    globe.radius,
                    globe.marker_altitude,
                );
                (poi, position)
            })
            .collect()
    }

    /// Spin the globe from `current` towards the user's fix
    pub fn spin_to_user(&self, current: UnitQuaternion<f64>, now_ms: u64) -> Option<GlobeSpin> {
        let fix = self.hub.snapshot().position?;
        Some(
            GlobeSpin::towards(current, fix.point.latitude, fix.point.longitude, now_ms)
                .with_duration(self.config.globe.spin_duration_ms),
        )
    }

    /// Padded box around the points of interest and the current fix
    pub fn view_bounds(&self) -> Option<GeoBounds> {
        let mut points: Vec<GeoPoint> = self.config.pois.iter().map(|p| p.point).collect();
        if let Some(fix) = self.hub.snapshot().position {
            points.push(fix.point);
        }
        GeoBounds::from_points(&points).map(|b| b.pad(DEFAULT_BOUNDS_PADDING))
    }

    pub fn shutdown(&mut self) {
        self.hub.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::MockSensor;

    fn equator_session() -> OverlaySession {
        let config = OverlayConfig {
            pois: vec![
                PointOfInterest::new("North", 1.0, 0.0),
                PointOfInterest::new("East", 0.0, 1.0),
                PointOfInterest::new("Broken", 95.0, 0.0),
            ],
            ..Default::default()
        };
        OverlaySession::new(config)
    }

    #[test]
    fn test_invalid_pois_dropped() {
        let session = equator_session();
        assert_eq!(session.config().pois.len(), 2);
    }

    #[test]
    fn test_frame_without_fix_is_empty() {
        let session = equator_session();
        let frame = session.frame(1280.0);

        assert!(frame.markers.is_empty());
        assert!(!frame.has_fix());
        assert_eq!(frame.heading, None);
    }

    #[test]
    fn test_frame_without_orientation_is_empty() {
        let mut session = equator_session();
        let mut position = MockSensor::position(1);
        position.push_fix(0.0, 0.0, 8.0, 0);
        session.add_source(Box::new(position)).unwrap();
        session.pump(0).unwrap();

        let frame = session.frame(1280.0);
        assert!(frame.has_fix());
        assert_eq!(frame.heading, None);
        assert!(frame.markers.is_empty());
        assert_eq!(frame.visible().count(), 0);
    }

    #[test]
    fn test_frame_projects_from_latest_fix() {
        let mut session = equator_session();
        let mut position = MockSensor::position(1);
        position.push_fix(0.0, 0.0, 12.0, 0);
        let mut orientation = MockSensor::orientation(2);
        orientation.push_heading(0.0, 5.0, 0.0);

        session.add_source(Box::new(position)).unwrap();
        session.add_source(Box::new(orientation)).unwrap();
        session.pump(0).unwrap();

        let frame = session.frame(1280.0);
        assert_eq!(frame.markers.len(), 2);
        assert_eq!(frame.accuracy_m, Some(12.0));
        assert_eq!(frame.pitch, 5.0);

        let visible: Vec<_> = frame.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].poi.name, "North");
        assert!(visible[0].screen_offset.abs() < 1e-9);

        let positions = frame.screen_positions();
        assert!((positions[0].1 - 640.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_follows_heading() {
        let mut session = equator_session();
        let mut position = MockSensor::position(1);
        position.push_fix(0.0, 0.0, 5.0, 0);
        let mut orientation = MockSensor::orientation(2);
        orientation.push_heading(85.0, 0.0, 0.0);

        session.add_source(Box::new(position)).unwrap();
        session.add_source(Box::new(orientation)).unwrap();
        session.pump(0).unwrap();

        let frame = session.frame(1000.0);
        let east = frame.visible().next().unwrap();
        assert_eq!(east.poi.name, "East");
        // 5° right of centre in a 15° half-cone, max offset 460
        assert!((east.screen_offset - 460.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_globe_positions() {
        let mut session = equator_session();
        assert!(session.user_marker_position().is_none());
        assert!(session.spin_to_user(UnitQuaternion::identity(), 0).is_none());

        let mut position = MockSensor::position(1);
        position.push_fix(90.0, 0.0, 5.0, 0);
        session.add_source(Box::new(position)).unwrap();
        session.pump(0).unwrap();

        let user = session.user_marker_position().unwrap();
        assert!((user.y - 1.03).abs() < 1e-9);

        let pois = session.poi_positions();
        assert_eq!(pois.len(), 2);
        assert!((pois[0].1.norm() - 1.02).abs() < 1e-9);

        let spin = session.spin_to_user(UnitQuaternion::identity(), 100).unwrap();
        assert!(spin.sample(800).finished);
        assert!(!spin.sample(400).finished);
    }

    #[test]
    fn test_view_bounds_cover_fix() {
        let mut session = equator_session();
        let bounds = session.view_bounds().unwrap();
        assert!(bounds.contains(&GeoPoint::new(0.5, 0.5)));

        let mut position = MockSensor::position(1);
        position.push_fix(-2.0, -2.0, 5.0, 0);
        session.add_source(Box::new(position)).unwrap();
        session.pump(0).unwrap();

        let bounds = session.view_bounds().unwrap();
        assert!(bounds.contains(&GeoPoint::new(-2.0, -2.0)));
        assert!(bounds.south_west.latitude < -2.0);
    }

    #[test]
    fn test_frame_serializes() {
        let session = equator_session();
        let json = serde_json::to_value(session.frame(800.0)).unwrap();
        assert_eq!(json["layout"]["width"], 800.0);
        assert!(json["markers"].as_array().unwrap().is_empty());
    }
}
