//! Field-of-view projection of points of interest onto a HUD
//!
//! Angular offsets map linearly onto the horizontal axis: a point at the
//! edge of the cone lands at `±max_offset`. This is a heads-up overlay
//! model, not a perspective camera projection.

use crate::algorithms::great_circle::{distance_meters, initial_bearing_deg};
use crate::core::{GeoPoint, PointOfInterest, PositionFix, ProjectedMarker, DEFAULT_FOV_DEG, DEFAULT_HUD_MARGIN};
use serde::{Deserialize, Serialize};

/// Signed shortest angle from `heading` to `bearing`, in [-180, 180)
pub fn signed_angle_diff(bearing: f64, heading: f64) -> f64 {
    (bearing - heading + 540.0).rem_euclid(360.0) - 180.0
}

/// Project every point of interest relative to `origin` and `heading`
///
/// Markers outside the cone are still returned, flagged invisible.
pub fn project(
    origin: &PositionFix,
    heading: f64,
    pois: &[PointOfInterest],
    fov_deg: f64,
    max_offset: f64,
) -> Vec<ProjectedMarker> {
    pois.iter()
        .map(|poi| project_one(&origin.point, heading, poi, fov_deg, max_offset))
        .collect()
}

fn project_one(origin: &GeoPoint, heading: f64, poi: &PointOfInterest, fov_deg: f64, max_offset: f64) -> ProjectedMarker {
    let half_fov = fov_deg / 2.0;
    let bearing_deg = initial_bearing_deg(origin, &poi.point);
    let distance_m = distance_meters(origin, &poi.point);
    let diff_deg = signed_angle_diff(bearing_deg, heading);
    let visible = diff_deg.abs() <= half_fov;

    let screen_offset = if visible {
        diff_deg / half_fov * max_offset
    } else {
        0.0
    };

    ProjectedMarker {
        poi: poi.clone(),
        bearing_deg,
        distance_m,
        diff_deg,
        screen_offset,
        visible,
    }
}

/// Horizontal HUD geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudLayout {
    pub width: f64,
    pub margin: f64,
}

impl HudLayout {
    pub fn new(width: f64, margin: f64) -> Self {
        Self { width, margin }
    }

    /// Largest offset a marker may take from the centre; never negative
    pub fn max_offset(&self) -> f64 {
        (self.width / 2.0 - self.margin).max(0.0)
    }

    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Absolute x coordinate of a projected marker
    pub fn screen_x(&self, marker: &ProjectedMarker) -> f64 {
        self.center_x() + marker.screen_offset
    }
}

impl Default for HudLayout {
    fn default() -> Self {
        Self::new(1280.0, DEFAULT_HUD_MARGIN)
    }
}

/// Reusable projector bound to a field of view and a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfViewProjector {
    fov_deg: f64,
    layout: HudLayout,
}

impl FieldOfViewProjector {
    pub fn new(fov_deg: f64, layout: HudLayout) -> Self {
        Self { fov_deg, layout }
    }

    pub fn fov_deg(&self) -> f64 {
        self.fov_deg
    }

    pub fn layout(&self) -> &HudLayout {
        &self.layout
    }

    pub fn with_layout(mut self, layout: HudLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Project from an optional fix; no fix yields no markers
    pub fn project(&self, origin: Option<&PositionFix>, heading: f64, pois: &[PointOfInterest]) -> Vec<ProjectedMarker> {
        match origin {
            Some(fix) => project(fix, heading, pois, self.fov_deg, self.layout.max_offset()),
            None => Vec::new(),
        }
    }
}

impl Default for FieldOfViewProjector {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_DEG, HudLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::landmarks::{hud_targets, MARSEILLE, NICE};

    fn fix_at(point: GeoPoint) -> PositionFix {
        PositionFix::new(point, 10.0, 0)
    }

    #[test]
    fn test_diff_wraps_across_north() {
        assert!((signed_angle_diff(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((signed_angle_diff(350.0, 10.0) + 20.0).abs() < 1e-12);
        assert_eq!(signed_angle_diff(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_diff_range_is_half_open() {
        // Exactly opposite resolves to -180, never +180
        assert_eq!(signed_angle_diff(180.0, 0.0), -180.0);
        assert_eq!(signed_angle_diff(0.0, 180.0), -180.0);

        let mut heading = 0.0;
        while heading < 360.0 {
            let diff = signed_angle_diff(123.4, heading);
            assert!((-180.0..180.0).contains(&diff), "diff {} out of range", diff);
            heading += 7.5;
        }
    }

    #[test]
    fn test_on_heading_poi_is_centred() {
        let origin = fix_at(MARSEILLE);
        let target = PointOfInterest::new("Nice", NICE.latitude, NICE.longitude);
        let heading = initial_bearing_deg(&MARSEILLE, &NICE);

        for fov in [1.0, 30.0, 90.0, 360.0] {
            let markers = project(&origin, heading, std::slice::from_ref(&target), fov, 600.0);
            assert_eq!(markers.len(), 1);
            assert_eq!(markers[0].diff_deg, 0.0);
            assert_eq!(markers[0].screen_offset, 0.0);
            assert!(markers[0].visible);
        }
    }

    #[test]
    fn test_poi_outside_cone_is_hidden() {
        let origin = fix_at(MARSEILLE);
        let target = PointOfInterest::new("Nice", NICE.latitude, NICE.longitude);
        let bearing = initial_bearing_deg(&MARSEILLE, &NICE);

        let markers = project(&origin, bearing + 15.5, &[target], 30.0, 600.0);
        assert!(!markers[0].visible);
        assert_eq!(markers[0].screen_offset, 0.0);
        assert!(markers[0].distance_m > 0.0);
    }

    #[test]
    fn test_linear_offset_mapping() {
        let origin = fix_at(GeoPoint::new(0.0, 0.0));
        // Due east of the origin
        let east = PointOfInterest::new("east", 0.0, 1.0);

        let near_edge = project(&origin, 76.0, std::slice::from_ref(&east), 30.0, 600.0);
        assert!(near_edge[0].visible);
        assert!((near_edge[0].screen_offset - 560.0).abs() < 1e-6);

        let halfway = project(&origin, 97.5, std::slice::from_ref(&east), 30.0, 600.0);
        assert!((halfway[0].screen_offset + 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_cone_edge_is_inclusive() {
        let origin = fix_at(GeoPoint::new(0.0, 0.0));
        // Bearing exactly 90°
        let east = PointOfInterest::new("east", 0.0, 1.0);

        let left_edge = project(&origin, 75.0, std::slice::from_ref(&east), 30.0, 600.0);
        assert_eq!(left_edge[0].diff_deg, 15.0);
        assert!(left_edge[0].visible);
        assert_eq!(left_edge[0].screen_offset, 600.0);

        let right_edge = project(&origin, 105.0, std::slice::from_ref(&east), 30.0, 600.0);
        assert_eq!(right_edge[0].diff_deg, -15.0);
        assert!(right_edge[0].visible);
        assert_eq!(right_edge[0].screen_offset, -600.0);
    }

    #[test]
    fn test_seam_crossing_projection() {
        let origin = fix_at(GeoPoint::new(0.0, 0.0));
        // Bearing ~10° from the origin
        let poi = PointOfInterest::new("nne", 1.0, 0.1763);
        let bearing = initial_bearing_deg(&origin.point, &poi.point);

        let markers = project(&origin, 350.0, &[poi], 60.0, 100.0);
        let expected = signed_angle_diff(bearing, 350.0);
        assert!((markers[0].diff_deg - expected).abs() < 1e-12);
        assert!(markers[0].diff_deg > 19.0 && markers[0].diff_deg < 21.0);
        assert!(markers[0].visible);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let origin = fix_at(GeoPoint::new(43.5, 6.0));
        let pois = hud_targets();

        let first = project(&origin, 200.0, &pois, 45.0, 500.0);
        let second = project(&origin, 200.0, &pois, 45.0, 500.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_projector_without_fix_yields_nothing() {
        let projector = FieldOfViewProjector::default();
        assert!(projector.project(None, 0.0, &hud_targets()).is_empty());
    }

    #[test]
    fn test_hud_layout() {
        let layout = HudLayout::new(1280.0, 40.0);
        assert_eq!(layout.max_offset(), 600.0);
        assert_eq!(HudLayout::new(60.0, 40.0).max_offset(), 0.0);

        let projector = FieldOfViewProjector::new(30.0, layout);
        let origin = fix_at(GeoPoint::new(0.0, 0.0));
        let markers = projector.project(Some(&origin), 90.0, &[PointOfInterest::new("east", 0.0, 1.0)]);
        assert!((layout.screen_x(&markers[0]) - 640.0).abs() < 1e-6);
    }
}
