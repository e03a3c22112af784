//! Reference places used by the mapping exercises

use crate::core::{GeoPoint, PointOfInterest};

pub const NICE: GeoPoint = GeoPoint::new(43.7009, 7.2683);
pub const MARSEILLE: GeoPoint = GeoPoint::new(43.2965, 5.3698);
pub const MILAN: GeoPoint = GeoPoint::new(45.4642, 9.19);

/// Vertices of the Bermuda triangle
pub const MIAMI: GeoPoint = GeoPoint::new(25.7617, -80.1918);
pub const BERMUDA: GeoPoint = GeoPoint::new(32.3078, -64.7505);
pub const SAN_JUAN: GeoPoint = GeoPoint::new(18.4655, -66.1057);

pub fn bermuda_triangle() -> [GeoPoint; 3] {
    [MIAMI, BERMUDA, SAN_JUAN]
}

/// Default HUD targets
pub fn hud_targets() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("Nice", NICE.latitude, NICE.longitude),
        PointOfInterest::new("Marseille", MARSEILLE.latitude, MARSEILLE.longitude),
    ]
}

/// Neighbouring cities shown on the globe, with marker colours
pub fn neighbors() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new("Nice", NICE.latitude, NICE.longitude).with_color("#7dd3fc"),
        PointOfInterest::new("Marseille", MARSEILLE.latitude, MARSEILLE.longitude).with_color("#86efac"),
        PointOfInterest::new("Milan", MILAN.latitude, MILAN.longitude).with_color("#fca5a5"),
    ]
}
