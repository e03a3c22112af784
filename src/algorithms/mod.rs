//! Geospatial math: distances, bearings, globe mapping and HUD projection

pub mod great_circle;
pub mod sphere;
pub mod projection;
pub mod bounds;

pub use great_circle::{distance_meters, initial_bearing_deg, path_length_meters, normalize_degrees};
pub use sphere::{to_unit_sphere, globe_orientation, GlobeSpin, SpinFrame};
pub use projection::{project, signed_angle_diff, FieldOfViewProjector, HudLayout};
pub use bounds::GeoBounds;
