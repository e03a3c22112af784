//! Geospatial overlay core
//!
//! Great-circle math, globe mapping and field-of-view projection for
//! heads-up displays that pin points of interest to the horizon, plus the
//! sensor plumbing that feeds them.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod hardware;
pub mod api;

// Re-export commonly used types
pub use crate::core::{GeoPoint, PointOfInterest, PositionFix, OrientationSample, ProjectedMarker, EARTH_RADIUS_M};
pub use crate::algorithms::{
    distance_meters, initial_bearing_deg, to_unit_sphere, project, signed_angle_diff,
    FieldOfViewProjector, HudLayout, GlobeSpin, GeoBounds,
};
pub use crate::processing::{OrientationStateTracker, TrackerSnapshot};
pub use crate::hardware::{SensorSource, SensorReading, SensorError, HeadingConvention, OrientationAdapter, MockSensor};
pub use crate::utils::{ConfigurationManager, OverlayConfig};
pub use crate::api::{OverlaySession, OverlayFrame, SensorHub, SubscriptionHandle, TextFormatter, JsonFormatter};
