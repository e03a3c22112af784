//! Physical constants and overlay defaults

/// Mean Earth radius used by the haversine formula (m)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default HUD field of view, ±15° around the heading
pub const DEFAULT_FOV_DEG: f64 = 30.0;

/// Default distance kept between an on-screen marker and the HUD edge
pub const DEFAULT_HUD_MARGIN: f64 = 40.0;

/// Default time allowed for the first position fix (ms)
pub const DEFAULT_FIX_TIMEOUT_MS: u64 = 10_000;

/// Default globe spin animation length (ms)
pub const DEFAULT_SPIN_DURATION_MS: u64 = 700;

/// Padding ratio applied when fitting a view around a set of points
pub const DEFAULT_BOUNDS_PADDING: f64 = 0.25;

/// Marker colour used when a point of interest carries none
pub const DEFAULT_MARKER_COLOR: &str = "#ff6666";
