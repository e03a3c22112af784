//! Geographic to Cartesian mapping for globe models
//!
//! The globe uses a y-up frame: y is the polar axis, the north pole sits at
//! `(0, r, 0)` and longitude 0 on the equator lands on the +x axis
//! (azimuth measured from the -x axis, i.e. `theta = lon + 180°`).

use nalgebra::{UnitQuaternion, Vector3};

use crate::core::DEFAULT_SPIN_DURATION_MS;

/// Place a geographic point on a sphere of `radius`, lifted by `altitude`
pub fn to_unit_sphere(lat: f64, lon: f64, radius: f64, altitude: f64) -> Vector3<f64> {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    let r = radius + altitude;

    Vector3::new(
        -r * phi.sin() * theta.cos(),
        r * phi.cos(),
        r * phi.sin() * theta.sin(),
    )
}

/// Globe rotation bringing (`lat`, `lon`) in front of the viewer
///
/// Euler angles `(-lat, lon, 0)` applied in XYZ order.
pub fn globe_orientation(lat: f64, lon: f64) -> UnitQuaternion<f64> {
    let about_x = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), (-lat).to_radians());
    let about_y = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), lon.to_radians());
    about_x * about_y
}

/// Time-boxed spherical interpolation between two globe orientations
#[derive(Debug, Clone)]
pub struct GlobeSpin {
    from: UnitQuaternion<f64>,
    to: UnitQuaternion<f64>,
    started_at_ms: u64,
    duration_ms: u64,
}

/// Orientation sampled from a running spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    pub orientation: UnitQuaternion<f64>,
    /// Progress in [0, 1]
    pub progress: f64,
    pub finished: bool,
}

impl GlobeSpin {
    pub fn new(from: UnitQuaternion<f64>, to: UnitQuaternion<f64>, started_at_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            started_at_ms,
            duration_ms,
        }
    }

    /// Spin from the current orientation to face (`lat`, `lon`)
    pub fn towards(current: UnitQuaternion<f64>, lat: f64, lon: f64, started_at_ms: u64) -> Self {
        Self::new(current, globe_orientation(lat, lon), started_at_ms, DEFAULT_SPIN_DURATION_MS)
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> UnitQuaternion<f64> {
        self.to
    }

    /// Orientation at `now_ms`; progress is clamped so late samples hold the target
    pub fn sample(&self, now_ms: u64) -> SpinFrame {
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        let progress = if self.duration_ms == 0 {
            1.0
        } else {
            (elapsed as f64 / self.duration_ms as f64).min(1.0)
        };

        let orientation = if progress >= 1.0 {
            self.to
        } else {
            self.from
                .try_slerp(&self.to, progress, f64::EPSILON)
                .unwrap_or(self.to)
        };

        SpinFrame {
            orientation,
            progress,
            finished: progress >= 1.0,
        }
    }
}
