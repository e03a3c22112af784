//! Sensor source trait, watch options and heading normalisation

use crate::algorithms::great_circle::normalize_degrees;
use crate::core::{OrientationSample, PositionFix, DEFAULT_FIX_TIMEOUT_MS};
use crate::hardware::SensorResult;
use serde::{Deserialize, Serialize};

/// Push-style sensor drained by the subscription hub
pub trait SensorSource {
    /// Next pending reading
    /// Returns Ok(None) when nothing new has arrived (non-blocking)
    /// Returns Err(error) when the source reports a failure
    fn poll(&mut self) -> SensorResult<Option<SensorReading>>;

    /// What this source produces
    fn kind(&self) -> SensorKind;

    /// Identifier, unique within a hub
    fn id(&self) -> u8;

    /// Whether the platform exposes this sensor at all
    fn is_available(&self) -> bool;

    /// Stop producing readings; further polls yield nothing
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    Position,
    Orientation,
}

/// One reading from a sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
    Position(PositionFix),
    Orientation(OrientationSample),
}

impl SensorReading {
    pub fn kind(&self) -> SensorKind {
        match self {
            SensorReading::Position(_) => SensorKind::Position,
            SensorReading::Orientation(_) => SensorKind::Orientation,
        }
    }
}

/// Options handed to a position watch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WatchOptions {
    pub enable_high_accuracy: bool,
    /// Time allowed for the first fix (ms)
    pub timeout_ms: u64,
    /// Oldest cached fix the platform may return (ms)
    pub maximum_age_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: DEFAULT_FIX_TIMEOUT_MS,
            maximum_age_ms: 2_000,
        }
    }
}

/// Convention a platform uses for its heading angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingConvention {
    /// Clockwise from north; the canonical convention stored by the tracker
    CompassClockwise,
    /// Device-frame `alpha`, counter-clockwise about the vertical axis
    DeviceAlpha,
}

/// Convert a heading reported under `convention` to clockwise-from-north
pub fn normalize_heading(value: f64, convention: HeadingConvention) -> f64 {
    match convention {
        HeadingConvention::CompassClockwise => normalize_degrees(value),
        HeadingConvention::DeviceAlpha => normalize_degrees(360.0 - value),
    }
}

/// Raw device-orientation event; platforms may omit any angle
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOrientation {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub gamma: Option<f64>,
}

/// Normalises raw orientation events before they reach the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationAdapter {
    convention: HeadingConvention,
}

impl OrientationAdapter {
    pub fn new(convention: HeadingConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> HeadingConvention {
        self.convention
    }

    /// Missing angles read as zero
    pub fn adapt(&self, raw: RawOrientation) -> OrientationSample {
        OrientationSample {
            heading: normalize_heading(raw.alpha.unwrap_or(0.0), self.convention),
            pitch: raw.beta.unwrap_or(0.0),
            roll: raw.gamma.unwrap_or(0.0),
        }
    }
}

impl Default for OrientationAdapter {
    fn default() -> Self {
        Self::new(HeadingConvention::CompassClockwise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_heading_is_wrapped_only() {
        assert_eq!(normalize_heading(350.0, HeadingConvention::CompassClockwise), 350.0);
        assert_eq!(normalize_heading(370.0, HeadingConvention::CompassClockwise), 10.0);
        assert_eq!(normalize_heading(-10.0, HeadingConvention::CompassClockwise), 350.0);
    }

    #[test]
    fn test_device_alpha_is_mirrored() {
        assert_eq!(normalize_heading(0.0, HeadingConvention::DeviceAlpha), 0.0);
        assert_eq!(normalize_heading(90.0, HeadingConvention::DeviceAlpha), 270.0);
        assert_eq!(normalize_heading(270.0, HeadingConvention::DeviceAlpha), 90.0);
    }

    #[test]
    fn test_adapter_fills_missing_angles() {
        let adapter = OrientationAdapter::new(HeadingConvention::DeviceAlpha);
        let sample = adapter.adapt(RawOrientation {
            alpha: Some(30.0),
            beta: None,
            gamma: Some(-4.0),
        });

        assert_eq!(sample.heading, 330.0);
        assert_eq!(sample.pitch, 0.0);
        assert_eq!(sample.roll, -4.0);

        let empty = OrientationAdapter::default().adapt(RawOrientation::default());
        assert_eq!(empty, OrientationSample::default());
    }

    #[test]
    fn test_default_watch_options() {
        let options = WatchOptions::default();
        assert!(options.enable_high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
    }
}
