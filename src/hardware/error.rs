//! Sensor failure signals

use thiserror::Error;

/// Failures reported by position and orientation sources
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorError {
    /// The user or platform refused access to the sensor
    #[error("permission denied for sensor {sensor_id}")]
    PermissionDenied { sensor_id: u8 },
    /// The sensor is present but cannot produce a reading
    #[error("position unavailable: {details}")]
    PositionUnavailable { details: String },
    /// No reading arrived within the allowed time
    #[error("sensor timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
    /// The platform has no such sensor
    #[error("sensor {sensor_id} not supported on this platform")]
    Unsupported { sensor_id: u8 },
}

/// Result type for sensor operations
pub type SensorResult<T> = Result<T, SensorError>;

impl SensorError {
    /// Geolocation-style numeric code; 0 when the platform lacks the sensor
    pub fn code(&self) -> u8 {
        match self {
            SensorError::PermissionDenied { .. } => 1,
            SensorError::PositionUnavailable { .. } => 2,
            SensorError::Timeout { .. } => 3,
            SensorError::Unsupported { .. } => 0,
        }
    }

    /// Whether a later reading from the same source may still succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, SensorError::PositionUnavailable { .. } | SensorError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SensorError::PermissionDenied { sensor_id: 1 }.code(), 1);
        assert_eq!(SensorError::PositionUnavailable { details: "no gps".into() }.code(), 2);
        assert_eq!(SensorError::Timeout { timeout_ms: 10_000 }.code(), 3);
        assert_eq!(SensorError::Unsupported { sensor_id: 2 }.code(), 0);
    }

    #[test]
    fn test_transient_errors() {
        assert!(SensorError::Timeout { timeout_ms: 10 }.is_transient());
        assert!(!SensorError::PermissionDenied { sensor_id: 1 }.is_transient());
        assert!(!SensorError::Unsupported { sensor_id: 1 }.is_transient());
    }

    #[test]
    fn test_display() {
        let err = SensorError::Timeout { timeout_ms: 10_000 };
        assert_eq!(err.to_string(), "sensor timeout after 10000ms");
    }
}
