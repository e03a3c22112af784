//! Session-level API
//!
//! Sensor subscription, per-frame projection and output formatting for
//! hosts that render the overlay.

pub mod types;
pub mod subscription;
pub mod overlay;
pub mod formatting;

pub use types::{
    HubResult, HubError, SubscriptionHandle, SensorEvent, ReadingCallback, FailureCallback,
};
pub use subscription::SensorHub;
pub use overlay::{OverlaySession, OverlayFrame};
pub use formatting::{
    format_distance_km, format_speed, marker_color, marker_label, status_line, accuracy_line,
    FixReadout, TextFormatter, JsonFormatter, MISSING_VALUE,
};
