//! Sensor abstraction layer
//!
//! Position and orientation sources are modelled as pollable sensors so
//! that platform adapters, scripted mocks and tests share one interface.
//! Adapters normalise heading conventions before readings leave this layer.

pub mod sensor;
pub mod mock;
pub mod error;

pub use sensor::{
    SensorSource, SensorKind, SensorReading, WatchOptions,
    HeadingConvention, normalize_heading, RawOrientation, OrientationAdapter,
};
pub use mock::MockSensor;
pub use error::{SensorError, SensorResult};
