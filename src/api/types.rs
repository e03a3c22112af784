//! Common API types

use crate::hardware::{SensorError, SensorReading};
use thiserror::Error;

/// Result type for hub operations
pub type HubResult<T> = Result<T, HubError>;

/// Errors raised by the subscription hub itself
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HubError {
    #[error("sensor {sensor_id} is already registered")]
    DuplicateSensor { sensor_id: u8 },
    #[error("unknown subscription handle {handle}")]
    UnknownHandle { handle: u32 },
    #[error("sensor hub has been shut down")]
    ShutDown,
}

/// Subscription registration handle, used to cancel a callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionHandle(u32);

impl SubscriptionHandle {
    pub(crate) fn new(id: u32) -> Self {
        SubscriptionHandle(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Something a sensor produced during a pump
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    Reading { sensor_id: u8, reading: SensorReading },
    /// `sensor_id` is `None` for hub-level failures such as the first-fix timeout
    Failure { sensor_id: Option<u8>, error: SensorError },
}

/// Callback invoked with every reading latched into the tracker
pub type ReadingCallback = Box<dyn FnMut(u8, &SensorReading)>;

/// Callback invoked with every sensor failure
pub type FailureCallback = Box<dyn FnMut(Option<u8>, &SensorError)>;
