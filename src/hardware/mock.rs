//! Scripted sensor for tests and demos

use crate::core::{GeoPoint, OrientationSample, PositionFix};
use crate::hardware::{SensorError, SensorKind, SensorReading, SensorResult, SensorSource};
use std::collections::VecDeque;

/// Sensor that replays a queue of readings and failures
pub struct MockSensor {
    id: u8,
    kind: SensorKind,
    queue: VecDeque<SensorResult<SensorReading>>,
    available: bool,
    stopped: bool,
}

impl MockSensor {
    pub fn new(id: u8, kind: SensorKind) -> Self {
        Self {
            id,
            kind,
            queue: VecDeque::new(),
            available: true,
            stopped: false,
        }
    }

    pub fn position(id: u8) -> Self {
        Self::new(id, SensorKind::Position)
    }

    pub fn orientation(id: u8) -> Self {
        Self::new(id, SensorKind::Orientation)
    }

    /// Sensor the platform does not expose
    pub fn unavailable(id: u8, kind: SensorKind) -> Self {
        Self {
            available: false,
            ..Self::new(id, kind)
        }
    }

    pub fn push_fix(&mut self, latitude: f64, longitude: f64, accuracy_m: f64, timestamp_ms: u64) {
        let fix = PositionFix::new(GeoPoint::new(latitude, longitude), accuracy_m, timestamp_ms);
        self.queue.push_back(Ok(SensorReading::Position(fix)));
    }

    pub fn push_heading(&mut self, heading: f64, pitch: f64, roll: f64) {
        let sample = OrientationSample::new(heading, pitch, roll);
        self.queue.push_back(Ok(SensorReading::Orientation(sample)));
    }

    pub fn push_reading(&mut self, reading: SensorReading) {
        self.queue.push_back(Ok(reading));
    }

    pub fn push_error(&mut self, error: SensorError) {
        self.queue.push_back(Err(error));
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl SensorSource for MockSensor {
    fn poll(&mut self) -> SensorResult<Option<SensorReading>> {
        if !self.available {
            return Err(SensorError::Unsupported { sensor_id: self.id });
        }
        if self.stopped {
            return Ok(None);
        }

        match self.queue.pop_front() {
            Some(Ok(reading)) => Ok(Some(reading)),
            Some(Err(error)) => Err(error),
            None => Ok(None),
        }
    }

    fn kind(&self) -> SensorKind {
        self.kind
    }

    fn id(&self) -> u8 {
        self.id
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.queue.clear();
    }
}
