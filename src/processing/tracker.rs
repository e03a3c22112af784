//! Latest-value state for orientation and position
//!
//! The tracker is the single owner of the state a HUD reads on every render
//! tick. Each update overwrites the previous value wholesale; no history is
//! kept and nothing is smoothed.

use crate::core::{OrientationSample, PositionFix};
use crate::hardware::{HeadingConvention, SensorReading};

/// Copy of the tracker state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackerSnapshot {
    pub orientation: Option<OrientationSample>,
    pub position: Option<PositionFix>,
}

impl TrackerSnapshot {
    /// Heading to project against; `None` until the first orientation sample
    pub fn heading(&self) -> Option<f64> {
        self.orientation.map(|o| o.heading)
    }

    /// Both a fix and an orientation sample are present
    pub fn can_project(&self) -> bool {
        self.position.is_some() && self.orientation.is_some()
    }

    pub fn has_fix(&self) -> bool {
        self.position.is_some()
    }
}

/// Holds the most recent orientation sample and position fix
#[derive(Debug, Clone, Default)]
pub struct OrientationStateTracker {
    state: TrackerSnapshot,
    orientation_updates: u64,
    position_updates: u64,
}

impl OrientationStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convention every stored heading follows
    pub fn convention(&self) -> HeadingConvention {
        HeadingConvention::CompassClockwise
    }

    pub fn update_orientation(&mut self, sample: OrientationSample) {
        self.state.orientation = Some(sample);
        self.orientation_updates += 1;
    }

    pub fn update_position(&mut self, fix: PositionFix) {
        self.state.position = Some(fix);
        self.position_updates += 1;
    }

    /// Route a sensor reading to the matching slot
    pub fn apply(&mut self, reading: SensorReading) {
        match reading {
            SensorReading::Position(fix) => self.update_position(fix),
            SensorReading::Orientation(sample) => self.update_orientation(sample),
        }
    }

    pub fn current(&self) -> TrackerSnapshot {
        self.state
    }

    /// Number of updates received as (orientation, position)
    pub fn update_counts(&self) -> (u64, u64) {
        (self.orientation_updates, self.position_updates)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
