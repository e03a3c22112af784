//! Subscription hub for sensor feeds
//!
//! The hub owns the registered sources and the state tracker. A caller
//! drives it by calling [`SensorHub::pump`] from its event loop; each pump
//! polls every source once, latches readings into the tracker and then
//! dispatches callbacks. Callbacks receive borrowed data only and cannot
//! reach back into the hub, so dispatch is never re-entrant.

use crate::api::types::{
    FailureCallback, HubError, HubResult, ReadingCallback, SensorEvent, SubscriptionHandle,
};
use crate::hardware::{SensorError, SensorSource, WatchOptions};
use crate::processing::{OrientationStateTracker, TrackerSnapshot};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Event-driven owner of sensor sources and latest-value state
pub struct SensorHub {
    sources: Vec<Box<dyn SensorSource>>,
    tracker: OrientationStateTracker,
    watch: WatchOptions,
    handle_counter: u32,
    reading_callbacks: BTreeMap<SubscriptionHandle, ReadingCallback>,
    failure_callbacks: BTreeMap<SubscriptionHandle, FailureCallback>,
    /// Time the watch started, for the first-fix timeout
    started_at_ms: Option<u64>,
    timeout_reported: bool,
    failure_count: u32,
    shut_down: bool,
}

impl SensorHub {
    pub fn new(watch: WatchOptions) -> Self {
        Self {
            sources: Vec::new(),
            tracker: OrientationStateTracker::new(),
            watch,
            handle_counter: 0,
            reading_callbacks: BTreeMap::new(),
            failure_callbacks: BTreeMap::new(),
            started_at_ms: None,
            timeout_reported: false,
            failure_count: 0,
            shut_down: false,
        }
    }

    /// Register a source; ids must be unique
    pub fn add_source(&mut self, source: Box<dyn SensorSource>) -> HubResult<()> {
        self.ensure_running()?;

        let sensor_id = source.id();
        if self.sources.iter().any(|s| s.id() == sensor_id) {
            return Err(HubError::DuplicateSensor { sensor_id });
        }

        debug!(sensor_id, kind = ?source.kind(), "sensor registered");
        self.sources.push(source);
        Ok(())
    }

    pub fn subscribe_readings(&mut self, callback: ReadingCallback) -> HubResult<SubscriptionHandle> {
        self.ensure_running()?;
        let handle = self.next_handle();
        self.reading_callbacks.insert(handle, callback);
        debug!(handle = handle.id(), "reading subscription added");
        Ok(handle)
    }

    pub fn subscribe_failures(&mut self, callback: FailureCallback) -> HubResult<SubscriptionHandle> {
        self.ensure_running()?;
        let handle = self.next_handle();
        self.failure_callbacks.insert(handle, callback);
        debug!(handle = handle.id(), "failure subscription added");
        Ok(handle)
    }

    /// Cancel a subscription
    pub fn unsubscribe(&mut self, handle: SubscriptionHandle) -> HubResult<()> {
        let removed = self.reading_callbacks.remove(&handle).is_some()
            || self.failure_callbacks.remove(&handle).is_some();

        if removed {
            debug!(handle = handle.id(), "subscription cancelled");
            Ok(())
        } else {
            Err(HubError::UnknownHandle { handle: handle.id() })
        }
    }

    /// Start the first-fix timeout clock
    pub fn start(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
        self.timeout_reported = false;
    }

    /// Poll every source once and dispatch what arrived
    ///
    /// At most one reading per source per pump; queued readings arrive on
    /// later pumps. Readings are latched into the tracker before callbacks
    /// run. Sources that report a permanent failure are stopped and dropped.
    pub fn pump(&mut self, now_ms: u64) -> HubResult<Vec<SensorEvent>> {
        self.ensure_running()?;

        let mut events = Vec::new();
        let mut dropped = Vec::new();

        for source in self.sources.iter_mut() {
            let sensor_id = source.id();
            match source.poll() {
                Ok(Some(reading)) => {
                    self.tracker.apply(reading);
                    events.push(SensorEvent::Reading { sensor_id, reading });
                }
                Ok(None) => {}
                Err(error) => {
                    if !error.is_transient() {
                        source.stop();
                        dropped.push(sensor_id);
                    }
                    events.push(SensorEvent::Failure { sensor_id: Some(sensor_id), error });
                }
            }
        }

        if !dropped.is_empty() {
            self.sources.retain(|s| !dropped.contains(&s.id()));
        }

        if let Some(error) = self.check_fix_timeout(now_ms) {
            events.push(SensorEvent::Failure { sensor_id: None, error });
        }

        for event in &events {
            self.dispatch(event);
        }

        Ok(events)
    }

    pub fn tracker(&self) -> &OrientationStateTracker {
        &self.tracker
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        self.tracker.current()
    }

    pub fn watch_options(&self) -> &WatchOptions {
        &self.watch
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Number of registered callbacks as (reading, failure)
    pub fn subscription_count(&self) -> (usize, usize) {
        (self.reading_callbacks.len(), self.failure_callbacks.len())
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Stop every source and drop every subscription
    pub fn shutdown(&mut self) {
        for source in self.sources.iter_mut() {
            source.stop();
        }
        self.sources.clear();
        self.reading_callbacks.clear();
        self.failure_callbacks.clear();
        self.started_at_ms = None;
        self.shut_down = true;
        info!("sensor hub shut down");
    }

    fn check_fix_timeout(&mut self, now_ms: u64) -> Option<SensorError> {
        let started = self.started_at_ms?;
        if self.timeout_reported || self.tracker.current().has_fix() {
            return None;
        }
        if now_ms.saturating_sub(started) < self.watch.timeout_ms {
            return None;
        }

        self.timeout_reported = true;
        Some(SensorError::Timeout { timeout_ms: self.watch.timeout_ms })
    }

    fn dispatch(&mut self, event: &SensorEvent) {
        match event {
            SensorEvent::Reading { sensor_id, reading } => {
                for callback in self.reading_callbacks.values_mut() {
                    callback(*sensor_id, reading);
                }
            }
            SensorEvent::Failure { sensor_id, error } => {
                self.failure_count += 1;
                warn!(sensor_id = ?sensor_id, code = error.code(), "sensor failure: {}", error);
                for callback in self.failure_callbacks.values_mut() {
                    callback(*sensor_id, error);
                }
            }
        }
    }

    fn next_handle(&mut self) -> SubscriptionHandle {
        self.handle_counter += 1;
        SubscriptionHandle::new(self.handle_counter)
    }

    fn ensure_running(&self) -> HubResult<()> {
        if self.shut_down {
            Err(HubError::ShutDown)
        } else {
            Ok(())
        }
    }
}

impl Default for SensorHub {
    fn default() -> Self {
        Self::new(WatchOptions::default())
    }
}
