//! Timed cyclic advancement of an active index, with manual override.

use std::time::Duration;

use shared::error::{check_index, ControllerError};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RotationTimer {
    item_count: usize,
    interval: Duration,
    active_index: usize,
    next_tick: Option<Duration>,
}

impl RotationTimer {
    /// Builds a stopped timer parked on index 0.
    pub fn new(item_count: usize, interval: Duration) -> Result<Self, ControllerError> {
        if item_count == 0 {
            return Err(ControllerError::EmptyCollection { what: "rotation" });
        }
        if interval.is_zero() {
            return Err(ControllerError::invalid_setting(
                "rotation_interval_ms",
                "interval must be positive",
            ));
        }
        Ok(Self {
            item_count,
            interval,
            active_index: 0,
            next_tick: None,
        })
    }

    /// Schedules the first tick one interval after `now`. Restarts the
    /// schedule if already running.
    pub fn start(&mut self, now: Duration) {
        self.next_tick = Some(now + self.interval);
        debug!(
            item_count = self.item_count,
            interval_ms = self.interval.as_millis() as u64,
            "rotation: started"
        );
    }

    pub fn stop(&mut self) {
        if self.next_tick.take().is_some() {
            debug!(active_index = self.active_index, "rotation: stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Jumps straight to `index`. The tick schedule is left untouched.
    pub fn select(&mut self, index: usize) -> Result<(), ControllerError> {
        check_index(index, self.item_count)?;
        self.active_index = index;
        debug!(active_index = index, "rotation: selected");
        Ok(())
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_tick
    }

    /// Fires the pending tick if it is due at `now`, returning the new index.
    /// At most one tick fires per call so callers can interleave other
    /// deadlines in order.
    pub fn fire_due(&mut self, now: Duration) -> Option<usize> {
        let due = self.next_tick.filter(|deadline| *deadline <= now)?;
        self.active_index = (self.active_index + 1) % self.item_count;
        self.next_tick = Some(due + self.interval);
        debug!(active_index = self.active_index, "rotation: tick");
        Some(self.active_index)
    }

    /// Fires every tick due up to `now`. Returns how many fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while self.fire_due(now).is_some() {
            fired += 1;
        }
        fired
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
#[path = "tests/rotation_tests.rs"]
mod tests;
