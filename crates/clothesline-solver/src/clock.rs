//! Time sources for the ripple term.

use std::time::Instant;

/// Supplies the time, in seconds, that drives the periodic ripple.
pub trait Clock: Send {
    /// Current time in seconds.
    fn now_seconds(&self) -> f64;

    /// Notifies the clock that a frame of `elapsed` real seconds passed.
    /// Wall clocks ignore this.
    fn tick(&mut self, elapsed: f64) {
        let _ = elapsed;
    }
}

/// Wall-clock seconds since construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Starts counting from now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to. Used for headless runs and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    seconds: f64,
}

impl ManualClock {
    /// A clock stopped at `seconds`.
    pub fn at(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Moves the clock forward.
    pub fn advance(&mut self, seconds: f64) {
        self.seconds += seconds;
    }
}

impl Clock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.seconds
    }

    fn tick(&mut self, elapsed: f64) {
        self.advance(elapsed);
    }
}
