//! Fixed-timestep clock
//!
//! Each game screen owns one of these. The host feeds it wall time and runs
//! as many whole ticks as it hands back.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulator: Duration,
    running: bool,
}

impl TickClock {
    /// A running clock
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            running: true,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cancel pending ticks. Nothing is handed out until `start`.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Resume counting from zero
    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    /// Add elapsed wall time and return how many ticks are due.
    ///
    /// At most `MAX_SUBSTEPS` ticks are returned per call; a backlog beyond
    /// that is dropped rather than replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulator = self.accumulator.saturating_add(elapsed);

        let mut ticks = 0;
        while self.accumulator >= self.interval && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.interval;
            ticks += 1;
        }

        if self.accumulator >= self.interval {
            log::warn!("Dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }
}
