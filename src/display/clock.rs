use std::thread;
use std::time::{Duration, Instant};

/// Caps a loop to a fixed number of iterations per second.
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// How long to wait at `now` to keep `rate` ticks per second.
    pub fn remaining(&self, rate: u32, now: Instant) -> Duration {
        let Some(last) = self.last else {
            return Duration::ZERO;
        };
        let interval = Duration::from_secs(1) / rate.max(1);
        interval.saturating_sub(now.saturating_duration_since(last))
    }

    pub fn tick(&mut self, rate: u32) {
        let wait = self.remaining(rate, Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.last = Some(Instant::now());
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
