use std::time::{Duration, Instant};

/// Gates game ticks to a fixed cadence, independent of how often the
/// session loop polls.
pub struct Throttle {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Throttle { interval, last_tick: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True if a tick is due at `now`, in which case it counts as taken.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
