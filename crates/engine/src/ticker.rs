//! Fixed-period tick scheduler on the monotonic clock.
//!
//! Deadlines advance by exactly one period per tick, so a slow iteration does
//! not shift every later tick. If the loop falls more than a period behind,
//! the schedule restarts from now instead of firing a burst of catch-up ticks.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    deadline: Instant,
    ticks: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
            ticks: 0,
        }
    }

    /// Number of completed waits
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Sleep until the current deadline, then schedule the next one
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.deadline.checked_duration_since(now) {
            std::thread::sleep(remaining);
        }
        self.ticks += 1;
        self.deadline += self.period;

        let now = Instant::now();
        if self.deadline + self.period < now {
            self.deadline = now + self.period;
        }
    }
}
