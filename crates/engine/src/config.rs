//! Loop settings resolved from the command line.

use std::time::Duration;

use crate::types::{DEFAULT_CLEAR_BONUS, DEFAULT_FALL_TICKS, DEFAULT_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay between loop iterations
    pub tick: Duration,
    /// Ticks between forced descents
    pub fall_interval_ticks: u32,
    /// Score per lock that cleared at least one row
    pub clear_bonus: u32,
    /// Spawner seed; `None` picks one at random
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            fall_interval_ticks: DEFAULT_FALL_TICKS,
            clear_bonus: DEFAULT_CLEAR_BONUS,
            seed: None,
        }
    }
}
