//! Command-line configuration.
//!
//! Every option can also be set through a `CONSOLE_TETRIS_*` environment
//! variable; the command line wins when both are present.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::engine::EngineConfig;
use crate::types::{DEFAULT_CLEAR_BONUS, DEFAULT_FALL_TICKS, DEFAULT_TICK_MS};

/// Falling-block puzzle in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "console-tetris",
    version,
    about = "Falling-block puzzle in the terminal.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/Right, A/D, H/L   Move\n  Up, W, K               Rotate\n  \
        Down, S, J             Soft drop\n  Space, Enter           Hard drop\n  \
        P                      Pause\n  Q, Esc, Ctrl+C         Quit"
)]
pub struct Args {
    /// Delay between loop iterations, in milliseconds.
    #[arg(long, env = "CONSOLE_TETRIS_TICK_MS", default_value_t = DEFAULT_TICK_MS, value_name = "MS")]
    pub tick_ms: u64,

    /// Ticks between forced descents of the falling piece.
    #[arg(long, env = "CONSOLE_TETRIS_FALL_TICKS", default_value_t = DEFAULT_FALL_TICKS, value_name = "TICKS")]
    pub fall_ticks: u32,

    /// Seed for the piece sequence. Random when not set.
    #[arg(long, env = "CONSOLE_TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Score awarded for each lock that clears at least one row.
    #[arg(long, env = "CONSOLE_TETRIS_CLEAR_BONUS", default_value_t = DEFAULT_CLEAR_BONUS, value_name = "POINTS")]
    pub clear_bonus: u32,

    /// Write logs to this file. Logging is off when not set.
    #[arg(long, env = "CONSOLE_TETRIS_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long, env = "CONSOLE_TETRIS_LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick length must be at least 1 ms")]
    ZeroTick,
    #[error("fall cadence must be at least 1 tick")]
    ZeroFallTicks,
    #[error("log file path {0:?} has no file name")]
    LogPathWithoutFileName(PathBuf),
}

impl Args {
    /// Validate and turn the arguments into loop settings
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if self.fall_ticks == 0 {
            return Err(ConfigError::ZeroFallTicks);
        }
        if let Some(path) = &self.log_file {
            if path.file_name().is_none() {
                return Err(ConfigError::LogPathWithoutFileName(path.clone()));
            }
        }
        Ok(EngineConfig {
            tick: Duration::from_millis(self.tick_ms),
            fall_interval_ticks: self.fall_ticks,
            clear_bonus: self.clear_bonus,
            seed: self.seed,
        })
    }
}
