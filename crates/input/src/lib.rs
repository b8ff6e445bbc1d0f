//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm`
//! events into [`crate::types::InputEvent`] and exposes a non-blocking
//! [`TerminalInput`] that implements the engine's `InputSource`.

pub mod map;
pub mod source;

pub use console_tetris_engine as engine;
pub use console_tetris_types as types;

pub use map::{input_from_event, key_from_event};
pub use source::TerminalInput;
