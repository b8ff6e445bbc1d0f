//! Terminal event source.
//!
//! `event_pending` is a zero-timeout `event::poll`, so the game loop never
//! blocks on input. Focus, mouse and paste events are consumed and reported
//! as `None`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::engine::InputSource;
use crate::map::input_from_event;
use crate::types::InputEvent;

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn event_pending(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(input_from_event(event::read()?))
    }
}
