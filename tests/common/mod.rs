//! In-memory collaborators for driving the loop without a terminal.

#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::Result;
use console_tetris::engine::{InputSource, RenderSink, STATUS_LINES};
use console_tetris::types::{InputEvent, Key, Symbol, GRID_HEIGHT, GRID_WIDTH};

/// Replays a script of per-tick inputs: `Some(event)` arrives on that tick,
/// `None` is a tick with nothing pending. Runs dry into idle ticks.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<InputEvent>>,
    pending: Option<InputEvent>,
}

impl ScriptedInput {
    /// Script of key presses only
    pub fn new(keys: impl IntoIterator<Item = Option<Key>>) -> Self {
        Self::from_events(keys.into_iter().map(|key| key.map(InputEvent::Key)))
    }

    pub fn from_events(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            pending: None,
        }
    }
}

impl InputSource for ScriptedInput {
    fn event_pending(&mut self) -> Result<bool> {
        self.pending = self.script.pop_front().flatten();
        Ok(self.pending.is_some())
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.pending.take())
    }
}

/// Mirrors what a screen would show and counts writes.
#[derive(Debug)]
pub struct RecordingSink {
    pub screen: [[Symbol; GRID_WIDTH]; GRID_HEIGHT],
    pub status: Vec<String>,
    pub cell_writes: usize,
    pub status_writes: usize,
    pub flushes: usize,
    pub resizes: Vec<(u16, u16)>,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self {
            screen: [[Symbol::Empty; GRID_WIDTH]; GRID_HEIGHT],
            status: vec![String::new(); STATUS_LINES],
            cell_writes: 0,
            status_writes: 0,
            flushes: 0,
            resizes: Vec::new(),
        }
    }
}

impl RenderSink for RecordingSink {
    fn set_cell(&mut self, row: u16, col: u16, symbol: Symbol) -> Result<()> {
        self.screen[row as usize][col as usize] = symbol;
        self.cell_writes += 1;
        Ok(())
    }

    fn set_cursor(&mut self, _row: u16, _col: u16) -> Result<()> {
        Ok(())
    }

    fn set_status(&mut self, line: u16, text: &str) -> Result<()> {
        self.status[line as usize] = text.to_string();
        self.status_writes += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.resizes.push((width, height));
        Ok(())
    }
}
