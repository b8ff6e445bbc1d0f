//! Collaborator seams: where the loop meets a screen and a keyboard.
//!
//! The engine never formats a whole frame or reads a device itself. It pushes
//! individual changed cells into a [`RenderSink`] and pulls single events from an
//! [`InputSource`]. Terminal implementations live in the `term` and `input`
//! crates; tests use in-memory ones.

use anyhow::Result;

use crate::types::{InputEvent, Symbol};

/// Receives cell-level drawing commands.
///
/// Coordinates are board coordinates: `row` counts grid rows from the top,
/// `col` counts grid columns from the left wall. Implementations decide how a
/// board cell maps onto the physical screen.
pub trait RenderSink {
    /// Draw one board cell
    fn set_cell(&mut self, row: u16, col: u16, symbol: Symbol) -> Result<()>;

    /// Park the cursor at a board coordinate
    fn set_cursor(&mut self, row: u16, col: u16) -> Result<()>;

    /// Replace the text of one status line next to the board
    fn set_status(&mut self, line: u16, text: &str) -> Result<()>;

    /// Push everything queued so far to the device
    fn flush(&mut self) -> Result<()>;

    /// The screen changed size. Whatever was drawn is gone; the caller
    /// repaints the whole board afterwards.
    fn resize(&mut self, width: u16, height: u16) -> Result<()>;
}

/// Non-blocking event source.
pub trait InputSource {
    /// Whether an event can be read without blocking
    fn event_pending(&mut self) -> Result<bool>;

    /// Read one pending event; `None` when it was nothing the game handles
    fn read_event(&mut self) -> Result<Option<InputEvent>>;
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn set_cell(&mut self, row: u16, col: u16, symbol: Symbol) -> Result<()> {
        (**self).set_cell(row, col, symbol)
    }

    fn set_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        (**self).set_cursor(row, col)
    }

    fn set_status(&mut self, line: u16, text: &str) -> Result<()> {
        (**self).set_status(line, text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        (**self).resize(width, height)
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn event_pending(&mut self) -> Result<bool> {
        (**self).event_pending()
    }

    fn read_event(&mut self) -> Result<Option<InputEvent>> {
        (**self).read_event()
    }
}
