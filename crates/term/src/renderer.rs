//! TerminalRenderer: the crossterm-backed [`RenderSink`].
//!
//! Cell and status writes are queued into a byte buffer as crossterm commands
//! and written to stdout in one go on `flush`. Style changes are only emitted
//! when the style differs from the previous queued cell.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::{RenderSink, STATUS_LINES};
use crate::style::{appearance, CellStyle, Rgb, CELL_WIDTH};
use crate::types::{Symbol, GRID_HEIGHT, GRID_WIDTH};

/// Columns reserved for each status line
pub const STATUS_WIDTH: u16 = 16;

/// Gap between the well and the status panel
const STATUS_GAP: u16 = 2;

/// Where the board sits on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
}

impl Layout {
    /// Total width of board plus status panel in terminal columns
    pub const WIDTH: u16 = GRID_WIDTH as u16 * CELL_WIDTH + STATUS_GAP + STATUS_WIDTH;

    /// Centre the board and panel in a `width x height` terminal
    pub fn centered(width: u16, height: u16) -> Self {
        Self {
            x: width.saturating_sub(Self::WIDTH) / 2,
            y: height.saturating_sub(GRID_HEIGHT as u16 + 1) / 2,
        }
    }

    pub fn cell(&self, row: u16, col: u16) -> (u16, u16) {
        (self.x + col * CELL_WIDTH, self.y + row)
    }

    pub fn status(&self, line: u16) -> (u16, u16) {
        let panel_x = self.x + GRID_WIDTH as u16 * CELL_WIDTH + STATUS_GAP;
        // Status lines sit level with the top of the well, below a one-line margin.
        (panel_x, self.y + 1 + line)
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    layout: Layout,
    buf: Vec<u8>,
    current_style: Option<CellStyle>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            layout: Layout { x: 0, y: 0 },
            buf: Vec::with_capacity(16 * 1024),
            current_style: None,
        }
    }

    /// Switch to raw mode on the alternate screen and centre the board.
    ///
    /// If anything fails after raw mode is on, the terminal is restored
    /// before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        if let Err(err) = self.enter_screen() {
            let _ = self.exit();
            return Err(err);
        }
        Ok(())
    }

    fn enter_screen(&mut self) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.layout = Layout::centered(w, h);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalRenderer {
    fn set_cell(&mut self, row: u16, col: u16, symbol: Symbol) -> Result<()> {
        encode_cell_into(&mut self.buf, self.layout, row, col, symbol, &mut self.current_style)
    }

    fn set_cursor(&mut self, row: u16, col: u16) -> Result<()> {
        let (x, y) = self.layout.cell(row, col);
        self.buf.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn set_status(&mut self, line: u16, text: &str) -> Result<()> {
        encode_status_into(&mut self.buf, self.layout, line, text)?;
        self.current_style = None;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.current_style = None;
        self.flush_buf()
    }

    fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        self.layout = Layout::centered(width, height);
        encode_clear_into(&mut self.buf)?;
        self.current_style = None;
        Ok(())
    }
}

/// Reset styling and wipe the whole screen.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

/// Encode one board cell at its screen position into `out`.
///
/// `current_style` carries the style left active by the previous command so
/// runs of same-styled cells skip redundant colour changes.
pub fn encode_cell_into(
    out: &mut Vec<u8>,
    layout: Layout,
    row: u16,
    col: u16,
    symbol: Symbol,
    current_style: &mut Option<CellStyle>,
) -> Result<()> {
    let (glyph, style) = appearance(symbol);
    let (x, y) = layout.cell(row, col);
    out.queue(cursor::MoveTo(x, y))?;
    if *current_style != Some(style) {
        apply_style_into(out, style)?;
        *current_style = Some(style);
    }
    out.queue(Print(glyph))?;
    Ok(())
}

/// Encode one status line, padded to erase whatever was there before.
pub fn encode_status_into(out: &mut Vec<u8>, layout: Layout, line: u16, text: &str) -> Result<()> {
    if line as usize >= STATUS_LINES {
        return Ok(());
    }
    let (x, y) = layout.status(line);
    let width = STATUS_WIDTH as usize;
    let clipped: String = text.chars().take(width).collect();
    out.queue(cursor::MoveTo(x, y))?;
    apply_style_into(out, CellStyle::default())?;
    out.queue(Print(format!("{clipped:<width$}")))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centres_board_and_panel() {
        let layout = Layout::centered(80, 30);
        assert_eq!(layout.x, (80 - Layout::WIDTH) / 2);
        assert_eq!(layout.y, (30 - 23) / 2);
        assert_eq!(layout.cell(0, 1), (layout.x + 2, layout.y));
    }

    #[test]
    fn small_terminal_pins_layout_to_origin() {
        assert_eq!(Layout::centered(10, 5), Layout { x: 0, y: 0 });
    }

    #[test]
    fn same_style_run_skips_colour_commands() {
        let layout = Layout { x: 0, y: 0 };
        let mut style = None;

        let mut first = Vec::new();
        encode_cell_into(&mut first, layout, 3, 3, Symbol::Block, &mut style).unwrap();
        let mut second = Vec::new();
        encode_cell_into(&mut second, layout, 3, 4, Symbol::Block, &mut style).unwrap();

        assert!(second.len() < first.len());
        assert!(String::from_utf8(second).unwrap().ends_with("[]"));
    }

    #[test]
    fn status_line_is_padded_and_clipped() {
        let layout = Layout { x: 0, y: 0 };
        let mut out = Vec::new();
        encode_status_into(&mut out, layout, 0, "SCORE 1").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(&format!("{:<16}", "SCORE 1")));

        let mut out = Vec::new();
        encode_status_into(&mut out, layout, 1, &"x".repeat(40)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(&"x".repeat(16)));
        assert!(!text.contains(&"x".repeat(17)));
    }

    #[test]
    fn resize_recentres_and_clears_before_next_cells() {
        let mut term = TerminalRenderer::new();
        term.set_cell(0, 0, Symbol::Wall).unwrap();
        term.resize(100, 40).unwrap();
        assert_eq!(term.layout, Layout::centered(100, 40));
        assert_eq!(term.current_style, None);

        let mut clear = Vec::new();
        encode_clear_into(&mut clear).unwrap();
        assert!(term.buf.ends_with(&clear));

        let mut cell = Vec::new();
        encode_cell_into(&mut cell, Layout::centered(100, 40), 0, 0, Symbol::Wall, &mut None).unwrap();
        term.set_cell(0, 0, Symbol::Wall).unwrap();
        assert!(term.buf.ends_with(&cell));
    }

    #[test]
    fn out_of_range_status_line_is_ignored() {
        let mut out = Vec::new();
        encode_status_into(&mut out, Layout { x: 0, y: 0 }, STATUS_LINES as u16, "x").unwrap();
        assert!(out.is_empty());
    }
}
