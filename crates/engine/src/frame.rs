//! Frame composition and differential redraw.
//!
//! A [`Frame`] is the display symbol of every board position: the grid with the
//! active piece laid over it. [`Redraw`] keeps the last frame it sent and, on
//! each call, hands the sink only the cells (and status lines) whose value
//! changed. The first frame after construction or [`Redraw::invalidate`] is
//! sent in full.

use anyhow::Result;

use crate::collab::RenderSink;
use crate::game::Game;
use crate::types::{Symbol, GRID_HEIGHT, GRID_WIDTH};

/// Display symbols for the whole board, `[row][col]`
pub type Frame = [[Symbol; GRID_WIDTH]; GRID_HEIGHT];

/// Number of status lines next to the board
pub const STATUS_LINES: usize = 14;

/// Fixed key legend shown under the counters
const CONTROLS: [&str; 7] = [
    "CONTROLS",
    "<- ->  move",
    "UP     rotate",
    "DOWN   soft drop",
    "SPACE  hard drop",
    "P      pause",
    "Q      quit",
];

/// Compose the grid and the active piece into display symbols
pub fn compose(game: &Game) -> Frame {
    let state = game.state();
    let mut frame = [[Symbol::Empty; GRID_WIDTH]; GRID_HEIGHT];
    for (out, row) in frame.iter_mut().zip(state.grid().rows()) {
        for (sym, &cell) in out.iter_mut().zip(row) {
            *sym = Symbol::from(cell);
        }
    }

    if let Some(piece) = state.active() {
        for (col, row) in piece.cells() {
            if col < 0 || row < 0 {
                continue;
            }
            if let Some(sym) = frame
                .get_mut(row as usize)
                .and_then(|r| r.get_mut(col as usize))
            {
                *sym = Symbol::Active;
            }
        }
    }
    frame
}

/// Status panel text for the current game
pub fn status_lines(game: &Game) -> [String; STATUS_LINES] {
    let state = game.state();
    let banner = if game.is_over() {
        "GAME OVER"
    } else if game.paused() {
        "PAUSED"
    } else {
        ""
    };
    let [c0, c1, c2, c3, c4, c5, c6] = CONTROLS.map(String::from);
    [
        format!("SCORE {:>7}", state.score()),
        format!("LINES {:>7}", state.lines()),
        String::new(),
        format!("NEXT  {:>7}", state.next_kind().as_str()),
        String::new(),
        banner.to_string(),
        String::new(),
        c0,
        c1,
        c2,
        c3,
        c4,
        c5,
        c6,
    ]
}

/// Tracks what the sink currently shows
#[derive(Debug, Clone, Default)]
pub struct Redraw {
    previous: Option<Frame>,
    status: Option<[String; STATUS_LINES]>,
}

impl Redraw {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget what was drawn; the next render repaints everything
    pub fn invalidate(&mut self) {
        self.previous = None;
        self.status = None;
    }

    /// Send changed cells and status lines for `game` to `sink`.
    ///
    /// Returns the number of sink writes (cells plus status lines). The sink
    /// is only flushed when something was written.
    pub fn render(&mut self, game: &Game, sink: &mut impl RenderSink) -> Result<usize> {
        let frame = compose(game);
        let mut writes = self.present_cells(&frame, sink)?;
        writes += self.present_status(status_lines(game), sink)?;

        if writes > 0 {
            sink.set_cursor(GRID_HEIGHT as u16, 0)?;
            sink.flush()?;
        }
        Ok(writes)
    }

    fn present_cells(&mut self, frame: &Frame, sink: &mut impl RenderSink) -> Result<usize> {
        let mut writes = 0;
        for (r, row) in frame.iter().enumerate() {
            for (c, &sym) in row.iter().enumerate() {
                let unchanged = self.previous.as_ref().is_some_and(|prev| prev[r][c] == sym);
                if !unchanged {
                    sink.set_cell(r as u16, c as u16, sym)?;
                    writes += 1;
                }
            }
        }
        self.previous = Some(*frame);
        Ok(writes)
    }

    fn present_status(
        &mut self,
        lines: [String; STATUS_LINES],
        sink: &mut impl RenderSink,
    ) -> Result<usize> {
        let mut writes = 0;
        for (i, line) in lines.iter().enumerate() {
            let unchanged = self.status.as_ref().is_some_and(|prev| prev[i] == *line);
            if !unchanged {
                sink.set_status(i as u16, line)?;
                writes += 1;
            }
        }
        self.status = Some(lines);
        Ok(writes)
    }
}
