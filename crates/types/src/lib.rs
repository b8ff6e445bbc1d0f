//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the simulation, the game loop, and the terminal collaborators alike.
//!
//! # Grid Dimensions
//!
//! The playfield is a walled well:
//!
//! - **Width**: 12 columns (0 and 11 are walls, 1-10 are playable)
//! - **Height**: 22 rows (0-20 are playable, 21 is the floor wall)
//! - **Spawn position**: column 4, row 0 (the 4x4 box is centred horizontally)
//!
//! # Loop Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 20 | Fixed delay between loop iterations |
//! | `DEFAULT_FALL_TICKS` | 25 | Ticks between forced descents |
//! | `DEFAULT_CLEAR_BONUS` | 100 | Score awarded per line-clear pass |
//!
//! # Examples
//!
//! ```
//! use console_tetris_types::{Cell, PieceKind, Symbol, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(Symbol::from(Cell::Filled), Symbol::Block);
//!
//! assert_eq!(GRID_WIDTH, 12);
//! assert_eq!(GRID_HEIGHT, 22);
//! ```

/// Grid width in cells, including the two side walls
pub const GRID_WIDTH: usize = 12;

/// Grid height in cells, including the floor wall
pub const GRID_HEIGHT: usize = 22;

/// Index of the floor wall row
pub const FLOOR_ROW: usize = GRID_HEIGHT - 1;

/// Column of the 4x4 box origin for a freshly spawned piece
pub const SPAWN_COL: i8 = ((GRID_WIDTH - 4) / 2) as i8;

/// Row of the 4x4 box origin for a freshly spawned piece
pub const SPAWN_ROW: i8 = 0;

/// Side length of a piece pattern box
pub const PATTERN_SIZE: usize = 4;

/// Default loop delay in milliseconds
pub const DEFAULT_TICK_MS: u64 = 20;

/// Default number of ticks between forced descents
pub const DEFAULT_FALL_TICKS: u32 = 25;

/// Default score bonus for a lock that cleared at least one row
pub const DEFAULT_CLEAR_BONUS: u32 = 100;

/// State of a single grid cell
///
/// Border columns and the floor row hold `Wall`; every other cell is
/// `Empty` or `Filled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Filled,
}

impl Cell {
    /// Whether a piece may occupy this cell
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Display value of one board position after composing the grid with the
/// active piece. This is what the differential redraw compares frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Symbol {
    #[default]
    Empty,
    Wall,
    Block,
    Active,
}

impl From<Cell> for Symbol {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Symbol::Empty,
            Cell::Wall => Symbol::Wall,
            Cell::Filled => Symbol::Block,
        }
    }
}

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in catalogue order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Upper-case letter used by the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Game actions that can be applied to the active piece or the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (no-op when blocked)
    SoftDrop,
    /// Drop piece to the lowest free row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
}

/// Terminal-independent key vocabulary.
///
/// Input sources translate their native events into this; the engine maps it
/// to logical commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    Esc,
    /// Ctrl+C
    Interrupt,
    Char(char),
}

/// One event pulled from an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Key(Key),
    /// The terminal now measures `width x height` character cells
    Resize { width: u16, height: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_box_is_centred_between_walls() {
        assert_eq!(SPAWN_COL, 4);
        let left_gap = SPAWN_COL as usize - 1;
        let right_gap = (GRID_WIDTH - 2) - (SPAWN_COL as usize - 1 + PATTERN_SIZE);
        assert_eq!(left_gap, right_gap);
    }

    #[test]
    fn cell_maps_to_display_symbol() {
        assert_eq!(Symbol::from(Cell::Empty), Symbol::Empty);
        assert_eq!(Symbol::from(Cell::Wall), Symbol::Wall);
        assert_eq!(Symbol::from(Cell::Filled), Symbol::Block);
    }
}
