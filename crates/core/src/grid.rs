//! Grid module - the walled well pieces fall into
//!
//! The grid is a fixed `H x W` array of cells stored row-major. Columns `0` and
//! `W - 1` and the floor row `H - 1` are walls; the top is open.
//! Coordinates are `(col, row)` with row 0 at the top.
//!
//! The dimensions are const generics so tests can build small synthetic wells;
//! the game itself uses the defaults from `types`.

use arrayvec::ArrayVec;

use crate::pieces::Pattern;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

/// The game well, `H` rows by `W` columns including walls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const W: usize = GRID_WIDTH, const H: usize = GRID_HEIGHT> {
    rows: [[Cell; W]; H],
}

impl<const W: usize, const H: usize> Grid<W, H> {
    /// Create an empty well with its walls in place
    pub fn new() -> Self {
        assert!(W >= 3 && H >= 2, "grid needs room for walls and one playable cell");
        let mut rows = [[Cell::Empty; W]; H];
        for row in rows.iter_mut() {
            *row = Self::blank_row();
        }
        rows[H - 1] = [Cell::Wall; W];
        Self { rows }
    }

    /// An interior row: walls on both sides, empty in between
    fn blank_row() -> [Cell; W] {
        let mut row = [Cell::Empty; W];
        row[0] = Cell::Wall;
        row[W - 1] = Cell::Wall;
        row
    }

    #[inline(always)]
    fn in_bounds(col: i8, row: i8) -> bool {
        col >= 0 && (col as usize) < W && row >= 0 && (row as usize) < H
    }

    /// Whether `(col, row)` lies in the playable area `[1, W-2] x [0, H-2]`
    #[inline(always)]
    pub fn is_playable(col: i8, row: i8) -> bool {
        col >= 1 && (col as usize) <= W - 2 && row >= 0 && (row as usize) <= H - 2
    }

    /// Get cell at `(col, row)`, `None` when outside the grid
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        if !Self::in_bounds(col, row) {
            return None;
        }
        Some(self.rows[row as usize][col as usize])
    }

    /// Set a playable cell. Walls are fixed, so writes outside the playable
    /// area (or a write of `Wall`) are refused and return false.
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        if !Self::is_playable(col, row) || cell == Cell::Wall {
            return false;
        }
        self.rows[row as usize][col as usize] = cell;
        true
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> &[[Cell; W]; H] {
        &self.rows
    }

    /// Collision check: would `pattern` with its box origin at `(col, row)`
    /// put any occupied sub-cell outside the playable area or onto a
    /// non-empty cell?
    pub fn collides(&self, pattern: &Pattern, col: i8, row: i8) -> bool {
        pattern.occupied().any(|(dc, dr)| {
            let (Some(c), Some(r)) = (col.checked_add(dc), row.checked_add(dr)) else {
                return true;
            };
            if !Self::is_playable(c, r) {
                return true;
            }
            !self.rows[r as usize][c as usize].is_empty()
        })
    }

    /// Write `Filled` for every occupied sub-cell of `pattern` at `(col, row)`.
    ///
    /// Sub-cells that fall outside the playable area are skipped; callers
    /// only lock positions that passed [`Grid::collides`].
    pub fn lock(&mut self, pattern: &Pattern, col: i8, row: i8) {
        for (dc, dr) in pattern.occupied() {
            if let (Some(c), Some(r)) = (col.checked_add(dc), row.checked_add(dr)) {
                self.set(c, r, Cell::Filled);
            }
        }
    }

    /// Check if an interior row has every interior column filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= H - 1 {
            return false;
        }
        self.rows[row][1..W - 1].iter().all(|&c| c == Cell::Filled)
    }

    /// Number of interior rows that contain at least one filled cell
    pub fn occupied_rows(&self) -> usize {
        self.rows[..H - 1]
            .iter()
            .filter(|row| row[1..W - 1].contains(&Cell::Filled))
            .count()
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Single bottom-up compaction pass: `read` walks every interior row,
    /// `write` marks the next slot a surviving row lands in. Freed rows at the
    /// top are reset to blank. Returns the cleared row indices (bottom to top,
    /// as they were before the shift).
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, H> {
        let mut cleared = ArrayVec::new();
        let mut write = H - 1;

        for read in (0..H - 1).rev() {
            if self.is_row_full(read) {
                cleared.push(read);
                continue;
            }
            write -= 1;
            if write != read {
                self.rows[write] = self.rows[read];
            }
        }

        for row in &mut self.rows[..write] {
            *row = Self::blank_row();
        }

        cleared
    }

    /// Fill every interior column of `row` except those in `gaps` (for tests
    /// and benches)
    pub fn fill_row_except(&mut self, row: usize, gaps: &[usize]) {
        for col in 1..W - 1 {
            if !gaps.contains(&col) {
                self.set(col as i8, row as i8, Cell::Filled);
            }
        }
    }
}

impl<const W: usize, const H: usize> Default for Grid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}
