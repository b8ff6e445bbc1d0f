//! Game state module - the explicitly owned simulation state
//!
//! Ties together the grid, the active piece, the spawner and the counters.
//! Every movement, rotation, gravity step and spawn goes through
//! [`GameState::collides`]; rejected moves leave the state untouched.

use crate::grid::Grid;
use crate::pieces::{Pattern, Piece};
use crate::spawner::Spawner;
use crate::types::{PieceKind, DEFAULT_CLEAR_BONUS};

/// Result of locking the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockReport {
    /// Rows removed by the line-clear pass that followed the lock
    pub rows_cleared: u32,
    /// Score added by this lock (the clear bonus, or 0)
    pub score_gained: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<Piece>,
    spawner: Spawner,
    score: u32,
    lines: u32,
    fall_timer: u32,
    clear_bonus: u32,
}

impl GameState {
    /// Create a fresh state with an empty grid and no active piece
    pub fn new(spawner: Spawner) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            spawner,
            score: 0,
            lines: 0,
            fall_timer: 0,
            clear_bonus: DEFAULT_CLEAR_BONUS,
        }
    }

    /// Convenience constructor for a seeded game
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Spawner::new(seed))
    }

    pub fn with_clear_bonus(mut self, bonus: u32) -> Self {
        self.clear_bonus = bonus;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_timer(&self) -> u32 {
        self.fall_timer
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn next_kind(&self) -> PieceKind {
        self.spawner.peek()
    }

    /// Spawn the next piece from the spawner.
    ///
    /// The piece becomes active either way; returns false when it collides at
    /// the spawn coordinate, which the caller treats as game over.
    pub fn spawn(&mut self) -> bool {
        let piece = self.spawner.spawn();
        self.place(piece)
    }

    /// Make `piece` the active piece; false on spawn collision
    pub fn place(&mut self, piece: Piece) -> bool {
        let blocked = self.grid.collides(&piece.pattern, piece.col, piece.row);
        self.active = Some(piece);
        self.fall_timer = 0;
        !blocked
    }

    /// Collision check relative to the active piece's origin
    ///
    /// Returns true when there is no active piece.
    pub fn collides(&self, pattern: &Pattern, dcol: i8, drow: i8) -> bool {
        match self.active {
            Some(piece) => self
                .grid
                .collides(pattern, piece.col + dcol, piece.row + drow),
            None => true,
        }
    }

    /// Shift the active piece; false (and no change) when blocked
    pub fn try_move(&mut self, dcol: i8, drow: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        if self.collides(&piece.pattern, dcol, drow) {
            return false;
        }
        self.active = Some(Piece {
            col: piece.col + dcol,
            row: piece.row + drow,
            ..piece
        });
        true
    }

    /// Rotate the active piece clockwise in place; rejected rotations are final
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let candidate = piece.pattern.rotated_cw();
        if self.collides(&candidate, 0, 0) {
            return false;
        }
        self.active = Some(Piece {
            pattern: candidate,
            ..piece
        });
        true
    }

    /// Move the active piece down until blocked; returns rows travelled
    pub fn hard_drop(&mut self) -> u32 {
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        distance
    }

    /// Count a tick toward the next forced descent.
    ///
    /// Returns true (and resets the timer) once `interval` ticks have passed.
    pub fn advance_fall_timer(&mut self, interval: u32) -> bool {
        self.fall_timer += 1;
        if self.fall_timer >= interval {
            self.fall_timer = 0;
            return true;
        }
        false
    }

    /// Lock the active piece into the grid, then clear full rows.
    ///
    /// The score grows by the clear bonus once per lock that cleared at least
    /// one row, regardless of how many rows went.
    pub fn lock_active(&mut self) -> LockReport {
        let Some(piece) = self.active.take() else {
            return LockReport {
                rows_cleared: 0,
                score_gained: 0,
            };
        };

        self.grid.lock(&piece.pattern, piece.col, piece.row);

        let rows_cleared = self.grid.clear_full_rows().len() as u32;
        let score_gained = if rows_cleared > 0 { self.clear_bonus } else { 0 };
        self.lines = self.lines.saturating_add(rows_cleared);
        self.score = self.score.saturating_add(score_gained);

        LockReport {
            rows_cleared,
            score_gained,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, FLOOR_ROW};

    fn state_with(kind: PieceKind) -> GameState {
        let mut state = GameState::with_seed(1);
        assert!(state.place(Piece::spawn(kind)));
        state
    }

    #[test]
    fn move_is_rejected_at_left_wall() {
        let mut state = state_with(PieceKind::J);
        let mut steps = 0;
        while state.try_move(-1, 0) {
            steps += 1;
        }
        // J occupies box columns 0-2, box starts at column 4, first interior column is 1.
        assert_eq!(steps, 3);
        let before = *state.active().unwrap();
        assert!(!state.try_move(-1, 0));
        assert_eq!(*state.active().unwrap(), before);
    }

    #[test]
    fn blocked_rotation_leaves_piece_unchanged() {
        let mut state = state_with(PieceKind::I);
        // Vertical I lands in box column 3 -> grid column 7, rows 0-3.
        state.grid_mut().set(7, 2, Cell::Filled);
        let before = *state.active().unwrap();
        assert!(!state.try_rotate());
        assert_eq!(*state.active().unwrap(), before);
    }

    #[test]
    fn hard_drop_then_lock_o_piece() {
        let mut state = state_with(PieceKind::O);
        state.hard_drop();
        let piece = *state.active().unwrap();
        assert_eq!(piece.row as usize, FLOOR_ROW - 2);

        let report = state.lock_active();
        assert_eq!(report.rows_cleared, 0);
        assert!(state.active().is_none());
        for row in [FLOOR_ROW - 2, FLOOR_ROW - 1] {
            for col in [5, 6] {
                assert_eq!(state.grid().get(col, row as i8), Some(Cell::Filled));
            }
        }
    }

    #[test]
    fn clear_bonus_is_per_pass_not_per_line() {
        let mut state = state_with(PieceKind::I).with_clear_bonus(100);
        // Two rows missing only the four cells a horizontal I fills.
        let bottom = FLOOR_ROW - 1;
        state.grid_mut().fill_row_except(bottom, &[4, 5, 6, 7]);
        state.hard_drop();
        let report = state.lock_active();
        assert_eq!(report.rows_cleared, 1);
        assert_eq!(state.score(), 100);

        state.grid_mut().fill_row_except(bottom, &[1]);
        state.grid_mut().fill_row_except(bottom - 1, &[1]);
        assert!(state.place(Piece {
            pattern: Pattern::from_rows(["#...", "#...", "....", "...."]),
            kind: PieceKind::I,
            col: 1,
            row: 0,
        }));
        state.hard_drop();
        let report = state.lock_active();
        assert_eq!(report.rows_cleared, 2);
        assert_eq!(report.score_gained, 100);
        assert_eq!(state.score(), 200);
        assert_eq!(state.lines(), 3);
    }

    #[test]
    fn score_saturates_instead_of_wrapping() {
        let mut state = GameState::with_seed(1).with_clear_bonus(u32::MAX - 10);
        let bottom = FLOOR_ROW - 1;
        for _ in 0..2 {
            state.grid_mut().fill_row_except(bottom, &[4, 5, 6, 7]);
            assert!(state.place(Piece::spawn(PieceKind::I)));
            state.hard_drop();
            assert_eq!(state.lock_active().rows_cleared, 1);
        }
        assert_eq!(state.score(), u32::MAX);
        assert_eq!(state.lines(), 2);
    }

    #[test]
    fn fall_timer_fires_on_interval() {
        let mut state = state_with(PieceKind::T);
        assert!(!state.advance_fall_timer(3));
        assert!(!state.advance_fall_timer(3));
        assert!(state.advance_fall_timer(3));
        assert_eq!(state.fall_timer(), 0);
    }
}
