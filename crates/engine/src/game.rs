//! Game module - the per-tick state machine
//!
//! ```text
//!            blocked descent / hard drop
//!  Falling ────────────────────────────────▶ Locking
//!     ▲                                        │ lock + line clear + spawn
//!     └────────────── spawn ok ────────────────┤
//!                                              │ spawn collision
//!                                              ▼
//!                                           GameOver (terminal)
//! ```
//!
//! One call to [`Game::step`] is one tick: at most one player action, then at
//! most one gravity step, then the lock if either of them grounded the piece.

use tracing::{debug, info};

use crate::core::{GameState, LockReport};
use crate::types::GameAction;

/// Where the loop is in the fall/lock cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    Locking,
    GameOver,
}

/// What a tick did, so the caller knows whether to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Board, active piece or HUD changed this tick
    pub changed: bool,
    /// Set when the active piece locked this tick
    pub locked: Option<LockReport>,
    /// Set on the tick that entered `GameOver`
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    phase: Phase,
    paused: bool,
    fall_interval: u32,
}

impl Game {
    /// Wrap a state and make sure a piece is active.
    ///
    /// If the state has no active piece one is spawned. A collision at spawn,
    /// or a pre-placed piece that already overlaps the grid, starts the game
    /// in `GameOver`.
    pub fn new(mut state: GameState, fall_interval_ticks: u32) -> Self {
        let alive = match state.active().copied() {
            Some(piece) => !state.grid().collides(&piece.pattern, piece.col, piece.row),
            None => state.spawn(),
        };
        info!(seed = state.seed(), fall_interval_ticks, "game started");
        Self {
            state,
            phase: if alive { Phase::Falling } else { Phase::GameOver },
            paused: false,
            fall_interval: fall_interval_ticks.max(1),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Advance one tick with the action polled this tick, if any
    pub fn step(&mut self, action: Option<GameAction>) -> StepReport {
        let mut report = StepReport::default();
        if self.phase == Phase::GameOver {
            return report;
        }

        if action == Some(GameAction::Pause) {
            self.paused = !self.paused;
            debug!(paused = self.paused, "pause toggled");
            report.changed = true;
            return report;
        }
        if self.paused {
            return report;
        }

        if let Some(action) = action {
            report.changed |= self.apply(action);
        }

        if self.phase == Phase::Falling && self.state.advance_fall_timer(self.fall_interval) {
            if self.state.try_move(0, 1) {
                report.changed = true;
            } else {
                self.phase = Phase::Locking;
            }
        }

        if self.phase == Phase::Locking {
            report.changed = true;
            report.locked = Some(self.lock_and_respawn());
            report.game_over = self.phase == Phase::GameOver;
        }

        report
    }

    fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.state.try_move(-1, 0),
            GameAction::MoveRight => self.state.try_move(1, 0),
            GameAction::SoftDrop => self.state.try_move(0, 1),
            GameAction::Rotate => self.state.try_rotate(),
            GameAction::HardDrop => {
                let distance = self.state.hard_drop();
                debug!(distance, "hard drop");
                self.phase = Phase::Locking;
                true
            }
            GameAction::Pause => false,
        }
    }

    fn lock_and_respawn(&mut self) -> LockReport {
        let report = self.state.lock_active();
        if report.rows_cleared > 0 {
            debug!(
                rows = report.rows_cleared,
                score = self.state.score(),
                lines = self.state.lines(),
                "rows cleared"
            );
        }

        if self.state.spawn() {
            self.phase = Phase::Falling;
        } else {
            self.phase = Phase::GameOver;
            info!(
                score = self.state.score(),
                lines = self.state.lines(),
                "game over: spawn collision"
            );
        }
        report
    }
}
