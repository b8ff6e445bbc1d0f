//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the simulation: the walled grid, piece patterns, the
//! spawner and the owned [`GameState`]. It has no dependency on terminals,
//! clocks or logging, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: grids are const-generic, so tests can use tiny wells
//! - **Allocation-free**: grid, patterns and cleared-row lists live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size walled grid with the collision check and line clear
//! - [`pieces`]: 4x4 occupancy patterns, the seven templates, rotation
//! - [`spawner`]: uniform random piece selection with a one-piece preview
//! - [`game_state`]: active piece, score, lines and fall timer
//!
//! # Example
//!
//! ```
//! use console_tetris_core::GameState;
//!
//! let mut game = GameState::with_seed(12345);
//! assert!(game.spawn());
//!
//! game.try_move(1, 0);
//! game.try_rotate();
//! game.hard_drop();
//! let report = game.lock_active();
//!
//! assert_eq!(report.rows_cleared, 0);
//! assert!(game.grid().occupied_rows() > 0);
//! ```

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod spawner;

pub use console_tetris_types as types;

pub use game_state::{GameState, LockReport};
pub use grid::Grid;
pub use pieces::{template, Pattern, Piece};
pub use spawner::Spawner;
