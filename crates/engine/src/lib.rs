//! Game loop crate.
//!
//! Drives the pure simulation in `core` on a fixed tick, interleaving player
//! input with gravity, and redraws the board differentially through a
//! [`RenderSink`]. Keys and resizes arrive through an [`InputSource`]. Both
//! collaborators are traits so the loop runs the same against a terminal or a
//! test double.
//!
//! ```
//! use console_tetris_engine::{Game, Phase};
//! use console_tetris_engine::core::GameState;
//! use console_tetris_engine::types::GameAction;
//!
//! let mut game = Game::new(GameState::with_seed(7), 25);
//! game.step(Some(GameAction::HardDrop));
//! assert_eq!(game.phase(), Phase::Falling);
//! assert!(game.state().grid().occupied_rows() > 0);
//! ```

pub mod collab;
pub mod config;
pub mod frame;
pub mod game;
pub mod keymap;
pub mod runner;
pub mod ticker;

pub use console_tetris_core as core;
pub use console_tetris_types as types;

pub use collab::{InputSource, RenderSink};
pub use config::EngineConfig;
pub use frame::{compose, status_lines, Frame, Redraw, STATUS_LINES};
pub use game::{Game, Phase, StepReport};
pub use keymap::{command_for, Command};
pub use runner::{Outcome, Runner};
pub use ticker::Ticker;
