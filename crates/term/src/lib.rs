//! Terminal rendering module.
//!
//! A small, game-oriented sink for terminal gameplay. It does no layout or
//! frame composition of its own: the engine tells it which board cells and
//! status lines changed, and it turns those into cursor moves, colours and
//! glyphs queued through crossterm.

pub mod renderer;
pub mod style;

pub use console_tetris_engine as engine;
pub use console_tetris_types as types;

pub use renderer::{encode_cell_into, encode_clear_into, encode_status_into, Layout, TerminalRenderer, STATUS_WIDTH};
pub use style::{appearance, CellStyle, Rgb, CELL_WIDTH};
