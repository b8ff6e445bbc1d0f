//! Runner: the single-threaded poll / step / redraw / sleep loop.
//!
//! Each iteration reads at most one event, advances the [`Game`] by one tick,
//! redraws differentially when the tick changed something, then waits on the
//! [`Ticker`]. Quit is honoured at the iteration boundary. A resize event
//! re-lays out the sink and forces a full repaint in the same iteration.

use anyhow::Result;
use tracing::{debug, info};

use crate::collab::{InputSource, RenderSink};
use crate::config::EngineConfig;
use crate::core::{GameState, Spawner};
use crate::frame::Redraw;
use crate::game::Game;
use crate::keymap::{command_for, Command};
use crate::ticker::Ticker;
use crate::types::InputEvent;

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Quit { score: u32, lines: u32 },
    GameOver { score: u32, lines: u32 },
}

pub struct Runner<I, S> {
    game: Game,
    input: I,
    sink: S,
    ticker: Ticker,
    redraw: Redraw,
    drawn: bool,
}

impl<I: InputSource, S: RenderSink> Runner<I, S> {
    /// Build a fresh game from `config`
    pub fn new(config: EngineConfig, input: I, sink: S) -> Self {
        let spawner = match config.seed {
            Some(seed) => Spawner::new(seed),
            None => Spawner::from_entropy(),
        };
        let state = GameState::new(spawner).with_clear_bonus(config.clear_bonus);
        Self::with_game(Game::new(state, config.fall_interval_ticks), config, input, sink)
    }

    /// Drive an existing game
    pub fn with_game(game: Game, config: EngineConfig, input: I, sink: S) -> Self {
        Self {
            game,
            input,
            sink,
            ticker: Ticker::new(config.tick),
            redraw: Redraw::new(),
            drawn: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Force a full repaint on the next iteration
    pub fn invalidate(&mut self) {
        self.redraw.invalidate();
        self.drawn = false;
    }

    /// Run until the player quits or the game ends
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            if let Some(outcome) = self.tick()? {
                return Ok(outcome);
            }
            self.ticker.wait();
        }
    }

    /// One loop iteration without the trailing wait
    pub fn tick(&mut self) -> Result<Option<Outcome>> {
        let command = self.poll()?;
        if command == Some(Command::Quit) {
            let outcome = Outcome::Quit {
                score: self.game.state().score(),
                lines: self.game.state().lines(),
            };
            info!(?outcome, "player quit");
            return Ok(Some(outcome));
        }

        let action = match command {
            Some(Command::Play(action)) => Some(action),
            _ => None,
        };
        let report = self.game.step(action);

        if report.changed || !self.drawn {
            self.redraw.render(&self.game, &mut self.sink)?;
            self.drawn = true;
        }

        if self.game.is_over() {
            return Ok(Some(Outcome::GameOver {
                score: self.game.state().score(),
                lines: self.game.state().lines(),
            }));
        }
        Ok(None)
    }

    /// Block (tick by tick) until any key arrives. Resizes in the meantime
    /// repaint the final frame.
    pub fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if self.input.event_pending()? {
                match self.input.read_event()? {
                    Some(InputEvent::Key(_)) => return Ok(()),
                    Some(InputEvent::Resize { width, height }) => {
                        self.resize(width, height)?;
                        self.redraw.render(&self.game, &mut self.sink)?;
                        self.drawn = true;
                    }
                    None => {}
                }
            }
            self.ticker.wait();
        }
    }

    fn poll(&mut self) -> Result<Option<Command>> {
        if !self.input.event_pending()? {
            return Ok(None);
        }
        match self.input.read_event()? {
            Some(InputEvent::Key(key)) => Ok(command_for(key)),
            Some(InputEvent::Resize { width, height }) => {
                self.resize(width, height)?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        debug!(width, height, "terminal resized");
        self.sink.resize(width, height)?;
        self.invalidate();
        Ok(())
    }
}
