//! Terminal Tetris runner (default binary).
//!
//! Parses the configuration, optionally starts file logging, then hands the
//! terminal to the game loop. The terminal is restored on every exit path.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use console_tetris::config::Args;
use console_tetris::engine::{Outcome, Runner};
use console_tetris::input::TerminalInput;
use console_tetris::logging;
use console_tetris::term::TerminalRenderer;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.engine_config()?;

    let _guard = match &args.log_file {
        Some(path) => Some(logging::init(path, args.log_level)?),
        None => None,
    };
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let outcome = result?;
    match outcome {
        Outcome::Quit { score, lines } | Outcome::GameOver { score, lines } => {
            println!("score {score}  lines {lines}");
        }
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: console_tetris::engine::EngineConfig) -> Result<Outcome> {
    let mut runner = Runner::new(config, TerminalInput::new(), term);
    let outcome = runner.run()?;
    if let Outcome::GameOver { .. } = outcome {
        // Leave the final board and banner up until a key is pressed.
        runner.wait_for_key()?;
    }
    info!(?outcome, "finished");
    Ok(outcome)
}
