//! Integration tests for the game loop state machine

use console_tetris::core::{GameState, Piece, Spawner};
use console_tetris::engine::{Game, Phase};
use console_tetris::types::{Cell, GameAction, PieceKind, FLOOR_ROW};

#[test]
fn test_game_lifecycle() {
    let game = Game::new(GameState::with_seed(12345), 25);
    assert_eq!(game.phase(), Phase::Falling);
    assert!(game.state().active().is_some());
    assert!(!game.paused());
    assert_eq!(game.state().score(), 0);
    assert_eq!(game.state().lines(), 0);
}

#[test]
fn test_hard_drop_o_locks_above_floor() {
    let mut state = GameState::new(Spawner::new(3));
    assert!(state.place(Piece::spawn(PieceKind::O)));
    let mut game = Game::new(state, 1000);

    let report = game.step(Some(GameAction::HardDrop));
    assert!(report.changed);
    assert_eq!(report.locked.map(|l| l.rows_cleared), Some(0));
    assert_eq!(game.phase(), Phase::Falling);

    let grid = game.state().grid();
    let top = FLOOR_ROW - 2;
    for row in [top, top + 1] {
        for col in [5, 6] {
            assert_eq!(grid.get(col, row as i8), Some(Cell::Filled), "({col}, {row})");
        }
        for col in [4, 7] {
            assert_eq!(grid.get(col, row as i8), Some(Cell::Empty), "({col}, {row})");
        }
    }
    assert_eq!(grid.occupied_rows(), 2);
}

#[test]
fn test_spawn_collision_ends_game_and_stops_descent() {
    let mut state = GameState::new(Spawner::new(11));
    // O parked against the left wall, clear of the spawn box.
    assert!(state.place(Piece {
        col: 0,
        ..Piece::spawn(PieceKind::O)
    }));
    for col in 4..=7 {
        state.grid_mut().set(col, 0, Cell::Filled);
        state.grid_mut().set(col, 1, Cell::Filled);
    }

    let mut game = Game::new(state, 1);
    assert_eq!(game.phase(), Phase::Falling);

    let report = game.step(Some(GameAction::HardDrop));
    assert!(report.game_over);
    assert_eq!(game.phase(), Phase::GameOver);
    let stuck = *game.state().active().unwrap();
    assert_eq!(stuck.row, 0);

    for _ in 0..10 {
        let report = game.step(Some(GameAction::SoftDrop));
        assert!(!report.changed);
        assert!(report.locked.is_none());
    }
    assert_eq!(*game.state().active().unwrap(), stuck);
}

#[test]
fn test_soft_drop_is_no_op_when_blocked() {
    let mut state = GameState::new(Spawner::new(2));
    assert!(state.place(Piece::spawn(PieceKind::T)));
    let mut game = Game::new(state, 10_000);

    let mut moved = 0;
    while game.step(Some(GameAction::SoftDrop)).changed {
        moved += 1;
    }
    // T is two rows tall: its box origin stops two rows above the floor.
    assert_eq!(moved as usize, FLOOR_ROW - 2);
    assert_eq!(game.phase(), Phase::Falling);
    assert!(game.state().grid().occupied_rows() == 0);
}

#[test]
fn test_score_and_lines_never_decrease() {
    let mut game = Game::new(GameState::with_seed(77), 1);
    let actions = [
        Some(GameAction::MoveLeft),
        Some(GameAction::Rotate),
        None,
        Some(GameAction::HardDrop),
        Some(GameAction::MoveRight),
        Some(GameAction::MoveRight),
        None,
    ];
    let (mut score, mut lines) = (0, 0);
    for action in actions.iter().cycle().take(5_000) {
        if game.is_over() {
            break;
        }
        game.step(*action);
        assert!(game.state().score() >= score);
        assert!(game.state().lines() >= lines);
        score = game.state().score();
        lines = game.state().lines();
    }
    assert!(game.is_over());
}
