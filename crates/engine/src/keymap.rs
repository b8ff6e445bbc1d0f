//! Key mapping from terminal-independent keys to game commands.

use crate::types::{GameAction, Key};

/// What a key press asks the loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(GameAction),
    Quit,
}

/// Map a key to a command. Arrow keys, WASD and vim keys are all accepted.
pub fn command_for(key: Key) -> Option<Command> {
    let action = match key {
        Key::Esc | Key::Interrupt | Key::Char('q' | 'Q') => return Some(Command::Quit),

        Key::Left | Key::Char('a' | 'A' | 'h' | 'H') => GameAction::MoveLeft,
        Key::Right | Key::Char('d' | 'D' | 'l' | 'L') => GameAction::MoveRight,
        Key::Down | Key::Char('s' | 'S' | 'j' | 'J') => GameAction::SoftDrop,
        Key::Up | Key::Char('w' | 'W' | 'k' | 'K') => GameAction::Rotate,
        Key::Space | Key::Enter => GameAction::HardDrop,
        Key::Char('p' | 'P') => GameAction::Pause,

        Key::Char(_) => return None,
    };
    Some(Command::Play(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(command_for(Key::Left), Some(Command::Play(GameAction::MoveLeft)));
        assert_eq!(command_for(Key::Char('D')), Some(Command::Play(GameAction::MoveRight)));
        assert_eq!(command_for(Key::Char('j')), Some(Command::Play(GameAction::SoftDrop)));
    }

    #[test]
    fn test_rotate_and_drop_keys() {
        assert_eq!(command_for(Key::Up), Some(Command::Play(GameAction::Rotate)));
        assert_eq!(command_for(Key::Char('k')), Some(Command::Play(GameAction::Rotate)));
        assert_eq!(command_for(Key::Space), Some(Command::Play(GameAction::HardDrop)));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(command_for(Key::Char('q')), Some(Command::Quit));
        assert_eq!(command_for(Key::Esc), Some(Command::Quit));
        assert_eq!(command_for(Key::Interrupt), Some(Command::Quit));
        assert_eq!(command_for(Key::Char('x')), None);
    }
}
