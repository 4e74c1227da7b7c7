//! Keyboard decoding: crossterm key events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Quit,
}

/// Decode a key press. Keys without a binding return `None` and are
/// simply ignored by the loop.
pub fn decode_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::Turn(Direction::Right),
        KeyCode::Char('r' | 'R') => Command::Restart,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}
