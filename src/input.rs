use crossterm::event::KeyCode;

use crate::movement::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Arrow keys and vi-keys (`h j k l y u b n`) move; `q` and Esc quit.
pub const fn command_for(key: KeyCode) -> Option<Command> {
    let direction = match key {
        KeyCode::Up | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l') => Direction::Right,
        KeyCode::Char('y') => Direction::UpLeft,
        KeyCode::Char('u') => Direction::UpRight,
        KeyCode::Char('b') => Direction::DownLeft,
        KeyCode::Char('n') => Direction::DownRight,
        KeyCode::Char('q') | KeyCode::Esc => return Some(Command::Quit),
        _ => return None,
    };
    Some(Command::Move(direction))
}
