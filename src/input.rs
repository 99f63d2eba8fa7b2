use crossterm::event::{KeyCode, KeyEvent};

use crate::geometry::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Turn(Direction),
    Quit,
}

/// Maps a raw key event to a game intent. Keys outside the map carry
/// no meaning and are deliberately ignored.
pub fn map_key(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Up => Some(InputAction::Turn(Direction::Up)),
        KeyCode::Down => Some(InputAction::Turn(Direction::Down)),
        KeyCode::Left => Some(InputAction::Turn(Direction::Left)),
        KeyCode::Right => Some(InputAction::Turn(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}
