//! Key bindings and cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use surf_tictactoe::Position;

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row / earlier history.
    Up,
    /// Towards the bottom row / later history.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Arrow keys: board cursor or history selection, depending on focus.
    Navigate(Direction),
    /// Number keys 1-9: play directly at a cell.
    PlaceAt(Position),
    /// Enter/Space: play at the cursor or jump to the selected entry.
    Confirm,
    /// Tab: switch focus between board and history.
    ToggleFocus,
    /// `[`: one step back through history.
    StepBack,
    /// `]`: one step forward through history.
    StepForward,
    /// `n`: start over.
    NewGame,
    /// `q`/Esc: leave.
    Quit,
}

/// Maps a key to an action, if it is bound.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up => Action::Navigate(Direction::Up),
        KeyCode::Down => Action::Navigate(Direction::Down),
        KeyCode::Left => Action::Navigate(Direction::Left),
        KeyCode::Right => Action::Navigate(Direction::Right),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Action::PlaceAt(Position::from_index(digit - 1)?)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Tab => Action::ToggleFocus,
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
