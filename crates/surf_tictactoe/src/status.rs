//! What the players should be told about a board.

use super::{Board, Player, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Closed description of a board for display.
///
/// Rendering to text is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "player", rename_all = "lowercase")]
pub enum GameStatus {
    /// A player holds a winning line.
    Winner(Player),
    /// All nine moves were made without a winner.
    Draw,
    /// The game continues with this player.
    Next(Player),
}

impl GameStatus {
    /// True for the `Next` case before any move, which callers may frame as
    /// "first player" rather than "next player".
    pub fn is_opening(&self, move_count: usize) -> bool {
        matches!(self, GameStatus::Next(_)) && move_count == 0
    }

    /// Returns true for `Winner` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Next(_))
    }
}

/// Derives the status of `board`.
///
/// Precedence: a winner, then a draw once `move_count` reaches nine, then the
/// player to move.
#[instrument(skip(board))]
pub fn status(board: &Board, next_is_first_player: bool, move_count: usize) -> GameStatus {
    if let Some(winner) = rules::winner(board) {
        return GameStatus::Winner(winner);
    }

    if move_count == Position::ALL.len() {
        return GameStatus::Draw;
    }

    GameStatus::Next(rules::current_player(next_is_first_player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_status() {
        let status = status(&Board::new(), true, 0);
        assert_eq!(status, GameStatus::Next(Player::X));
        assert!(status.is_opening(0));
        assert!(!status.is_over());
    }

    #[test]
    fn test_winner_beats_draw() {
        // Nine moves, and the last one completed a line.
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert_eq!(status(&board, false, 9), GameStatus::Winner(Player::X));
    }

    #[test]
    fn test_draw_at_nine_moves() {
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        let status = status(&board, false, 9);
        assert_eq!(status, GameStatus::Draw);
        assert!(status.is_over());
        assert!(!status.is_opening(9));
    }

    #[test]
    fn test_next_player_follows_flag() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(status(&board, false, 1), GameStatus::Next(Player::O));
    }

    #[test]
    fn test_serialized_shape() {
        assert_eq!(
            serde_json::to_value(GameStatus::Winner(Player::O)).unwrap(),
            serde_json::json!({ "type": "winner", "player": "O" })
        );
        assert_eq!(
            serde_json::to_value(GameStatus::Draw).unwrap(),
            serde_json::json!({ "type": "draw" })
        );
    }
}
