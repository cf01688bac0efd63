//! Ply-by-ply invariant: history grows one alternating mark at a time.

use super::Invariant;
use crate::{Board, GameState, Move, Player};

/// Invariant: the history starts empty and each entry adds exactly one mark.
///
/// X makes the first ply and every later ply belongs to the opponent of the
/// previous mover. No earlier square changes, and the cursor points into the
/// history.
pub struct PlyByPlyInvariant;

impl Invariant<GameState> for PlyByPlyInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        if history.first() != Some(&Board::new()) || state.current_step() >= history.len() {
            return false;
        }

        let mut expected = Player::X;
        history.windows(2).all(|pair| match Move::between(&pair[0], &pair[1]) {
            Some(mov) if mov.player == expected => {
                expected = mov.player.opponent();
                true
            }
            _ => false,
        })
    }

    fn description() -> &'static str {
        "Each history entry adds one mark, alternating X and O, and the cursor is in range"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(PlyByPlyInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let state = GameState::new()
            .advance(Position::TopLeft)
            .advance(Position::Center)
            .advance(Position::TopRight)
            .advance(Position::BottomLeft);
        assert!(PlyByPlyInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let state = GameState {
            history: vec![
                Board::new(),
                "X../.../...".parse().unwrap(),
                "X../.X./...".parse().unwrap(),
            ],
            current_step: 2,
        };
        assert!(!PlyByPlyInvariant::holds(&state));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let state = GameState {
            history: vec!["X../.../...".parse().unwrap()],
            current_step: 0,
        };
        assert!(!PlyByPlyInvariant::holds(&state));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let state = GameState {
            history: vec![Board::new(), "O../.../...".parse().unwrap()],
            current_step: 1,
        };
        assert!(!PlyByPlyInvariant::holds(&state));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let state = GameState {
            history: vec![Board::new(), "X../.../...".parse().unwrap()],
            current_step: 2,
        };
        assert!(!PlyByPlyInvariant::holds(&state));
    }

    #[test]
    fn test_skipped_ply_violates() {
        let state = GameState {
            history: vec![Board::new(), "XO./.../...".parse().unwrap()],
            current_step: 1,
        };
        assert!(!PlyByPlyInvariant::holds(&state));
    }
}
