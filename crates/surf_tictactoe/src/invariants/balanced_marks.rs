//! Balanced marks invariant: X is never behind O, and never two ahead.

use super::Invariant;
use crate::{Board, GameState, Player};

/// Invariant: every snapshot has `count(X) == count(O)` or one more X.
///
/// X moves first, so any board reached by legal play satisfies this.
pub struct BalancedMarksInvariant;

impl BalancedMarksInvariant {
    /// Checks a single board.
    pub fn board_holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }
}

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().all(Self::board_holds)
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_checks() {
        assert!(BalancedMarksInvariant::board_holds(&Board::new()));
        assert!(BalancedMarksInvariant::board_holds(&"X../.../...".parse().unwrap()));
        assert!(BalancedMarksInvariant::board_holds(&"XO./.../...".parse().unwrap()));
        assert!(!BalancedMarksInvariant::board_holds(&"XX./.../...".parse().unwrap()));
        assert!(!BalancedMarksInvariant::board_holds(&"O../.../...".parse().unwrap()));
    }

    #[test]
    fn test_checks_every_snapshot() {
        // The bad snapshot is not the one under the cursor.
        let state = GameState {
            history: vec![Board::new(), "XX./.../...".parse().unwrap(), "XXO/.../...".parse().unwrap()],
            current_step: 2,
        };
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
