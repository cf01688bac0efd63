//! Halt-at-win invariant: nothing is recorded after a winning move.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: only the last snapshot in the history may contain a win.
pub struct HaltsAtWinInvariant;

impl Invariant<GameState> for HaltsAtWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let before_last = history.len().saturating_sub(1);
        history[..before_last]
            .iter()
            .all(|board| rules::winner(board).is_none())
    }

    fn description() -> &'static str {
        "No history entry follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_win_as_last_entry_holds() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .filter_map(Position::from_index)
            .fold(GameState::new(), |s, p| s.advance(p));

        assert!(state.phase().is_terminal());
        assert!(HaltsAtWinInvariant::holds(&state));
    }

    #[test]
    fn test_entry_after_win_violates() {
        let state = GameState {
            history: vec![
                "XXX/OO./...".parse().unwrap(),
                "XXX/OOO/...".parse().unwrap(),
            ],
            current_step: 1,
        };
        assert!(!HaltsAtWinInvariant::holds(&state));
    }
}
