//! Turn order: X opens, then players alternate.

use crate::Player;

/// Maps the turn flag to a mark: `true` is the first player (X).
pub fn current_player(is_first_player_turn: bool) -> Player {
    if is_first_player_turn { Player::X } else { Player::O }
}

/// Whether the first player moves at history step `step`.
///
/// X plays on even steps, starting with the empty board at step 0.
pub fn is_first_player_turn(step: usize) -> bool {
    step % 2 == 0
}
