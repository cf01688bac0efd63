//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A history of board snapshots
//! can be read back as a list of moves, and a refused move is described by a
//! [`Rejection`] rather than an error path.

use super::{Board, Player, Position, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Recovers the single move that turns `before` into `after`.
    ///
    /// Returns `None` unless exactly one empty square became occupied and
    /// every other square is unchanged.
    #[instrument(skip_all)]
    pub fn between(before: &Board, after: &Board) -> Option<Move> {
        let mut found = None;
        for pos in Position::ALL {
            match (before.get(pos), after.get(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, Square::Occupied(player)) if found.is_none() => {
                    found = Some(Move::new(player, pos));
                }
                _ => return None,
            }
        }
        found
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.player, self.position.label())
    }
}

/// Why the engine refused a transition.
///
/// Rejections never escape the total operations
/// ([`GameState::advance`](crate::GameState::advance) and
/// [`GameState::jump_to`](crate::GameState::jump_to)), which hand back the
/// unchanged state instead. The `try_` variants surface them to callers that
/// want the reason.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(Position),

    /// The displayed board already has a winner.
    #[display("Game is already decided in favour of {}", _0)]
    GameAlreadyDecided(Player),

    /// A jump target outside the recorded history.
    #[display("Step {step} is outside history of length {len}")]
    OutOfRangeStep {
        /// Requested step.
        step: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for Rejection {}
