//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} advance {Q}`. A failed precondition is an ordinary rejection, a
//! failed postcondition is an engine bug.

use super::action::Rejection;
use super::invariants::{InvariantSet, SurfInvariants};
use super::{Board, GameState, Position, rules};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Rejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`Rejection::OccupiedCell`] if `position` is taken.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), Rejection> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::OccupiedCell(position))
        }
    }
}

/// Precondition: Nobody has won the displayed board yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`Rejection::GameAlreadyDecided`] if the board has a winner.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), Rejection> {
        match rules::winner(board) {
            Some(winner) => Err(Rejection::GameAlreadyDecided(winner)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: the game is undecided and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(position: Position, board: &Board) -> Result<(), Rejection> {
        GameUndecided::check(board)?;
        SquareIsEmpty::check(position, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameState::advance`].
///
/// Preconditions (on the board under the cursor):
/// - Game is undecided
/// - Square is empty
///
/// Postconditions:
/// - Marks stay balanced
/// - Nothing follows a win
/// - History grows one alternating mark per ply
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, action: &Position) -> Result<(), Rejection> {
        LegalMove::check(*action, state.board())
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), Rejection> {
        SurfInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Rejection::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
