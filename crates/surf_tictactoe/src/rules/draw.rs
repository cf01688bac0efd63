//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
///
/// The winner check runs first, so a board completed by a winning move is
/// never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    winner(board).is_none() && is_full(board)
}
