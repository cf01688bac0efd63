//! Per-game state machine.
//!
//! `InProgress → {InProgress, Won, Drawn}`. `Won` and `Drawn` are terminal
//! for move-making; only a fresh game leaves them.

use super::rules;
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Phase of a game, derived from a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can still be made.
    InProgress,
    /// A player holds a winning line.
    Won(Player),
    /// The board is full with no winning line.
    Drawn,
}

impl Phase {
    /// Derives the phase of `board`.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = rules::winner(board) {
            Phase::Won(winner)
        } else if rules::is_full(board) {
            Phase::Drawn
        } else {
            Phase::InProgress
        }
    }

    /// Returns true if no further move can be made.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(*player),
            Phase::InProgress | Phase::Drawn => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::InProgress => write!(f, "In progress"),
            Phase::Won(player) => write!(f, "Player {} wins", player),
            Phase::Drawn => write!(f, "Draw"),
        }
    }
}
