//! Game state with move history and time travel.
//!
//! A [`GameState`] is a value. `advance` and `jump_to` return a new state and
//! leave the receiver alone; a refused transition returns an equal state, so
//! callers tell accepted from rejected by comparing the two.

use super::action::{Move, Rejection};
use super::contracts::{Contract, MoveContract};
use super::phases::Phase;
use super::status::{GameStatus, status};
use super::{Board, Player, Position, rules};
use serde::Serialize;
use tracing::{debug, error, instrument, warn};

/// History of board snapshots plus the step currently shown.
///
/// `history[0]` is always the empty board and
/// `current_step < history.len()` always holds. Whose turn it is follows
/// from the parity of `current_step`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
}

impl GameState {
    /// Creates a new game: one empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Returns every recorded snapshot, starting with the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the most recent snapshot.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Whether X moves next at the current step.
    pub fn next_is_first_player(&self) -> bool {
        rules::is_first_player_turn(self.current_step)
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        rules::current_player(self.next_is_first_player())
    }

    /// Number of moves on the board at the current step.
    pub fn move_count(&self) -> usize {
        self.current_step
    }

    /// Phase of the board at the current step.
    pub fn phase(&self) -> Phase {
        Phase::of(self.board())
    }

    /// Status of the board at the current step.
    pub fn status(&self) -> GameStatus {
        // Deliberately the cursor's move count, not the history length: a
        // rewound view reports the board it shows, including "First player"
        // at step 0 and no "Draw" before the ninth move.
        status(self.board(), self.next_is_first_player(), self.move_count())
    }

    /// The move that produced each snapshot after the first.
    ///
    /// `moves()[i]` is the move recorded at step `i + 1`.
    #[instrument(skip(self))]
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .filter_map(|pair| Move::between(&pair[0], &pair[1]))
            .collect()
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Any snapshots after the current step are discarded first, so playing
    /// after a rewind abandons the old future.
    ///
    /// # Errors
    ///
    /// - [`Rejection::GameAlreadyDecided`] if the current board has a winner
    /// - [`Rejection::OccupiedCell`] if `position` is taken
    /// - [`Rejection::InvariantViolation`] if the postcondition fails (debug
    ///   builds only)
    #[instrument(skip(self), fields(step = self.current_step, position = %position))]
    pub fn try_advance(&self, position: Position) -> Result<Self, Rejection> {
        MoveContract::pre(self, &position)?;

        let mark = self.to_move();
        let board = self.board().apply_move(position, mark);

        let mut history = self.history[..=self.current_step].to_vec();
        let discarded = self.history.len() - history.len();
        if discarded > 0 {
            debug!(discarded, "Discarding future branch");
        }
        history.push(board);

        let next = Self {
            current_step: history.len() - 1,
            history,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(player = %mark, step = next.current_step, "Move accepted");
        Ok(next)
    }

    /// Plays the current player's mark at `position`, or returns an equal
    /// state if the move is refused.
    pub fn advance(&self, position: Position) -> Self {
        self.try_advance(position).unwrap_or_else(|rejection| {
            log_rejection(&rejection);
            self.clone()
        })
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Errors
    ///
    /// [`Rejection::OutOfRangeStep`] if `step` is not a recorded index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::OutOfRangeStep {
                step,
                len: self.history.len(),
            });
        }

        debug!(from = self.current_step, "Jumping through history");
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Moves the cursor to `step`, or returns an equal state if `step` is out
    /// of range.
    pub fn jump_to(&self, step: usize) -> Self {
        self.try_jump_to(step).unwrap_or_else(|rejection| {
            log_rejection(&rejection);
            self.clone()
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Out-of-range jumps point at a caller bug and get a warning; refused moves
/// are routine.
fn log_rejection(rejection: &Rejection) {
    match rejection {
        Rejection::OccupiedCell(_) | Rejection::GameAlreadyDecided(_) => {
            debug!(%rejection, "Move rejected");
        }
        Rejection::OutOfRangeStep { step, len } => {
            warn!(step, len, "Jump target out of range");
        }
        Rejection::InvariantViolation(_) => {
            error!(%rejection, "Transition refused");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history(), &[Board::new()]);
        assert_eq!(state.current_step(), 0);
        assert!(state.next_is_first_player());
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_try_advance_reports_occupied() {
        let state = GameState::new().advance(Position::Center);
        assert_eq!(
            state.try_advance(Position::Center),
            Err(Rejection::OccupiedCell(Position::Center))
        );
    }

    #[test]
    fn test_advance_does_not_touch_receiver() {
        let state = GameState::new();
        let next = state.advance(Position::Center);
        assert_eq!(state, GameState::new());
        assert_ne!(next, state);
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = GameState::new()
            .advance(Position::TopLeft)
            .advance(Position::Center);
        let jumped = state.jump_to(0);

        assert_eq!(jumped.history(), state.history());
        assert_eq!(jumped.board(), &Board::new());
        assert_eq!(jumped.latest_step(), 2);
    }

    #[test]
    fn test_try_jump_reports_range() {
        let state = GameState::new();
        assert_eq!(
            state.try_jump_to(1),
            Err(Rejection::OutOfRangeStep { step: 1, len: 1 })
        );
    }

    #[test]
    fn test_moves_follow_history() {
        let state = GameState::new()
            .advance(Position::Center)
            .advance(Position::TopLeft);
        assert_eq!(
            state.moves(),
            vec![
                Move::new(Player::X, Position::Center),
                Move::new(Player::O, Position::TopLeft),
            ]
        );
        // Moves describe the whole history, not just up to the cursor.
        assert_eq!(state.jump_to(0).moves().len(), 2);
    }
}
