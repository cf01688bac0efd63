//! Surf & Wave tic-tac-toe rules engine.
//!
//! A small, pure, synchronous engine: boards are immutable values, every
//! operation is total, and a game is a single [`GameState`] value that the
//! caller replaces wholesale after each accepted transition.
//!
//! # Architecture
//!
//! - **Rules**: win/draw evaluation over the 8 fixed winning lines
//! - **Board**: immutable 3x3 snapshots, moves produce new boards
//! - **GameState**: history of snapshots plus a cursor for time travel
//! - **Status**: closed sum type describing what to show the players
//! - **Contracts**: move preconditions and history invariants
//!
//! # Example
//!
//! ```
//! use surf_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let state = GameState::new()
//!     .advance(Position::TopLeft)
//!     .advance(Position::Center);
//! assert_eq!(state.status(), GameStatus::Next(Player::X));
//!
//! // Time travel back to the opening and branch off.
//! let rewound = state.jump_to(0).advance(Position::BottomRight);
//! assert_eq!(rewound.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

// Crate-level exports - Domain types
pub use types::{Board, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Actions and rejections
pub use action::{Move, Rejection};
pub use error::ParseError;

// Crate-level exports - Rules
pub use rules::{Line, LINES, current_player, is_draw, is_full, winner, winning_line};

// Crate-level exports - State machine
pub use phases::Phase;
pub use state::GameState;
pub use status::{GameStatus, status};

// Crate-level exports - Contracts
pub use contracts::{Contract, GameUndecided, LegalMove, MoveContract, SquareIsEmpty};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SurfInvariants};

