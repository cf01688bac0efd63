//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating boards according to
//! tic-tac-toe rules. Rules are separated from board storage and from the
//! game history so they can be composed into contracts and invariants.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::{current_player, is_first_player_turn};
pub use win::{Line, LINES, winner, winning_line};
