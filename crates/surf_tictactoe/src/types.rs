//! Core domain types for tic-tac-toe.

use super::error::ParseError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: [`Board::apply_move`] returns a new board and never
/// touches the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Places `mark` at `pos`, returning the resulting board.
    ///
    /// If the square is already taken, or the board already has a winner,
    /// the returned board is equal to `self`.
    #[instrument(skip(self), fields(position = %pos, mark = %mark))]
    pub fn apply_move(&self, pos: Position, mark: Player) -> Board {
        if !self.is_empty(pos) {
            debug!("Square occupied, board unchanged");
            return self.clone();
        }
        if let Some(winner) = rules::winner(self) {
            debug!(%winner, "Board already decided, board unchanged");
            return self.clone();
        }

        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(mark);
        Self { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the board as three numbered rows, e.g. `X|2|3`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses nine cells of `X`, `O`, or `.`/`-`/`_` for empty.
///
/// Whitespace, `/` and `|` are ignored so rows can be written apart:
/// `"XO./.X./..O"`.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut filled = 0;

        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '/' && *c != '|') {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                _ => return Err(ParseError::new(s, "a board")),
            };
            if filled == squares.len() {
                return Err(ParseError::new(s, "a board"));
            }
            squares[filled] = square;
            filled += 1;
        }

        if filled != squares.len() {
            return Err(ParseError::new(s, "a board"));
        }
        Ok(Self { squares })
    }
}
