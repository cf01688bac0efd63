//! Human-readable status text.

use serde::{Deserialize, Serialize};
use std::fmt;
use surf_tictactoe::{GameState, GameStatus, Player};

/// How player marks are drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SymbolStyle {
    /// Plain `X` and `O`.
    Letters,
    /// Surfer for X, wave for O.
    #[default]
    Emoji,
}

impl SymbolStyle {
    /// The glyph drawn in a board cell.
    pub fn symbol(self, player: Player) -> &'static str {
        match (self, player) {
            (SymbolStyle::Letters, Player::X) => "X",
            (SymbolStyle::Letters, Player::O) => "O",
            (SymbolStyle::Emoji, Player::X) => "🏄",
            (SymbolStyle::Emoji, Player::O) => "🌊",
        }
    }

    /// The player as named in status text, e.g. `🏄 (X)`.
    pub fn describe(self, player: Player) -> String {
        match self {
            SymbolStyle::Letters => player.to_string(),
            SymbolStyle::Emoji => format!("{} ({})", self.symbol(player), player),
        }
    }
}

/// Status text for one board.
///
/// The first move of a game is framed as "First player", later turns as
/// "Next player".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    status: GameStatus,
    move_count: usize,
    symbols: SymbolStyle,
}

impl StatusLine {
    /// Creates a status line.
    pub fn new(status: GameStatus, move_count: usize, symbols: SymbolStyle) -> Self {
        Self {
            status,
            move_count,
            symbols,
        }
    }

    /// Status line for the board under the state's cursor.
    pub fn for_state(state: &GameState, symbols: SymbolStyle) -> Self {
        Self::new(state.status(), state.move_count(), symbols)
    }

    /// The underlying status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            GameStatus::Winner(player) => write!(f, "Winner: {}", self.symbols.describe(player)),
            GameStatus::Draw => write!(f, "Game ended in a draw"),
            GameStatus::Next(player) if self.status.is_opening(self.move_count) => {
                write!(f, "First player: {}", self.symbols.describe(player))
            }
            GameStatus::Next(player) => write!(f, "Next player: {}", self.symbols.describe(player)),
        }
    }
}
