//! Command-line interface for surf_tictactoe.

use crate::status_line::SymbolStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Surf & Wave tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "surf_tictactoe")]
#[command(about = "Surf & Wave tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// How marks are drawn (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub symbols: Option<SymbolStyle>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply moves and print the resulting board and status
    Replay {
        /// Moves as 0-based board indices (0 top-left, 4 center, 8 bottom-right)
        /// or labels such as "center". Printed boards number empty cells 1-9.
        #[arg(required = true)]
        moves: Vec<String>,

        /// History step to show after the moves are applied
        #[arg(long)]
        jump: Option<usize>,
    },
}
