//! Terminal front end for Surf & Wave tic-tac-toe.
//!
//! The imperative shell around the [`surf_tictactoe`] engine: it owns one
//! [`GameState`](surf_tictactoe::GameState) at a time, turns key presses into
//! `advance`/`jump_to` calls, and renders whatever state comes back.
//!
//! # Architecture
//!
//! - **App**: the single owned game state plus cursor and focus
//! - **Input**: key codes to [`Action`]s
//! - **UI**: stateless ratatui rendering of an [`App`]
//! - **Status line**: text for a [`GameStatus`](surf_tictactoe::GameStatus)
//! - **Replay**: non-interactive play from a list of moves

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod status_line;
mod tui;
pub mod ui;

// Crate-level exports - Application state
pub use app::{App, Focus, HistoryEntry, history_entries};

// Crate-level exports - Input
pub use input::{Action, Direction, action_for, move_cursor};

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TuiConfig};

// Crate-level exports - Formatting
pub use status_line::{StatusLine, SymbolStyle};

// Crate-level exports - Entry points
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::run_replay;
pub use tui::run_tui;
