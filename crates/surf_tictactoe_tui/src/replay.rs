//! Non-interactive replay of a move list.

use anyhow::{Context, Result};
use std::io::Write;
use surf_tictactoe::{GameState, Position};
use tracing::{info, instrument, warn};

use crate::status_line::{StatusLine, SymbolStyle};

/// Plays `moves` from a fresh game, optionally jumps to `jump`, and writes
/// the board and status line to `out`.
///
/// Moves the engine refuses are skipped with a warning; moves that do not
/// name a cell are an error.
#[instrument(skip(out))]
pub fn run_replay(
    moves: &[String],
    jump: Option<usize>,
    symbols: SymbolStyle,
    out: &mut impl Write,
) -> Result<()> {
    let positions = moves
        .iter()
        .map(|m| m.parse::<Position>().with_context(|| format!("Invalid move {:?}", m)))
        .collect::<Result<Vec<_>>>()?;

    let mut state = GameState::new();
    for position in positions {
        match state.try_advance(position) {
            Ok(next) => state = next,
            Err(rejection) => warn!(%position, %rejection, "Skipping move"),
        }
    }

    if let Some(step) = jump {
        state = state.jump_to(step);
    }

    info!(
        step = state.current_step(),
        len = state.history().len(),
        "Replay finished"
    );

    writeln!(out, "{}", state.board())?;
    writeln!(out)?;
    writeln!(out, "{}", StatusLine::for_state(&state, symbols))?;
    Ok(())
}
