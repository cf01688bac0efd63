//! Interactive terminal game loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::config::TuiConfig;
use crate::input::action_for;
use crate::logging::init_file_logging;
use crate::ui;

/// Restores the terminal when dropped.
///
/// Every restore step runs even if an earlier one fails; failures are logged.
struct TerminalGuard;

impl TerminalGuard {
    /// Enters raw mode and the alternate screen, undoing raw mode if the
    /// screen switch fails.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(disable_raw_mode, || {
            execute!(io::stdout(), LeaveAlternateScreen, Show)
        });
    }
}

/// Runs both restore steps regardless of failures and returns how many failed.
fn restore(
    disable_raw: impl FnOnce() -> io::Result<()>,
    leave_screen: impl FnOnce() -> io::Result<()>,
) -> usize {
    let mut failures = 0;
    if let Err(err) = disable_raw() {
        error!(error = %err, "Failed to disable raw mode");
        failures += 1;
    }
    if let Err(err) = leave_screen() {
        error!(error = %err, "Failed to leave alternate screen");
        failures += 1;
    }
    failures
}

/// Runs the interactive game until the player quits.
///
/// The terminal is restored even when setup or the loop fails.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    init_file_logging(config.log_file())?;

    info!(symbols = %config.symbols(), "Starting Surf & Wave TUI");

    let res = {
        let _guard = TerminalGuard::enter()?;
        Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(anyhow::Error::from)
            .and_then(|mut terminal| {
                let mut app = App::new(config);
                run_app(&mut terminal, &mut app)
            })
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Goodbye");
    res
}

/// Draw, read one key, apply it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, &*app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match action_for(key.code) {
                Some(action) => app.handle(action),
                None => debug!(key = ?key.code, "Unbound key"),
            }
        }
    }
    Ok(())
}
