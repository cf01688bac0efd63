//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{Action, Direction, move_cursor};
use crate::status_line::StatusLine;
use surf_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move history list.
    History,
}

/// One row of the move history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Text shown for the entry.
    pub label: String,
    /// Whether this is the step being displayed.
    pub is_current: bool,
}

/// Builds the history list for `state`.
///
/// Empty while the game has no moves, since a lone "game start" entry has
/// nowhere to jump.
pub fn history_entries(state: &GameState) -> Vec<HistoryEntry> {
    if state.latest_step() == 0 {
        return Vec::new();
    }

    let start = std::iter::once("Go to game start".to_string());
    let moves = state
        .moves()
        .into_iter()
        .enumerate()
        .map(|(i, mov)| format!("Go to move #{} ({})", i + 1, mov));

    start
        .chain(moves)
        .enumerate()
        .map(|(step, label)| HistoryEntry {
            step,
            label,
            is_current: step == state.current_step(),
        })
        .collect()
}

/// Main application state.
///
/// Holds exactly one [`GameState`] and swaps it for the engine's result on
/// every action.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    config: TuiConfig,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            config,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status text for the displayed board.
    pub fn status_line(&self) -> StatusLine {
        StatusLine::for_state(&self.state, *self.config.symbols())
    }

    /// Entries for the history list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.state)
    }

    /// Applies one action.
    #[instrument(skip(self), fields(step = self.state.current_step()))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Navigate(direction) => self.navigate(direction),
            Action::PlaceAt(position) => self.place(position),
            Action::Confirm => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            Action::ToggleFocus => self.toggle_focus(),
            Action::StepBack => {
                if let Some(step) = self.state.current_step().checked_sub(1) {
                    self.jump(step);
                }
            }
            Action::StepForward => {
                if self.state.current_step() < self.state.latest_step() {
                    self.jump(self.state.current_step() + 1);
                }
            }
            Action::NewGame => self.new_game(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => {
                self.selected = match direction {
                    Direction::Up => self.selected.saturating_sub(1),
                    Direction::Down => (self.selected + 1).min(self.state.latest_step()),
                    Direction::Left | Direction::Right => self.selected,
                };
            }
        }
    }

    fn place(&mut self, position: Position) {
        let next = self.state.advance(position);
        if next == self.state {
            debug!(%position, "Move had no effect");
            return;
        }

        info!(%position, step = next.current_step(), "Move played");
        self.cursor = position;
        self.selected = next.current_step();
        self.state = next;
    }

    fn jump(&mut self, step: usize) {
        let next = self.state.jump_to(step);
        if next == self.state {
            return;
        }

        info!(step, "Jumped through history");
        self.selected = step;
        self.state = next;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            // Nothing to select until a move exists.
            Focus::Board if self.state.latest_step() == 0 => Focus::Board,
            Focus::Board => {
                self.selected = self.state.current_step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn new_game(&mut self) {
        debug!("Restarting game");
        self.state = GameState::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surf_tictactoe::{GameStatus, Player};

    fn app() -> App {
        App::new(TuiConfig::default())
    }

    #[test]
    fn test_history_hidden_until_first_move() {
        let mut app = app();
        assert!(app.history_entries().is_empty());

        app.handle(Action::PlaceAt(Position::Center));
        let entries = app.history_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Go to game start");
        assert_eq!(entries[1].label, "Go to move #1 (X → Center)");
        assert!(entries[1].is_current);
    }

    #[test]
    fn test_confirm_places_at_cursor() {
        let mut app = app();
        app.handle(Action::Navigate(Direction::Up));
        app.handle(Action::Confirm);

        assert_eq!(app.state().moves().len(), 1);
        assert_eq!(app.state().moves()[0].position, Position::TopCenter);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::TopLeft));
        app.handle(Action::PlaceAt(Position::Center));

        app.handle(Action::StepBack);
        assert_eq!(app.state().current_step(), 1);
        app.handle(Action::StepForward);
        assert_eq!(app.state().current_step(), 2);
        // Already at the end.
        app.handle(Action::StepForward);
        assert_eq!(app.state().current_step(), 2);
    }

    #[test]
    fn test_history_focus_jumps_to_selection() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::TopLeft));
        app.handle(Action::PlaceAt(Position::Center));

        app.handle(Action::ToggleFocus);
        assert_eq!(app.focus(), Focus::History);
        app.handle(Action::Navigate(Direction::Up));
        app.handle(Action::Navigate(Direction::Up));
        app.handle(Action::Confirm);

        assert_eq!(app.state().current_step(), 0);
        assert_eq!(app.state().history().len(), 3);
        assert_eq!(app.status_line().status(), GameStatus::Next(Player::X));
    }

    #[test]
    fn test_focus_stays_on_board_without_history() {
        let mut app = app();
        app.handle(Action::ToggleFocus);
        assert_eq!(app.focus(), Focus::Board);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::Center));
        let before = app.state().clone();

        app.handle(Action::PlaceAt(Position::Center));
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn test_new_game_resets() {
        let mut app = app();
        app.handle(Action::PlaceAt(Position::Center));
        app.handle(Action::ToggleFocus);
        app.handle(Action::NewGame);

        assert_eq!(app.state(), &GameState::new());
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
