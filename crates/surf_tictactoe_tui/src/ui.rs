//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use surf_tictactoe::{Board, Line as WinLine, Player, Position, Square, winning_line};

use crate::app::{App, Focus};
use crate::status_line::SymbolStyle;

const HELP: &str = "1-9 play · arrows move · Enter select · Tab history · [ ] step · n new game · q quit";

/// Renders the whole screen for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + tagline
            Constraint::Min(13),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[1]);

    let highlight = if *app.config().highlight_winning_line() {
        winning_line(app.state().board())
    } else {
        None
    };
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(
        frame,
        body[0],
        app.state().board(),
        cursor,
        highlight,
        *app.config().symbols(),
    );
    draw_history(frame, body[1], app);

    let status = Paragraph::new(app.status_line().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            app.config().title().as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.config().tagline().as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    highlight: Option<WinLine>,
    symbols: SymbolStyle,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                let in_line = highlight.is_some_and(|line| line.contains(&pos));
                draw_cell(frame, cell_area, board, pos, cursor == Some(pos), in_line, symbols);
            }
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }

    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    has_cursor: bool,
    in_winning_line: bool,
    symbols: SymbolStyle,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            symbols.symbol(Player::X).to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            symbols.symbol(Player::O).to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if has_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_winning_line {
        base_style.bg(Color::Yellow)
    } else {
        base_style
    };

    // Vertically centre the symbol in the 3-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .history_entries()
        .into_iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            let style = if entry.is_current {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{}{}", marker, entry.label), style)))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
