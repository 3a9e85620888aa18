//! Stateless UI rendering for the board and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timetravel::{Player, Position, Square};

use super::app::{App, Focus};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + moves
            Constraint::Length(3), // Message
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_game(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(pane_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(11)])
        .split(inner);

    let status = Paragraph::new(app.session().status_text())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, parts[0]);

    draw_board(frame, parts[1], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 38, 11);
    let open = app.session().open_cells();

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

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, &open, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, open: &[Position], row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, open.contains(&pos), pos);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, open: bool, pos: Position) {
    let session = app.session();
    let square = session.board().get(pos);

    let (symbol, mut style) = match square {
        // Key hint only while the square can still be played
        Square::Empty if open => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if session.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the symbol in the 3-line cell
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let history_focused = app.focus() == Focus::History;

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Sort by: {} (s)", session.order().label()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
    ];

    for (row, entry) in session.entries().iter().enumerate() {
        let mut style = if entry.is_current {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        if history_focused && row == app.selected() {
            style = style.bg(Color::White).fg(Color::Black);
        }
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.label),
            style,
        )));
    }

    let moves = Paragraph::new(lines).block(
        Block::default()
            .title(" Moves (Tab) ")
            .borders(Borders::ALL)
            .border_style(pane_style(history_focused)),
    );
    frame.render_widget(moves, area);
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_timetravel::MoveOrder;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new(MoveOrder::Ascending);
        app.handle_key(KeyCode::Char('5'));

        let screen = render(&app);
        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Sort by: Ascending"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("You are at move #1"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(MoveOrder::Descending);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }

        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Sort by: Descending"));
    }

    #[test]
    fn test_won_board_hides_key_hints() {
        let mut app = App::new(MoveOrder::Ascending);
        for c in ['1', '4', '2', '5'] {
            app.handle_key(KeyCode::Char(c));
        }
        let open = render_board(&app);
        assert!(open.contains('9'));

        app.handle_key(KeyCode::Char('3'));
        let won = render_board(&app);
        assert!(!won.contains('9'));
        assert!(!won.contains('6'));
    }

    /// Renders only the board pane.
    fn render_board(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 13)).expect("test terminal");
        terminal
            .draw(|f| {
                let area = f.area();
                draw_board(f, area, app);
            })
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }
}
