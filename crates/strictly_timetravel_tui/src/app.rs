//! Application state and key handling.

use super::input;
use crossterm::event::KeyCode;
use strictly_timetravel::{EngineError, GameSession, GameStatus, MoveOrder, Position, SessionEvent};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move list selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application listing moves in `order`.
    pub fn new(order: MoveOrder) -> Self {
        let mut app = Self {
            session: GameSession::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Use arrows and Enter, or press 1-9 to play.".to_string(),
            should_quit: false,
        };
        app.sync_selection();
        app
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last command.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('s') => {
                let event = self.session.toggle_order();
                self.apply(Ok(event));
            }
            KeyCode::Char('r') => {
                let event = self.session.restart();
                self.apply(Ok(event));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char(c) => {
                if let Some(index) = input::digit_cell(c) {
                    self.cursor = Position::from_index(index).unwrap_or(self.cursor);
                    let result = self.session.select_cell(index);
                    self.apply(result);
                }
            }
            nav => match self.focus {
                Focus::Board => self.cursor = input::move_cursor(self.cursor, nav),
                Focus::History => {
                    let len = self.session.entries().len();
                    self.selected = input::move_selection(self.selected, len, nav);
                }
            },
        }
    }

    fn activate(&mut self) {
        let result = match self.focus {
            Focus::Board => self.session.select_cell(self.cursor.to_index()),
            Focus::History => match self.session.entries().get(self.selected) {
                Some(entry) => self.session.select_history_entry(entry.index),
                None => return,
            },
        };
        self.apply(result);
    }

    fn apply(&mut self, result: Result<SessionEvent, EngineError>) {
        match result {
            Ok(event) => {
                debug!(?event, "Session event");
                self.message = describe_event(&event);
                if event.changed() {
                    self.sync_selection();
                }
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                self.message = e.to_string();
            }
        }
    }

    fn sync_selection(&mut self) {
        self.selected = self
            .session
            .entries()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

fn describe_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::MovePlayed { player, position, status } => match status {
            GameStatus::Won { winner, .. } => format!("{} wins! Press 'r' to restart or 'q' to quit.", winner),
            GameStatus::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
            GameStatus::InProgress { .. } => format!("{} played {}", player, position),
        },
        SessionEvent::MoveIgnored(reason) => reason.to_string(),
        SessionEvent::Jumped { index } => format!("Jumped to move #{}", index),
        SessionEvent::OrderToggled(order) => format!("Sorting moves {}", order.label().to_lowercase()),
        SessionEvent::Restarted => "Game restarted. Player X's turn.".to_string(),
    }
}
