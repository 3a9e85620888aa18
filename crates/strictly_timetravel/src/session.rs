//! Session state and the command/query surface for front-ends.
//!
//! A front-end reads the session, renders, forwards one user intent as a
//! command and redraws when the returned [`SessionEvent`] says something
//! changed. Nothing here renders or waits on input.

use super::describe::{self, HistoryEntry, MoveOrder};
use super::rules::Line;
use super::{
    Board, EngineError, GameHistory, GameStatus, MoveRejection, Player, Position, Snapshot, Square,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a command did, for poll-after-command redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A mark was placed and the pointer moved to the new snapshot.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// Status after the move.
        status: GameStatus,
    },
    /// The move was ignored; nothing changed.
    MoveIgnored(MoveRejection),
    /// The pointer moved to `index`.
    Jumped {
        /// New pointer.
        index: usize,
    },
    /// The move list order flipped.
    OrderToggled(MoveOrder),
    /// A fresh game replaced the old log.
    Restarted,
}

impl SessionEvent {
    /// Whether the front-end needs to redraw.
    pub fn changed(&self) -> bool {
        !matches!(self, SessionEvent::MoveIgnored(_))
    }
}

/// Read model of a session, bundling every query a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Cells of the current snapshot, row-major.
    pub cells: [Square; 9],
    /// Player to move from the current snapshot.
    pub to_move: Player,
    /// Status of the current snapshot.
    pub status: GameStatus,
    /// One-line status text.
    pub status_text: String,
    /// Winning line, if the current snapshot is won.
    pub winning_line: Option<Line>,
    /// Squares still open to the player to move.
    pub open_cells: Vec<Position>,
    /// Move list in display order.
    pub entries: Vec<HistoryEntry>,
    /// Pointer into the history log.
    pub current_index: usize,
    /// Move list order.
    pub order: MoveOrder,
}

/// One player's game session: the history log and the move list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    history: GameHistory,
    order: MoveOrder,
}

impl GameSession {
    /// A new session at the empty board, listing moves ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new session with the given move list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            history: GameHistory::new(),
            order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The full history log.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The snapshot on display.
    pub fn current_snapshot(&self) -> &Snapshot {
        self.history.current()
    }

    /// The board on display.
    pub fn board(&self) -> &Board {
        self.history.current().board()
    }

    /// Player to move from the displayed snapshot.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        self.history.status()
    }

    /// Winning line of the displayed snapshot, if any.
    pub fn winning_line(&self) -> Option<Line> {
        self.status().line()
    }

    /// Squares the player to move may still take.
    ///
    /// Empty once the displayed snapshot is won, even if squares remain.
    pub fn open_cells(&self) -> Vec<Position> {
        if self.status().winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(self.board())
        }
    }

    /// Status text: "Winner: X", "Draw!" or "Next player: O".
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// Pointer into the history log.
    pub fn current_index(&self) -> usize {
        self.history.current_index()
    }

    /// Move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Move list rows in display order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        describe::entries(&self.history, self.order)
    }

    /// Everything a renderer needs, in one value.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        let status = self.status();
        SessionView {
            cells: *self.board().squares(),
            to_move: self.to_move(),
            status,
            status_text: status.to_string(),
            winning_line: status.line(),
            open_cells: self.open_cells(),
            entries: self.entries(),
            current_index: self.current_index(),
            order: self.order,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Plays the square at `index` (0-8) for the player to move.
    ///
    /// Occupied squares and won games yield [`SessionEvent::MoveIgnored`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCell`] if `index` is not a board square.
    #[instrument(skip(self), fields(current = self.current_index()))]
    pub fn select_cell(&mut self, index: usize) -> Result<SessionEvent, EngineError> {
        let position = Position::from_index(index).ok_or(EngineError::InvalidCell(index))?;

        if let Err(reason) = self.history.check_move(position) {
            debug!(%reason, "Cell selection ignored");
            return Ok(SessionEvent::MoveIgnored(reason));
        }

        let player = self.history.to_move();
        self.history = self.history.apply_move(position);
        Ok(SessionEvent::MovePlayed {
            player,
            position,
            status: self.history.status(),
        })
    }

    /// Displays the snapshot at `index` in the history log.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is past the end of the log.
    #[instrument(skip(self), fields(current = self.current_index()))]
    pub fn select_history_entry(&mut self, index: usize) -> Result<SessionEvent, EngineError> {
        self.history = self.history.jump_to(index)?;
        Ok(SessionEvent::Jumped { index })
    }

    /// Flips the move list order.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_order(&mut self) -> SessionEvent {
        self.order = self.order.toggle();
        SessionEvent::OrderToggled(self.order)
    }

    /// Discards the log and starts over, keeping the move list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> SessionEvent {
        self.history = GameHistory::new();
        SessionEvent::Restarted
    }
}
