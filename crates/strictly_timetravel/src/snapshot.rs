//! Immutable board snapshots recorded in the history log.

use super::{Board, GameStatus, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};

/// One board configuration at a point in game history.
///
/// The initial snapshot has no `last_move`; every later snapshot records the
/// square that was filled to produce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Returns a copy of this snapshot with `player` placed at `pos`.
    ///
    /// Callers check the square is empty first.
    pub(crate) fn with_move(&self, pos: Position, player: Player) -> Self {
        let mut board = self.board.clone();
        board.set(pos, Square::Occupied(player));
        Self {
            board,
            last_move: Some(pos),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square filled to produce this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Evaluates this snapshot's board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
