//! Move preconditions for tic-tac-toe.
//!
//! A move that fails a precondition is ignored by the history log. The
//! checks still name the reason so callers can disable squares or log it.

use super::{Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already won.
    #[display("Game is already over")]
    GameOver,
}

/// Precondition: no line has been completed yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the snapshot has a winner.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveRejection> {
        if snapshot.status().winner().is_some() {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `pos` is already marked.
    #[instrument(skip(snapshot))]
    pub fn check(pos: Position, snapshot: &Snapshot) -> Result<(), MoveRejection> {
        if snapshot.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is still open and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// A won game is reported before an occupied square.
    #[instrument(skip(snapshot))]
    pub fn check(pos: Position, snapshot: &Snapshot) -> Result<(), MoveRejection> {
        GameNotOver::check(snapshot)?;
        SquareIsEmpty::check(pos, snapshot)?;
        Ok(())
    }
}
