//! The log always opens with the empty board.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: snapshot 0 is the empty board with no last move.
pub struct StartsEmptyInvariant;

impl Invariant<GameHistory> for StartsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().first().is_some_and(|first| {
            first.last_move().is_none() && first.board().occupied_count() == 0
        })
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
