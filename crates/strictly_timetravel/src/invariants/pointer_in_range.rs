//! Pointer bounds.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: the current pointer indexes an existing snapshot.
pub struct PointerInRangeInvariant;

impl Invariant<GameHistory> for PointerInRangeInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_index() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current pointer is inside the history log"
    }
}
