//! Terminal snapshots stay terminal.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: only the last snapshot of the log may hold a completed line.
///
/// Draws need no separate check: a full board has no empty square left to
/// step into.
pub struct NoMovesAfterWinInvariant;

impl Invariant<GameHistory> for NoMovesAfterWinInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|snapshot| snapshot.status().winner().is_none())
    }

    fn description() -> &'static str {
        "No move follows a won position"
    }
}
