//! Single-cell step invariant: each snapshot fills exactly one new square.

use super::super::{GameHistory, Position, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from empty to marked, and the later snapshot names it
/// as its `last_move`. Marks are never erased or overwritten.
pub struct SingleCellStepsInvariant;

impl Invariant<GameHistory> for SingleCellStepsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty && pair[1].last_move() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one empty square and records it as the last move"
    }
}
