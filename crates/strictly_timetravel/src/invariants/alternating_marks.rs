//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: snapshot 1 holds X's move and each later snapshot holds the
/// opponent of the previous mover.
pub struct AlternatingMarksInvariant;

impl Invariant<GameHistory> for AlternatingMarksInvariant {
    fn holds(history: &GameHistory) -> bool {
        let mut expected = Player::X;
        history.snapshots().iter().skip(1).all(|snapshot| {
            let placed = snapshot
                .last_move()
                .is_some_and(|pos| snapshot.board().get(pos) == Square::Occupied(expected));
            expected = expected.opponent();
            placed
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Snapshot};

    #[test]
    fn test_alternating_sequence_holds() {
        let history = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ]);
        assert!(AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Snapshot::initial();
        let second = first.with_move(Position::TopLeft, Player::X);
        let third = second.with_move(Position::Center, Player::X);
        let history = GameHistory::from_raw(vec![first, second, third], 2);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }

    #[test]
    fn test_o_opening_violates() {
        let first = Snapshot::initial();
        let second = first.with_move(Position::TopLeft, Player::O);
        let history = GameHistory::from_raw(vec![first, second], 1);
        assert!(!AlternatingMarksInvariant::holds(&history));
    }
}
