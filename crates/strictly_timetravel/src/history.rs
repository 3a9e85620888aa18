//! Append/truncate history log with a movable current pointer.
//!
//! Operations take the current log by reference and return the next one, so
//! the caller owns the only copy of game state. Applying a move while the
//! pointer sits in the past discards the snapshots after it; jumping only
//! moves the pointer.

use super::contracts::{LegalMove, MoveRejection};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{EngineError, GameStatus, Player, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Ordered board snapshots plus the index of the one on display.
///
/// Deserialized logs are checked against [`HistoryInvariants`] and rejected
/// if any of them fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

/// Unchecked wire shape of a [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Snapshot>,
    current: usize,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = EngineError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            current: raw.current,
        };

        HistoryInvariants::check_all(&history).map_err(|violations| {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            EngineError::InvalidHistory(reasons.join("; "))
        })?;

        Ok(history)
    }
}

impl GameHistory {
    /// A log holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            current: 0,
        }
    }

    /// Builds a log by applying `moves` in order from the empty board.
    ///
    /// Ignored moves leave no trace, exactly as with [`apply_move`](Self::apply_move).
    #[instrument]
    pub fn replay(moves: &[Position]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |history, pos| history.apply_move(*pos))
    }

    /// Every snapshot in the log, index 0 being the empty board.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Index of the last snapshot in the log.
    pub fn last_index(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Index of the snapshot on display.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The snapshot on display.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.current]
    }

    /// Player who moves from the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current)
    }

    /// Status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        self.current().status()
    }

    /// Reports why a move at `pos` would be ignored, if it would.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn check_move(&self, pos: Position) -> Result<(), MoveRejection> {
        LegalMove::check(pos, self.current())
    }

    /// Places the mark of the player to move at `pos`.
    ///
    /// Moves onto an occupied square, or from a won position, are silently
    /// ignored and return the log unchanged. Otherwise everything after the
    /// current pointer is dropped, the new snapshot is appended and the
    /// pointer moves to it.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_move(&self, pos: Position) -> Self {
        if let Err(reason) = self.check_move(pos) {
            debug!(%reason, "Ignoring move");
            return self.clone();
        }

        let player = self.to_move();
        let next = self.current().with_move(pos, player);

        let mut snapshots = self.snapshots[..=self.current].to_vec();
        snapshots.push(next);
        let current = snapshots.len() - 1;
        let history = Self { snapshots, current };

        match history.status() {
            GameStatus::Won { winner, line } => {
                info!(%winner, line = ?line.indices(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress { next } => debug!(%player, %pos, %next, "Move applied"),
        }

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(&history);

        history
    }

    /// Moves the pointer to `index` without touching the log.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidIndex`] if `index` is past the end of the log.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn jump_to(&self, index: usize) -> Result<Self, EngineError> {
        if index >= self.snapshots.len() {
            return Err(EngineError::InvalidIndex {
                index,
                len: self.snapshots.len(),
            });
        }

        debug!(from = self.current, to = index, "Jumping in history");
        Ok(Self {
            snapshots: self.snapshots.clone(),
            current: index,
        })
    }

    /// Builds a log without checking it, for exercising invariants.
    #[cfg(test)]
    pub(crate) fn from_raw(snapshots: Vec<Snapshot>, current: usize) -> Self {
        Self { snapshots, current }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_first_move_is_x() {
        let history = GameHistory::new().apply_move(Position::TopLeft);

        assert_eq!(history.snapshots().len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(
            history.current().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(history.current().last_move(), Some(Position::TopLeft));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let history = GameHistory::replay(&[Position::Center]);
        let after = history.apply_move(Position::Center);
        assert_eq!(after, history);
    }

    #[test]
    fn test_jump_keeps_log() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft]);
        let jumped = history.jump_to(0).expect("index in range");

        assert_eq!(jumped.snapshots(), history.snapshots());
        assert_eq!(jumped.current_index(), 0);
        assert_eq!(jumped.to_move(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range() {
        let history = GameHistory::replay(&[Position::Center]);
        assert_eq!(
            history.jump_to(2),
            Err(EngineError::InvalidIndex { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_move_from_past_truncates() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft, Position::TopRight]);
        let branched = history
            .jump_to(1)
            .expect("index in range")
            .apply_move(Position::BottomLeft);

        assert_eq!(branched.snapshots().len(), 3);
        assert_eq!(branched.current_index(), 2);
        assert_eq!(branched.current().last_move(), Some(Position::BottomLeft));
        assert!(branched.current().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_jump_back_from_win_reopens_play() {
        let won = GameHistory::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomLeft,
            Position::TopRight,
        ]);
        assert!(won.status().is_over());
        assert_eq!(won.apply_move(Position::BottomRight), won);

        let reopened = won.jump_to(4).expect("index in range");
        let replayed = reopened.apply_move(Position::BottomRight);
        assert_eq!(replayed.snapshots().len(), 6);
        assert!(!replayed.status().is_over());
    }

    #[test]
    fn test_raw_history_with_pointer_past_end_is_rejected() {
        let raw = RawHistory {
            snapshots: vec![Snapshot::initial()],
            current: 5,
        };

        let err = GameHistory::try_from(raw).expect_err("pointer out of range");
        assert!(err.to_string().contains("Current pointer is inside the history log"));
    }

    #[test]
    fn test_raw_history_without_snapshots_is_rejected() {
        let raw = RawHistory {
            snapshots: Vec::new(),
            current: 0,
        };

        let err = GameHistory::try_from(raw).expect_err("empty log");
        assert!(matches!(err, EngineError::InvalidHistory(_)));
        assert!(err.to_string().contains("History starts with the empty board"));
    }

    #[test]
    fn test_raw_history_from_real_log_is_accepted() {
        let history = GameHistory::replay(&[Position::Center, Position::TopLeft])
            .jump_to(1)
            .expect("index in range");
        let raw = RawHistory {
            snapshots: history.snapshots().to_vec(),
            current: history.current_index(),
        };

        assert_eq!(GameHistory::try_from(raw), Ok(history));
    }
}
