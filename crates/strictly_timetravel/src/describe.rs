//! Move list labels and ordering.

use super::{GameHistory, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Label for a history entry the player can jump to.
///
/// Index 0 is the game start; later entries name the 1-based row and column
/// of the square filled to produce them.
#[instrument(skip(snapshot))]
pub fn describe(index: usize, snapshot: &Snapshot) -> String {
    match (index, snapshot.last_move()) {
        (0, _) | (_, None) => "Go to game start".to_string(),
        (_, Some(pos)) => format!(
            "Go to move #{} (row: {}, col: {})",
            index,
            pos.row() + 1,
            pos.col() + 1
        ),
    }
}

/// Direction the move list is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl MoveOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Flips between ascending and descending.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Index into the history log.
    pub index: usize,
    /// Text shown for the row.
    pub label: String,
    /// Whether this is the snapshot on display.
    pub is_current: bool,
}

impl HistoryEntry {
    /// Builds the entry for `index`.
    ///
    /// The current entry reads "You are at move #n" instead of a jump label.
    pub fn new(index: usize, snapshot: &Snapshot, current: usize) -> Self {
        let is_current = index == current;
        let label = if is_current {
            format!("You are at move #{}", index)
        } else {
            describe(index, snapshot)
        };
        Self {
            index,
            label,
            is_current,
        }
    }
}

/// Move list for `history` in the requested order.
#[instrument(skip(history), fields(len = history.snapshots().len()))]
pub fn entries(history: &GameHistory, order: MoveOrder) -> Vec<HistoryEntry> {
    let current = history.current_index();
    let mut rows: Vec<HistoryEntry> = history
        .snapshots()
        .iter()
        .enumerate()
        .map(|(index, snapshot)| HistoryEntry::new(index, snapshot, current))
        .collect();

    if order == MoveOrder::Descending {
        rows.reverse();
    }
    rows
}
