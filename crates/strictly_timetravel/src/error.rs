//! Engine error types.
//!
//! Only contract violations by the caller end up here. Moves onto occupied
//! squares or after the game ended are ignored, not reported; see
//! [`MoveRejection`](crate::MoveRejection).

use derive_more::{Display, Error};

/// Caller handed the engine an index or a log it never produced.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// History index outside `0..len`.
    #[display("History index {} out of range (history has {} entries)", index, len)]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of snapshots in the log.
        len: usize,
    },

    /// Cell index outside `0..9`.
    #[display("Cell index {} out of range (must be 0-8)", _0)]
    InvalidCell(#[error(not(source))] usize),

    /// A deserialized history log broke one or more invariants.
    #[display("Invalid history: {}", _0)]
    InvalidHistory(#[error(not(source))] String),
}
