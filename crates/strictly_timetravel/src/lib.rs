//! Tic-tac-toe with a time-travel move history.
//!
//! The engine keeps every board the game has passed through. Players can
//! jump back to any earlier board and play on from there, which discards the
//! boards that came after it.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation of a single [`Board`]
//! - **History**: the append/truncate log of [`Snapshot`]s and its pointer
//! - **Session**: the command/query surface a front-end drives
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     session.select_cell(cell).unwrap();
//! }
//! assert_eq!(session.status().winner(), Some(Player::X));
//!
//! session.select_history_entry(2).unwrap();
//! assert!(matches!(session.status(), GameStatus::InProgress { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod describe;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod snapshot;
mod types;

pub use contracts::{GameNotOver, LegalMove, MoveRejection, SquareIsEmpty};
pub use describe::{HistoryEntry, MoveOrder, describe, entries};
pub use error::EngineError;
pub use history::GameHistory;
pub use position::Position;
pub use rules::{Line, evaluate};
pub use session::{GameSession, SessionEvent, SessionView};
pub use snapshot::Snapshot;
pub use types::{Board, GameStatus, Player, Square};
