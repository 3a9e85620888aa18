//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Rules never look at history:
//! whose turn it is falls out of how many squares are filled.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Evaluates a board into its [`GameStatus`].
///
/// A completed line beats a full board; a full board without a line is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, line)) = check_winner(board) {
        return GameStatus::Won { winner, line };
    }

    if is_full(board) {
        return GameStatus::Draw;
    }

    GameStatus::InProgress {
        next: Player::for_step(board.occupied_count()),
    }
}
