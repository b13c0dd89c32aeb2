//! Game rules for N-in-a-row.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the reducer and the contracts can compose them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WinningLine, calculate_winner, lines};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Derives the status of `board` reached after `step_number` moves.
#[instrument(skip(board), fields(size = board.size()))]
pub fn status(board: &Board, step_number: usize, x_is_next: bool) -> GameStatus {
    match calculate_winner(board) {
        Some(winner) => GameStatus::Won(winner.player),
        None if is_draw(board, step_number) => GameStatus::Draw,
        None => GameStatus::InProgress(Player::to_move(x_is_next)),
    }
}
