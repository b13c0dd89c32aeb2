//! Draw detection.

use super::super::Board;
use super::win::calculate_winner;
use tracing::instrument;

/// Checks whether the game at `step_number` ended without a winner.
///
/// A draw is declared once the step count reaches the number of squares
/// and no line is owned.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, step_number: usize) -> bool {
    step_number >= board.len() && calculate_winner(board).is_none()
}
