//! History consistency invariant: the parallel sequences line up.

use super::super::GameState;
use super::Invariant;

/// Invariant: history and location are parallel and the step points into them.
///
/// Also requires every snapshot to match the configured board size, and
/// only the first entry to lack a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let squares = state.board_size * state.board_size;

        state.history.len() == state.location.len()
            && state.step_number < state.history.len()
            && state.history.iter().all(|board| {
                board.size() == state.board_size && board.len() == squares
            })
            && state
                .location
                .iter()
                .enumerate()
                .all(|(k, mv)| mv.is_none() == (k == 0))
    }

    fn description() -> &'static str {
        "History and location are aligned and the step is in range"
    }
}
