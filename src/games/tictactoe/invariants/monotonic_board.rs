//! Monotonic board invariant: each step adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square.
///
/// That square goes from Empty to a mark and is the one named by the
/// step's move. Squares never revert to Empty.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        if state.history.first().is_some_and(|b| b.occupied_count() != 0) {
            return false;
        }

        state.history.windows(2).enumerate().all(|(k, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let changed: Vec<usize> = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (b, a))| b != a)
                .map(|(i, _)| i)
                .collect();

            let [index] = changed[..] else {
                return false;
            };
            let named = state
                .location
                .get(k + 1)
                .copied()
                .flatten()
                .map(|mv| mv.to_index(state.board_size));

            before.get(index) == Some(Square::Empty) && named == Some(index)
        })
    }

    fn description() -> &'static str {
        "Each step places exactly one mark on an empty square"
    }
}
