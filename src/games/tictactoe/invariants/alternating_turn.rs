//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The mark placed at step `k` is X for odd `k` and O for even `k`, and
/// X is to move exactly when the current step is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        if state.x_is_next != (state.step_number % 2 == 0) {
            return false;
        }

        state
            .location
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, mv)| {
                let expected = if k % 2 == 1 { Player::X } else { Player::O };
                let square = mv.and_then(|mv| {
                    state
                        .history
                        .get(k)
                        .and_then(|board| board.get(mv.to_index(state.board_size)))
                });
                square == Some(Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
