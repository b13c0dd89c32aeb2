//! Contract-based validation for state transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. A failed precondition makes the reducer ignore the
//! action; a failed postcondition means the reducer itself is wrong.

use super::action::Rejection;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::{GameState, rules};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  PlaceMark Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index names a square on the current board.
pub struct InBounds;

impl InBounds {
    /// Checks the index against the current board.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<(), Rejection> {
        if index < state.current_board().len() {
            Ok(())
        } else {
            Err(Rejection::OutOfBounds(index))
        }
    }
}

/// Precondition: the square at the index is empty on the current board.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the square at `index`.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<(), Rejection> {
        if state.current_board().is_empty(index) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(index))
        }
    }
}

/// Precondition: nobody owns a line on the current board.
pub struct NoWinner;

impl NoWinner {
    /// Checks the current board for a winner.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match rules::calculate_winner(state.current_board()) {
            Some(_) => Err(Rejection::GameOver),
            None => Ok(()),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  PlaceMark Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Index is on the board
/// - Square is empty
/// - No line is owned yet
///
/// Postconditions:
/// - All [`GameInvariants`] hold
/// - Exactly one history entry past the previous step was kept
pub struct PlaceMarkContract;

impl Contract<GameState, usize> for PlaceMarkContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), Rejection> {
        InBounds::check(*index, state)?;
        SquareIsEmpty::check(*index, state)?;
        NoWinner::check(state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(after)?;

        let expected_len = before.step_number() + 2;
        if after.history().len() != expected_len || after.step_number() != expected_len - 1 {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "Timeline not truncated at the previous step"
            );
            return Err(vec![InvariantViolation::new(
                "New mark is appended right after the previous step",
            )]);
        }
        Ok(())
    }
}
