//! Win detection for N-in-a-row on an N×N board.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line fully owned by one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of every square on the line.
    pub player: Player,
    /// Row-major indices of the line, in scan order.
    pub line: Vec<usize>,
}

impl WinningLine {
    /// Returns true if `index` lies on the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Enumerates every candidate line for a board of edge `size`.
///
/// Order: rows top to bottom, columns left to right, the main diagonal,
/// then the anti-diagonal. Callers rely on this order to break ties.
#[instrument]
pub fn lines(size: usize) -> Vec<Vec<usize>> {
    let rows = (0..size).map(|row| (0..size).map(|j| row * size + j).collect::<Vec<_>>());
    let cols = (0..size).map(|col| (0..size).map(|j| j * size + col).collect::<Vec<_>>());
    let main: Vec<usize> = (0..size).map(|i| i * (size + 1)).collect();
    let anti: Vec<usize> = (0..size).map(|i| (size - 1) * (i + 1)).collect();

    rows.chain(cols)
        .chain(std::iter::once(main))
        .chain(std::iter::once(anti))
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the first fully owned line in [`lines`] order, or `None`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn calculate_winner(board: &Board) -> Option<WinningLine> {
    lines(board.size()).into_iter().find_map(|line| {
        let (&first, rest) = line.split_first()?;
        let player = board.get(first)?.player()?;
        let owned = rest
            .iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(player)));
        owned.then(|| WinningLine { player, line })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new(size);
        for &(i, player) in marks {
            board.set(i, Square::Occupied(player)).unwrap();
        }
        board
    }

    #[test]
    fn test_lines_for_three() {
        let lines = lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![0, 1, 2]);
        assert_eq!(lines[3], vec![0, 3, 6]);
        assert_eq!(lines[6], vec![0, 4, 8]);
        assert_eq!(lines[7], vec![2, 4, 6]);
    }

    #[test]
    fn test_lines_for_four_diagonals() {
        let lines = lines(4);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], vec![0, 5, 10, 15]);
        assert_eq!(lines[9], vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(calculate_winner(&Board::new(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(3, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(
            calculate_winner(&board),
            Some(WinningLine {
                player: Player::X,
                line: vec![0, 1, 2]
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(3, &[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let winner = calculate_winner(&board).unwrap();
        assert_eq!(winner.player, Player::O);
        assert_eq!(winner.line, vec![2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(4, &[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_won() {
        let board = board_with(3, &[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_row_found_before_column() {
        // Top row and left column both complete; rows scan first.
        let board = board_with(
            3,
            &[
                (0, Player::X),
                (1, Player::X),
                (2, Player::X),
                (3, Player::X),
                (6, Player::X),
            ],
        );
        assert_eq!(calculate_winner(&board).unwrap().line, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_square_board_wins_on_first_mark() {
        let board = board_with(1, &[(0, Player::O)]);
        let winner = calculate_winner(&board).unwrap();
        assert_eq!(winner.player, Player::O);
        assert_eq!(winner.line, vec![0]);
    }

    #[test]
    fn test_zero_sized_board_has_no_winner() {
        assert_eq!(calculate_winner(&Board::new(0)), None);
    }
}
