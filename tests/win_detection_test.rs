//! Property tests for win detection.

use proptest::prelude::*;
use strictly_timeline::{Board, MAX_BOARD_SIZE, Player, Square, calculate_winner, lines};
use strum::IntoEnumIterator;

fn arb_player() -> impl Strategy<Value = Player> {
    prop::sample::select(Player::iter().collect::<Vec<_>>())
}

/// A board size together with one of its lines.
fn arb_size_and_line() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=8).prop_flat_map(|size| (Just(size), 0..2 * size + 2))
}

/// A board with arbitrary contents.
fn arb_board() -> impl Strategy<Value = Board> {
    (1usize..=6).prop_flat_map(|size| {
        prop::collection::vec(
            prop_oneof![
                Just(Square::Empty),
                Just(Square::Occupied(Player::X)),
                Just(Square::Occupied(Player::O)),
            ],
            size * size,
        )
        .prop_map(move |squares| {
            let mut board = Board::new(size);
            for (i, square) in squares.into_iter().enumerate() {
                board.set(i, square).unwrap();
            }
            board
        })
    })
}

proptest! {
    #[test]
    fn prop_empty_board_has_no_winner(size in 1usize..=MAX_BOARD_SIZE) {
        prop_assert_eq!(calculate_winner(&Board::new(size)), None);
    }

    #[test]
    fn prop_filled_line_wins((size, which) in arb_size_and_line(), player in arb_player()) {
        let line = lines(size)[which].clone();
        let mut board = Board::new(size);
        for &i in &line {
            board.set(i, Square::Occupied(player)).unwrap();
        }

        let winner = calculate_winner(&board).unwrap();
        prop_assert_eq!(winner.player, player);
        prop_assert_eq!(winner.line, line);
    }

    #[test]
    fn prop_winner_is_idempotent(board in arb_board()) {
        prop_assert_eq!(calculate_winner(&board), calculate_winner(&board));
    }

    #[test]
    fn prop_winner_owns_its_whole_line(board in arb_board()) {
        if let Some(winner) = calculate_winner(&board) {
            prop_assert_eq!(winner.line.len(), board.size());
            for &i in &winner.line {
                prop_assert_eq!(board.get(i), Some(Square::Occupied(winner.player)));
            }
        }
    }

    #[test]
    fn prop_winner_is_first_owned_line(board in arb_board()) {
        let first = lines(board.size()).into_iter().find(|line| {
            let owner = board.get(line[0]).and_then(Square::player);
            owner.is_some_and(|p| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(p))))
        });
        prop_assert_eq!(calculate_winner(&board).map(|w| w.line), first);
    }
}

#[test]
fn test_opponent_breaks_line() {
    let mut board = Board::new(3);
    for i in [0, 1] {
        board.set(i, Square::Occupied(Player::X)).unwrap();
    }
    board.set(2, Square::Occupied(Player::O)).unwrap();
    assert_eq!(calculate_winner(&board), None);
}

#[test]
fn test_line_counts() {
    for size in 1..=MAX_BOARD_SIZE {
        let lines = lines(size);
        assert_eq!(lines.len(), 2 * size + 2);
        assert!(lines.iter().all(|l| l.len() == size && l.iter().all(|&i| i < size * size)));
    }
}
