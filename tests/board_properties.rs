//! Property-based tests for the board using proptest
//!
//! These check turn order, win detection and undo/redo over randomly
//! generated games.

use gomoku::rules::DIRECTIONS;
use gomoku::{Board, BoardError, Color, BOARD_SIZE};
use proptest::prelude::*;

// Strategy to generate an in-bounds cell on the standard board
fn cell_strategy() -> impl Strategy<Value = (i32, i32)> {
    (0..BOARD_SIZE as i32, 0..BOARD_SIZE as i32)
}

// Strategy to generate a list of cells, duplicates allowed
fn cells_strategy(max: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec(cell_strategy(), 0..=max)
}

/// Play every legal cell in order, stopping at game over
fn play_legal(board: &mut Board, cells: &[(i32, i32)]) -> usize {
    let mut played = 0;
    for &(r, c) in cells {
        if board.is_over() {
            break;
        }
        if board.make_move(r, c).is_ok() {
            played += 1;
        }
    }
    played
}

proptest! {
    #[test]
    fn test_move_places_turn_color((r, c) in cell_strategy()) {
        let mut board = Board::new();
        let turn = board.turn();
        board.make_move(r, c).unwrap();
        let stone = board.get(r as usize, c as usize).unwrap();
        prop_assert_eq!(stone.color, turn);
        prop_assert_eq!((stone.row, stone.col), (r as usize, c as usize));
    }

    #[test]
    fn test_turn_alternation(cells in cells_strategy(60)) {
        let mut board = Board::new();
        play_legal(&mut board, &cells);
        for (i, stone) in board.history().iter().enumerate() {
            let expected = if i % 2 == 0 { Color::Black } else { Color::White };
            prop_assert_eq!(stone.color, expected);
        }
    }

    #[test]
    fn test_undo_redo_round_trip(cells in cells_strategy(40), (r, c) in cell_strategy()) {
        let mut board = Board::new();
        play_legal(&mut board, &cells);
        prop_assume!(!board.is_over() && board.is_empty(r as usize, c as usize));

        board.make_move(r, c).unwrap();
        let after = board.clone();
        board.undo().unwrap();
        board.redo().unwrap();
        prop_assert_eq!(board, after);
    }

    #[test]
    fn test_undo_all_then_redo_all(cells in cells_strategy(50)) {
        let mut board = Board::new();
        let played = play_legal(&mut board, &cells);
        let full = board.clone();

        for _ in 0..played {
            board.undo().unwrap();
        }
        prop_assert_eq!(board.undo(), Err(BoardError::NoHistory));
        prop_assert_eq!(board.move_count(), 0);
        prop_assert_eq!(board.winner(), None);
        prop_assert_eq!(board.turn(), Color::Black);

        for _ in 0..played {
            board.redo().unwrap();
        }
        prop_assert_eq!(board.redo(), Err(BoardError::NoFuture));
        prop_assert_eq!(board, full);
    }

    #[test]
    fn test_failed_calls_leave_board_unchanged(cells in cells_strategy(40), (r, c) in (-3i32..18, -3i32..18)) {
        let mut board = Board::new();
        play_legal(&mut board, &cells);
        let before = board.clone();
        if board.make_move(r, c).is_err() {
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn test_history_bounded_by_capacity(cells in cells_strategy(80), undos in 0usize..20) {
        let mut board = Board::new();
        play_legal(&mut board, &cells);
        for _ in 0..undos {
            let _ = board.undo();
        }
        prop_assert!(board.history().len() + board.redo_log().len() <= board.capacity());
        for stone in board.history() {
            prop_assert_eq!(board.get(stone.row, stone.col), Some(*stone));
        }
        for stone in board.redo_log() {
            prop_assert!(board.is_empty(stone.row, stone.col));
        }
    }

    #[test]
    fn test_five_on_any_axis_wins(
        axis in 0usize..4,
        start in (4usize..11, 4usize..11),
        len in 4usize..7,
    ) {
        let (dr, dc) = DIRECTIONS[axis];
        let mut board = Board::new();
        // Black builds the line, White answers on the far side of the board
        let mut spare = (0..BOARD_SIZE as i32).flat_map(|c| [(0, c), (14, c)]).filter(|&(r, c)| {
            (0..len as i32).all(|i| {
                (start.0 as i32 + dr * (i - 2), start.1 as i32 + dc * (i - 2)) != (r, c)
            })
        });
        for i in 0..len as i32 {
            let r = start.0 as i32 + dr * (i - 2);
            let c = start.1 as i32 + dc * (i - 2);
            board.make_move(r, c).unwrap();
            if board.is_over() {
                break;
            }
            let (wr, wc) = spare.next().unwrap();
            board.make_move(wr, wc).unwrap();
        }

        if len >= 5 {
            prop_assert_eq!(board.winner(), Some(Color::Black));
            prop_assert!(board.is_over());
        } else {
            prop_assert_eq!(board.winner(), None);
            prop_assert!(!board.is_over());
        }
    }
}
