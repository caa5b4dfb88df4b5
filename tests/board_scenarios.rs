//! Scenario tests for whole games on the standard board

use gomoku::{Board, BoardError, Color, Stone};

/// Play a list of (row, col) moves, alternating colors
fn play(board: &mut Board, moves: &[(i32, i32)]) {
    for &(r, c) in moves {
        board.make_move(r, c).unwrap();
    }
}

#[test]
fn test_center_opening() {
    let mut board = Board::new();
    play(&mut board, &[(7, 7), (7, 8), (8, 7)]);
    assert!(!board.is_over());
    assert_eq!(board.winner(), None);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn test_black_top_row_win() {
    let mut board = Board::new();
    play(
        &mut board,
        &[(0, 0), (10, 10), (0, 1), (10, 12), (0, 2), (12, 10), (0, 3), (12, 12)],
    );
    assert_eq!(board.winner(), None);
    board.make_move(0, 4).unwrap();
    assert_eq!(board.winner(), Some(Color::Black));
    assert!(board.is_over());
}

#[test]
fn test_white_vertical_win() {
    let mut board = Board::new();
    play(
        &mut board,
        &[(0, 0), (3, 9), (0, 2), (4, 9), (0, 4), (5, 9), (0, 6), (6, 9), (0, 8), (7, 9)],
    );
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.make_move(14, 14), Err(BoardError::GameOver));
}

#[test]
fn test_overline_wins() {
    let mut board = Board::new();
    // Black: 0,1,2 and 4,5 on row 6, then fills the gap for six
    play(
        &mut board,
        &[(6, 0), (0, 0), (6, 1), (0, 2), (6, 2), (0, 4), (6, 4), (0, 6), (6, 5), (0, 8)],
    );
    assert_eq!(board.winner(), None);
    board.make_move(6, 3).unwrap();
    assert_eq!(board.winner(), Some(Color::Black));
    assert_eq!(board.winning_line().map(|l| l.len()), Some(6));
}

#[test]
fn test_four_is_not_a_win() {
    let mut board = Board::new();
    play(&mut board, &[(2, 2), (9, 0), (3, 3), (9, 2), (4, 4), (9, 4), (5, 5)]);
    assert_eq!(board.winner(), None);
    assert!(!board.is_over());
}

#[test]
fn test_out_of_bounds_examples() {
    let mut board = Board::new();
    assert!(matches!(board.make_move(-1, 0), Err(BoardError::OutOfBounds { .. })));
    assert!(matches!(board.make_move(15, 0), Err(BoardError::OutOfBounds { .. })));
    assert_eq!(board.move_count(), 0);
}

/// Fill the board so that no line of the same color is longer than two
#[test]
fn test_full_board_draw() {
    let mut board = Board::new();
    let n = board.height() as i32;
    let (black, white): (Vec<_>, Vec<_>) = (0..n)
        .flat_map(|r| (0..n).map(move |c| (r, c)))
        .partition(|&(r, c)| (c / 2 + r) % 2 == 0);
    assert_eq!(black.len(), white.len() + 1);

    for i in 0..white.len() {
        board.make_move(black[i].0, black[i].1).unwrap();
        board.make_move(white[i].0, white[i].1).unwrap();
    }
    assert!(!board.is_over());
    let last = black[black.len() - 1];
    board.make_move(last.0, last.1).unwrap();

    assert!(board.is_over());
    assert_eq!(board.winner(), None);
    assert_eq!(board.move_count(), board.capacity());
    assert_eq!(board.make_move(0, 0), Err(BoardError::GameOver));
}

#[test]
fn test_undo_after_win_then_play_on() {
    let mut board = Board::new();
    play(
        &mut board,
        &[(0, 0), (5, 0), (0, 1), (5, 1), (0, 2), (5, 2), (0, 3), (5, 3), (0, 4)],
    );
    assert!(board.is_over());

    board.undo().unwrap();
    assert!(!board.is_over());
    assert_eq!(board.turn(), Color::Black);

    // Black blunders instead; White completes its own five
    board.make_move(14, 14).unwrap();
    assert_eq!(board.redo(), Err(BoardError::NoFuture));
    board.make_move(5, 4).unwrap();
    assert_eq!(board.winner(), Some(Color::White));
    assert_eq!(board.last_move(), Some(Stone::new(5, 4, Color::White)));
}

#[test]
fn test_undo_twice_replays_both_sides() {
    let mut board = Board::new();
    play(&mut board, &[(7, 7), (7, 8), (8, 8), (6, 6)]);
    board.undo().unwrap();
    board.undo().unwrap();
    assert_eq!(board.turn(), Color::Black);
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.redo_log().len(), 2);

    board.redo().unwrap();
    assert_eq!(board.get(8, 8), Some(Stone::new(8, 8, Color::Black)));
    assert_eq!(board.turn(), Color::White);
}
