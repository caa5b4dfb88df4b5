//! Win condition checking
//!
//! A side wins with five or more of its stones in an unbroken line, counted
//! through the stone just placed. Overlines win.

use crate::board::{Board, Color, Stone};

/// Stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Count same-color stones stepping from (row, col) by (dr, dc), excluding
/// the starting cell.
pub fn count_in_direction(
    board: &Board,
    row: usize,
    col: usize,
    dr: i32,
    dc: i32,
    color: Color,
) -> usize {
    let mut count = 0;
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;
    while board.in_bounds(r, c) {
        match board.get(r as usize, c as usize) {
            Some(s) if s.color == color => {
                count += 1;
                r += dr;
                c += dc;
            }
            _ => break,
        }
    }
    count
}

/// Fast five-in-a-row check through a specific stone.
///
/// Only checks the 4 axes through the stone. No allocation.
#[inline]
pub fn has_five_at(board: &Board, stone: Stone) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_in_direction(board, stone.row, stone.col, -dr, -dc, stone.color)
            + count_in_direction(board, stone.row, stone.col, dr, dc, stone.color);
        count >= WIN_LENGTH
    })
}

/// Contiguous run of the stone's color through it along one axis, ordered
/// from the negative end.
pub fn line_through(board: &Board, stone: Stone, (dr, dc): (i32, i32)) -> Vec<Stone> {
    let back = count_in_direction(board, stone.row, stone.col, -dr, -dc, stone.color) as i32;
    let forward = count_in_direction(board, stone.row, stone.col, dr, dc, stone.color) as i32;

    (-back..=forward)
        .map(|i| {
            let r = (stone.row as i32 + dr * i) as usize;
            let c = (stone.col as i32 + dc * i) as usize;
            Stone::new(r, c, stone.color)
        })
        .collect()
}

/// Find the positions of a five-or-more line through the stone
///
/// Returns the whole run (overlines included) on the first axis that wins.
pub fn find_five_line(board: &Board, stone: Stone) -> Option<Vec<Stone>> {
    DIRECTIONS
        .iter()
        .map(|&dir| line_through(board, stone, dir))
        .find(|line| line.len() >= WIN_LENGTH)
}
