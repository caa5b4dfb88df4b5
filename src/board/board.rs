//! Board structure with move history

use std::fmt;

use super::{Color, Stone, BOARD_SIZE};
use crate::error::BoardError;
use crate::rules::win::{find_five_line, has_five_at};

/// Game board with turn tracking, undo and redo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major cells, `height * width` long
    cells: Vec<Option<Stone>>,
    /// Color allowed to move next
    turn: Color,
    /// Occupied cells, seeded stones included
    move_count: usize,
    winner: Option<Color>,
    /// Applied moves, most recent last
    history: Vec<Stone>,
    /// Undone moves, most recent last
    redo_log: Vec<Stone>,
}

impl Board {
    /// Empty 15x15 board, Black to move
    pub fn new() -> Self {
        Self::empty(BOARD_SIZE, BOARD_SIZE)
    }

    /// Empty board of the given dimensions
    pub fn with_size(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 {
            return Err(BoardError::InvalidBoard(format!(
                "board must have at least one cell, got {}x{}",
                height, width
            )));
        }
        Ok(Self::empty(height, width))
    }

    fn empty(height: usize, width: usize) -> Self {
        let capacity = height * width;
        Self {
            height,
            width,
            cells: vec![None; capacity],
            turn: Color::Black,
            move_count: 0,
            winner: None,
            history: Vec::with_capacity(capacity),
            redo_log: Vec::new(),
        }
    }

    /// Build a board from a pre-populated grid, indexed `[row][col]`.
    ///
    /// Black moves next if both colors have the same number of stones,
    /// otherwise White. Seeded stones are not part of the history and
    /// cannot be undone.
    pub fn from_grid(rows: Vec<Vec<Option<Stone>>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::InvalidBoard("grid has no cells".to_string()));
        }

        let mut cells = Vec::with_capacity(height * width);
        let (mut black, mut white) = (0usize, 0usize);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(BoardError::InvalidBoard(format!(
                    "row {} has width {}, expected {}",
                    row,
                    line.len(),
                    width
                )));
            }
            for (col, cell) in line.into_iter().enumerate() {
                if let Some(stone) = cell {
                    if stone.row != row || stone.col != col {
                        return Err(BoardError::InvalidBoard(format!(
                            "stone at ({}, {}) is stored in cell ({}, {})",
                            stone.row, stone.col, row, col
                        )));
                    }
                    match stone.color {
                        Color::Black => black += 1,
                        Color::White => white += 1,
                    }
                }
                cells.push(cell);
            }
        }

        let mut board = Self::empty(height, width);
        board.cells = cells;
        board.move_count = black + white;
        board.turn = if black == white { Color::Black } else { Color::White };
        Ok(board)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Maximum number of stones the board can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Color allowed to move next
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// True once a side has five in a row or the board is full
    #[inline]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.move_count == self.capacity()
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Stone at a cell; `None` for empty or out-of-range cells
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Stone> {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    pub fn history(&self) -> &[Stone] {
        &self.history
    }

    pub fn redo_log(&self) -> &[Stone] {
        &self.redo_log
    }

    pub fn last_move(&self) -> Option<Stone> {
        self.history.last().copied()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_log.is_empty()
    }

    /// The winning line through the last move, if the game was won
    pub fn winning_line(&self) -> Option<Vec<Stone>> {
        self.winner?;
        find_five_line(self, self.last_move()?)
    }

    /// Place a stone of the current turn color.
    ///
    /// Starts a new branch: anything that could have been redone is dropped.
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<Stone, BoardError> {
        if !self.in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        let (row, col) = (row as usize, col as usize);
        if !self.is_empty(row, col) {
            return Err(BoardError::CellOccupied { row, col });
        }

        let stone = Stone::new(row, col, self.turn);
        self.place(stone);
        self.redo_log.clear();
        Ok(stone)
    }

    /// Take back the most recent move. Allowed after the game is over.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        let stone = self.history.last().copied().ok_or(BoardError::NoHistory)?;

        // Only the final move of a branch can have completed the five
        if self.winner == Some(stone.color) && has_five_at(self, stone) {
            self.winner = None;
        }

        self.history.pop();
        let idx = self.index(stone.row, stone.col);
        self.cells[idx] = None;
        self.move_count -= 1;
        self.turn = stone.color;
        self.redo_log.push(stone);
        Ok(())
    }

    /// Re-apply the most recently undone move
    pub fn redo(&mut self) -> Result<(), BoardError> {
        let stone = self.redo_log.pop().ok_or(BoardError::NoFuture)?;
        self.place(stone);
        Ok(())
    }

    /// Commit a stone to the grid and history, then check for a win
    fn place(&mut self, stone: Stone) {
        let idx = self.index(stone.row, stone.col);
        self.cells[idx] = Some(stone);
        self.move_count += 1;
        self.turn = stone.color.opponent();
        self.history.push(stone);

        if has_five_at(self, stone) {
            self.winner = Some(stone.color);
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering: `X` black, `O` white, `.` empty, one row per line
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = match self.get(row, col) {
                    Some(Stone { color: Color::Black, .. }) => 'X',
                    Some(Stone { color: Color::White, .. }) => 'O',
                    None => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
