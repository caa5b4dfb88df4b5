//! Game state management for the Gomoku GUI

use log::{debug, info};

use crate::{Board, BoardError, Color, Stone};

/// How the game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Color, line: Vec<Stone> },
    Draw,
}

/// Board plus the bits of presentation state the GUI needs
pub struct GameState {
    pub board: Board,
    pub message: Option<String>,
    /// Empty board a new game starts from
    initial: Board,
}

impl GameState {
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        let initial = Board::with_size(height, width)?;
        Ok(Self {
            board: initial.clone(),
            message: None,
            initial,
        })
    }

    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.message = None;
        info!("New {}x{} game", self.board.height(), self.board.width());
    }

    /// Result of a finished game, `None` while still playing
    pub fn result(&self) -> Option<GameResult> {
        if !self.board.is_over() {
            return None;
        }
        match self.board.winner() {
            Some(winner) => Some(GameResult::Win {
                winner,
                line: self.board.winning_line().unwrap_or_default(),
            }),
            None => Some(GameResult::Draw),
        }
    }

    /// Place a stone for the side to move; a rejection lands in `message`
    pub fn try_place_stone(&mut self, row: usize, col: usize) {
        match self.board.make_move(row as i32, col as i32) {
            Ok(stone) => {
                debug!("{} plays ({}, {})", stone.color, stone.row, stone.col);
                self.message = None;
                self.log_result();
            }
            Err(e) => self.reject("move", &e),
        }
    }

    /// Undo last move
    pub fn undo(&mut self) {
        match self.board.undo() {
            Ok(()) => {
                debug!("Undo, {} to move", self.board.turn());
                self.message = None;
            }
            Err(e) => self.reject("undo", &e),
        }
    }

    /// Redo last undone move
    pub fn redo(&mut self) {
        match self.board.redo() {
            Ok(()) => {
                debug!("Redo, {} to move", self.board.turn());
                self.message = None;
                self.log_result();
            }
            Err(e) => self.reject("redo", &e),
        }
    }

    fn reject(&mut self, action: &str, err: &BoardError) {
        debug!("Rejected {}: {}", action, err);
        self.message = Some(err.to_string());
    }

    /// Stones to highlight on the board after a win
    pub fn winning_line(&self) -> Option<Vec<Stone>> {
        match self.result()? {
            GameResult::Win { line, .. } => Some(line),
            GameResult::Draw => None,
        }
    }

    fn log_result(&self) {
        match self.result() {
            Some(GameResult::Win { winner, .. }) => info!("{} wins after {} moves", winner, self.board.move_count()),
            Some(GameResult::Draw) => info!("Draw: board is full"),
            None => {}
        }
    }
}
