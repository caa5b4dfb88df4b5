//! Error type for board operations

use thiserror::Error;

/// Rejected board operations.
///
/// Every variant is a precondition violation: the board is left exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate outside the grid
    #[error("Position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// Target cell already holds a stone
    #[error("Position ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },

    /// Move attempted after a win or a full board
    #[error("The game is over already")]
    GameOver,

    /// Undo with nothing to undo
    #[error("No more moves to undo")]
    NoHistory,

    /// Redo with nothing to redo
    #[error("No more moves to redo")]
    NoFuture,

    /// Malformed grid passed at construction
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}
