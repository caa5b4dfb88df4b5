//! Gomoku rules engine
//!
//! Tracks stone placement on a grid, enforces turn order, detects a win or a
//! draw, and supports undo/redo of moves:
//! - Standard 15x15 board (any size via [`Board::with_size`] or [`Board::from_grid`])
//! - Black moves first, colors alternate
//! - 5-in-a-row to win (overlines allowed)
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board state, move history, undo/redo
//! - [`rules`]: Line scans for win detection
//! - [`error`]: Errors returned by board operations
//! - [`config`]: Command-line options for the GUI binary
//! - [`ui`]: Desktop GUI that drives a [`Board`]
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Color};
//!
//! let mut board = Board::new();
//! for col in 0..4 {
//!     board.make_move(0, col).unwrap(); // Black
//!     board.make_move(5, col).unwrap(); // White
//! }
//! board.make_move(0, 4).unwrap();
//!
//! assert_eq!(board.winner(), Some(Color::Black));
//! assert!(board.is_over());
//!
//! // Take the winning move back
//! board.undo().unwrap();
//! assert!(!board.is_over());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Stone, BOARD_SIZE};
pub use error::BoardError;
