//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A placed stone: fixed position and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    pub row: usize,
    pub col: usize,
    pub color: Color,
}

impl Stone {
    #[inline]
    pub fn new(row: usize, col: usize, color: Color) -> Self {
        Self { row, col, color }
    }
}
