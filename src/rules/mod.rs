//! Game rules for Gomoku
//!
//! Five or more stones in a row wins; overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{count_in_direction, find_five_line, has_five_at, line_through, DIRECTIONS, WIN_LENGTH};
