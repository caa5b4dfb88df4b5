//! Command-line configuration for the GUI binary

use clap::Parser;

use crate::board::BOARD_SIZE;

/// Smallest board that still fits a five
pub const MIN_SIZE: i64 = 5;
/// Column labels run A-Z
pub const MAX_SIZE: i64 = 26;

/// Gomoku: five-in-a-row for two players on one screen
#[derive(Debug, Clone, Parser)]
#[command(name = "gomoku")]
#[command(author, version, about, long_about = None)]
pub struct GuiConfig {
    /// Number of rows
    #[arg(long, default_value_t = BOARD_SIZE as u16, value_parser = clap::value_parser!(u16).range(MIN_SIZE..=MAX_SIZE))]
    pub height: u16,

    /// Number of columns
    #[arg(long, default_value_t = BOARD_SIZE as u16, value_parser = clap::value_parser!(u16).range(MIN_SIZE..=MAX_SIZE))]
    pub width: u16,
}

impl GuiConfig {
    /// Initial window size: room for the board plus the side panel
    pub fn window_size(&self) -> [f32; 2] {
        let cells = self.height.max(self.width) as f32;
        let board = (cells * 40.0).clamp(480.0, 900.0);
        [board + 300.0, board + 40.0]
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            height: BOARD_SIZE as u16,
            width: BOARD_SIZE as u16,
        }
    }
}
