//! Board rendering for the Gomoku GUI

use crate::{Board, Color, Stone};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    height: usize,
    width: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            height: 0,
            width: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        winning_line: Option<&[Stone]>,
    ) -> Option<(usize, usize)> {
        self.height = board.height();
        self.width = board.width();
        let available_size = ui.available_size();

        // Fit the longer side into the available space
        let cells = self.height.max(self.width).max(2) as f32;
        let side = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (cells - 1.0);

        let size = Vec2::new(
            2.0 * BOARD_MARGIN + (self.width as f32 - 1.0) * self.cell_size,
            2.0 * BOARD_MARGIN + (self.height as f32 - 1.0) * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(stone) = board.last_move() {
            self.draw_last_move_marker(&painter, stone);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        if board.is_over() {
            return None;
        }

        let (row, col) = self.screen_to_board(response.hover_pos()?)?;
        if !board.is_empty(row, col) {
            return None;
        }
        self.draw_hover_preview(&painter, row, col, board.turn());
        response.clicked().then_some((row, col))
    }

    /// Draw the grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let right = BOARD_MARGIN + (self.width as f32 - 1.0) * self.cell_size;
        let bottom = BOARD_MARGIN + (self.height as f32 - 1.0) * self.cell_size;

        for col in 0..self.width {
            let x = BOARD_MARGIN + col as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(x, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(x, bottom);
            painter.line_segment([start, end], stroke);
        }
        for row in 0..self.height {
            let y = BOARD_MARGIN + row as f32 * self.cell_size;
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, y);
            let end = self.board_rect.min + Vec2::new(right, y);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.height, self.width) {
            painter.circle_filled(self.board_to_screen(row, col), STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (letters across, numbers down counting from the bottom)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.width {
            let letter = column_label(col);
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            for y in [self.board_rect.min.y + 12.0, self.board_rect.max.y - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &letter, font.clone(), GRID_LINE);
            }
        }

        for row in 0..self.height {
            let label = format!("{}", self.height - row);
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            for x in [self.board_rect.min.x + 12.0, self.board_rect.max.x - 12.0] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
            }
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for row in 0..board.height() {
            for col in 0..board.width() {
                if let Some(stone) = board.get(row, col) {
                    self.draw_stone(painter, stone);
                }
            }
        }
    }

    /// Draw a single stone with a shadow and highlight
    fn draw_stone(&self, painter: &Painter, stone: Stone) {
        let center = self.board_to_screen(stone.row, stone.col);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone.color {
            Color::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Color::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, stone: Stone) {
        let center = self.board_to_screen(stone.row, stone.col);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Connect the winning stones and ring each of them
    fn draw_winning_line(&self, painter: &Painter, line: &[Stone]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0].row, pair[0].col);
            let end = self.board_to_screen(pair[1].row, pair[1].col);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for stone in line {
            painter.circle_stroke(self.board_to_screen(stone.row, stone.col), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, row: usize, col: usize, turn: Color) {
        let color = match turn {
            Color::Black => hover_black(),
            Color::White => hover_white(),
        };
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(row, col), radius, color);
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<(usize, usize)> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let row = y.floor() as i32;

        if col >= 0 && (col as usize) < self.width && row >= 0 && (row as usize) < self.height {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Convert a board cell to screen coordinates
    pub fn board_to_screen(&self, row: usize, col: usize) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Column label: A-Z, then 1-based numbers on wider boards
pub fn column_label(col: usize) -> String {
    if col < 26 {
        char::from(b'A' + col as u8).to_string()
    } else {
        (col + 1).to_string()
    }
}
