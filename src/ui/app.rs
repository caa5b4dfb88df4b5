//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::Color;
use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.add_enabled(self.state.board.can_undo(), egui::Button::new("Undo (U)")).clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.state.board.can_redo(), egui::Button::new("Redo (R)")).clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let board = &self.state.board;
                    ui.label(format!("{}x{}", board.height(), board.width()));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(result) = self.state.result() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.board.turn();
            let (accent, glyph_color) = match turn {
                Color::Black => (BLACK_STONE, TEXT_PRIMARY),
                Color::White => (WHITE_STONE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if turn == Color::Black { "B" } else { "W" },
                    egui::FontId::proportional(20.0),
                    glyph_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));
                    let (status, color) = if self.state.board.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                let actions: [(&str, fn(&mut GameState)); 3] = [
                    ("Undo", GameState::undo),
                    ("Redo", GameState::redo),
                    ("New", GameState::reset),
                ];
                for (label, action) in actions {
                    btn_frame.show(ui, |ui| {
                        let button = egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click());
                        if ui.add(button).clicked() {
                            action(&mut self.state);
                        }
                    });
                    ui.add_space(4.0);
                }
            });

            ui.add_space(8.0);
            let board = &self.state.board;
            ui.label(
                RichText::new(format!("Move #{} of {}", board.move_count(), board.capacity()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, detail) = match result {
            GameResult::Win { winner, .. } => (format!("{} WINS!", winner.to_string().to_uppercase()), "by 5-in-a-row"),
            GameResult::Draw => ("DRAW".to_string(), "board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARNING));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.winning_line();
            let clicked = self.board_view.show(ui, &self.state.board, winning_line.as_deref());

            if let Some((row, col)) = clicked {
                self.state.try_place_stone(row, col);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, redo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::N),
            )
        });

        if undo {
            self.state.undo();
        }
        if redo {
            self.state.redo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
