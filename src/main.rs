//! Gomoku GUI
//!
//! Two players take turns on one screen.

use anyhow::{anyhow, Context};
use clap::Parser;
use log::info;

use gomoku::config::GuiConfig;
use gomoku::ui::{GameState, GomokuApp};

fn main() -> anyhow::Result<()> {
    env_logger::builder().format_target(false).init();

    let config = GuiConfig::parse();
    info!("Starting {}x{} board", config.height, config.width);

    let state = GameState::new(config.height as usize, config.width as usize)
        .context("Failed to create board")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, state)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
