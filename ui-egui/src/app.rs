// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application shell: side panel with status text, central board panel.

use crate::board_widget::BoardWidget;
use crate::ui_config::UiConfig;
use egui::{Color32, RichText};
use rookery_core::controller::GameController;
use rookery_core::rules::ShakmatyRules;
use rookery_core::{GameError, GameStatus};

/// Top-level eframe application
pub struct App {
    controller: GameController<ShakmatyRules>,
    board: BoardWidget,
    config: UiConfig,
    /// FEN the game (re)starts from; standard arrangement when absent
    start_fen: Option<String>,
}

impl App {
    /// Create the app, optionally starting from a FEN position
    pub fn new(config: UiConfig, start_fen: Option<String>) -> Result<Self, GameError> {
        let rules = match &start_fen {
            Some(fen) => ShakmatyRules::from_fen(fen)?,
            None => ShakmatyRules::new(),
        };
        Ok(Self {
            controller: GameController::new(rules),
            board: BoardWidget::new(),
            config,
            start_fen,
        })
    }

    fn new_game(&mut self) {
        let rules = match &self.start_fen {
            Some(fen) => match ShakmatyRules::from_fen(fen) {
                Ok(rules) => rules,
                Err(err) => {
                    // The FEN was already accepted at startup
                    tracing::error!(%err, "start FEN no longer parses");
                    return;
                }
            },
            None => ShakmatyRules::new(),
        };
        self.controller.reset(rules);
    }

    /// Status line derived from game status and side to move
    fn status_text(&self) -> String {
        let turn = self.controller.side_to_move();
        match self.controller.status() {
            GameStatus::Checkmate => format!("Checkmate! {} wins", turn.opposite()),
            GameStatus::Stalemate => "Stalemate".to_string(),
            GameStatus::Check => format!("Check! {} to move", turn),
            GameStatus::Ongoing => format!("{} to move", turn),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background: Color32 = self.config.colors.background.into();

        egui::SidePanel::right("status_panel")
            .exact_width(200.0)
            .frame(egui::Frame::default().fill(background).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.add_space(8.0);
                let status = RichText::new(self.status_text())
                    .size(18.0)
                    .color(Color32::WHITE);
                ui.label(status);

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(12.0);

                if ui.button("New game").clicked() {
                    self.new_game();
                }
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(background))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    if let Some(square) = self.board.render(ui, &self.controller, &self.config) {
                        // Illegal clicks are filtered before play; this only
                        // fires if the provider disagrees with its own targets
                        if let Err(err) = self.controller.handle_square_click(square) {
                            tracing::warn!(%err, %square, "click rejected by rules engine");
                        }
                    }
                });
            });
    }
}
