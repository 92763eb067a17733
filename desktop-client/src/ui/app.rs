use std::time::Instant;

use common::games::tictactoe::{DifficultySetting, DifficultyTier, GameStatus};
use common::log;

use super::board_view::BoardView;
use crate::local_game::LocalGame;

pub struct TicTacToeApp {
    local_game: LocalGame,
    board_view: BoardView,
    error: Option<String>,
}

impl TicTacToeApp {
    pub fn new(local_game: LocalGame) -> Self {
        Self {
            local_game,
            board_view: BoardView::new(),
            error: None,
        }
    }

    fn difficulty_label(setting: &DifficultySetting) -> String {
        match setting {
            DifficultySetting::Tier(tier) => tier.name().to_string(),
            DifficultySetting::Custom {
                mistake_probability,
                ladder,
            } => format!("custom ({:.2}, {})", mistake_probability, ladder),
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Difficulty")
                .selected_text(Self::difficulty_label(&self.local_game.selected_difficulty))
                .show_ui(ui, |ui| {
                    for tier in DifficultyTier::ALL {
                        ui.selectable_value(
                            &mut self.local_game.selected_difficulty,
                            DifficultySetting::Tier(tier),
                            tier.name(),
                        );
                    }
                });

            if ui.button("Restart Game").clicked() {
                if let Err(err) = self.local_game.restart() {
                    log!("Restart failed: {}", err);
                    self.error = Some(err);
                } else {
                    self.error = None;
                }
            }
        });

        if &self.local_game.selected_difficulty != self.local_game.active_difficulty() {
            ui.label("New difficulty applies on restart");
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = self.local_game.status_text();
        let color = match self.local_game.game().status {
            GameStatus::HumanWon => egui::Color32::from_rgb(40, 160, 40),
            GameStatus::ComputerWon => egui::Color32::from_rgb(200, 40, 40),
            _ => ui.visuals().text_color(),
        };
        ui.heading(egui::RichText::new(text).color(color));

        if let Some(err) = &self.error {
            ui.colored_label(egui::Color32::RED, err);
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.local_game.tick(Instant::now()) {
            Ok(Some(wait)) => ctx.request_repaint_after(wait),
            Ok(None) => {}
            Err(err) => {
                log!("Computer move failed: {}", err);
                self.error = Some(err);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                self.render_status(ui);
                ui.add_space(10.0);
                self.render_controls(ui);
                ui.add_space(10.0);
                ui.separator();

                let enabled = self.local_game.cells_enabled();
                if let Some(pos) = self.board_view.render(ui, self.local_game.game(), enabled)
                    && self.local_game.click(pos, Instant::now())
                {
                    ctx.request_repaint();
                }
            });
        });
    }
}
