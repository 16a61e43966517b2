//! Main application for the Reversi GUI

use eframe::egui;
use egui::{CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::{Phase, Stone, MAX_PLY};

/// Main Reversi application
pub struct ReversiApp {
    state: GameState,
    board_view: BoardView,
    show_hints: bool,
}

impl ReversiApp {
    /// Create a new app with the human bound to `human`
    pub fn new(_cc: &eframe::CreationContext<'_>, human: Stone) -> Self {
        Self {
            state: GameState::new(human),
            board_view: BoardView::default(),
            show_hints: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Clear (N)").clicked() {
                        self.state.clear();
                        ui.close_menu();
                    }
                    if ui.button("Change sides (C)").clicked() {
                        self.state.change();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_hints, "Legal move hints (H)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", self.state.engine.human_side().name()));
                });
            });
        });
    }

    /// Render the side panel with counters and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_engine_card(ui);

                if self.state.engine.phase() == Phase::GameOver {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("REVERSI").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Whose move it is and what the engine is doing
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let engine = &self.state.engine;
            let status_color = match engine.phase() {
                Phase::GameOver => STATUS_DONE,
                _ if self.state.is_human_turn() => STATUS_OK,
                _ => STATUS_BUSY,
            };

            ui.horizontal(|ui| {
                let (symbol, color) = stone_symbol(engine.human_side());
                ui.label(RichText::new(symbol).size(24.0).color(color));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("You play {}", engine.human_side().name())).size(14.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(self.state.status_text()).size(12.0).color(status_color));
                });
            });

            ui.add_space(6.0);
            ui.label(RichText::new(format!("Move {} / {}", engine.ply(), MAX_PLY)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Stone counts and the signed difference
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("STONES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for side in [Stone::Black, Stone::White] {
                let (symbol, color) = stone_symbol(side);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(color));
                    ui.label(RichText::new(side.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let count = self.state.engine.piece_count(side);
                        ui.label(RichText::new(count.to_string()).size(16.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }

            ui.add_space(6.0);
            let diff = self.state.engine.piece_diff();
            ui.label(RichText::new(format!("Difference {diff:+}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("Clear").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.clear();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui.add(egui::Label::new(RichText::new("Change").size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                        self.state.change();
                    }
                });
            });
        });
    }

    /// Evaluator view of the position and the last automated choice
    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let engine = &self.state.engine;
            ui.label(RichText::new(format!("Eval: {}", engine.eval_value())).size(12.0).strong().color(TEXT_PRIMARY));

            match engine.last_selection() {
                Some(result) => {
                    let choice = match result.best_move {
                        Some(pos) => format!("→ {pos}"),
                        None => "→ pass".to_string(),
                    };
                    ui.label(RichText::new(choice).size(12.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("Score {} over {} candidates", result.score, result.candidates))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
                None => {
                    ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(STATUS_DONE));
                    ui.add_space(8.0);

                    let headline = match self.state.engine.winner() {
                        Some(winner) => format!("{} wins", winner.name()),
                        None => "Draw".to_string(),
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!(
                            "{} - {}",
                            self.state.engine.piece_count(Stone::Black),
                            self.state.engine.piece_count(Stone::White)
                        ))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);
                    Frame::new()
                        .fill(BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            if ui.add(egui::Label::new(RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY)).sense(egui::Sense::click())).clicked() {
                                self.state.clear();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = Color32::from_rgb(40, 42, 46);

            let interactive = self.state.is_human_turn();
            let hints = if interactive && self.show_hints {
                self.state.engine.legal_moves(self.state.engine.human_side())
            } else {
                Vec::new()
            };

            let overlay = BoardOverlay {
                hints: &hints,
                changes: self.state.engine.change_list(),
                human: self.state.engine.human_side(),
                interactive,
            };

            let clicked = self.board_view.show(ui, self.state.engine.board(), &overlay);

            if let Some(pos) = clicked {
                self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - Clear
            if i.key_pressed(egui::Key::N) {
                self.state.clear();
            }

            // C - Change sides
            if i.key_pressed(egui::Key::C) {
                self.state.change();
            }

            // H - Toggle hints
            if i.key_pressed(egui::Key::H) {
                self.show_hints = !self.show_hints;
            }
        });
    }
}

fn stone_symbol(stone: Stone) -> (&'static str, Color32) {
    match stone {
        Stone::Black => ("●", BLACK_STONE),
        Stone::White => ("○", WHITE_STONE),
        Stone::Empty => ("·", TEXT_MUTED),
    }
}

impl eframe::App for ReversiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // A reply queued on an earlier frame runs once that frame has shown the human's move
        let due = self.state.is_automated_pending();

        self.handle_input(ctx);

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if due {
            self.state.poll_automated();
        }
        if due || self.state.is_automated_pending() {
            ctx.request_repaint();
        }
    }
}
