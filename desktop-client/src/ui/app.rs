use std::time::{Duration, Instant};

use common::log;
use common::tictactoe::{ComparisonResult, GameSession, GameStatus, GameView, TicTacToeGameState};

use super::board_view::BoardView;
use crate::config::Config;

/// egui repaints from the session every frame, so `render` only wakes the
/// event loop; the other callbacks keep what the dialogs and panel show.
pub struct EguiGameView {
    ctx: egui::Context,
    outcome: Option<GameStatus>,
    history: Vec<(u32, ComparisonResult)>,
}

impl EguiGameView {
    fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            outcome: None,
            history: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.outcome = None;
        self.history.clear();
    }
}

impl GameView for EguiGameView {
    fn render(&mut self, _state: &TicTacToeGameState) {
        self.ctx.request_repaint();
    }

    fn announce_result(&mut self, status: GameStatus) {
        log!("Game over: {}", status.announcement());
        self.outcome = Some(status);
    }

    fn report_comparison(&mut self, turn: u32, result: &ComparisonResult) {
        self.history.push((turn, *result));
    }
}

pub struct TicTacToeApp {
    session: GameSession<EguiGameView>,
    board_view: BoardView,
    ai_delay: Duration,
    ai_due_at: Option<Instant>,
    error: Option<String>,
}

impl TicTacToeApp {
    const INFO_PANEL_WIDTH: f32 = 280.0;

    pub fn new(ctx: egui::Context, config: &Config) -> Result<Self, String> {
        let session = GameSession::new(
            EguiGameView::new(ctx),
            config.human_mark,
            config.first_player,
        )?;

        let mut app = Self {
            session,
            board_view: BoardView::new(),
            ai_delay: Duration::from_millis(config.ai_delay_ms),
            ai_due_at: None,
            error: None,
        };
        app.schedule_ai_turn();
        Ok(app)
    }

    fn schedule_ai_turn(&mut self) {
        if self.session.is_ai_turn() && self.ai_due_at.is_none() {
            self.ai_due_at = Some(Instant::now() + self.ai_delay);
        }
    }

    fn run_due_ai_turn(&mut self, ctx: &egui::Context) {
        let Some(due_at) = self.ai_due_at else {
            return;
        };

        let now = Instant::now();
        if now < due_at {
            ctx.request_repaint_after(due_at - now);
            return;
        }

        self.ai_due_at = None;
        if let Err(e) = self.session.on_ai_turn() {
            log!("AI turn failed: {}", e);
            self.error = Some(e);
        }
    }

    fn handle_click(&mut self, position: usize) {
        match self.session.on_human_move(position) {
            Ok(()) => self.schedule_ai_turn(),
            Err(e) => log!("Move at {} rejected: {}", position, e),
        }
    }

    fn start_new_game(&mut self) {
        self.ai_due_at = None;
        self.session.view_mut().reset();
        if let Err(e) = self.session.new_game() {
            self.error = Some(e);
            return;
        }
        log!("New game started");
        self.schedule_ai_turn();
    }

    fn status_text(&self) -> String {
        let state = self.session.state();
        if state.status.is_over() {
            state.status.announcement()
        } else if state.is_ai_turn() {
            "AI is thinking...".to_string()
        } else {
            "Your turn".to_string()
        }
    }

    fn render_info_panel(&self, ui: &mut egui::Ui) {
        let state = self.session.state();

        ui.heading("AI Comparison");
        ui.label(format!("You: {}    AI: {}", state.human_mark, state.ai_mark));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(self.status_text()).strong());
        ui.separator();

        let history = &self.session.view().history;
        if history.is_empty() {
            ui.label(
                egui::RichText::new("No AI moves yet")
                    .color(egui::Color32::GRAY)
                    .small(),
            );
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (turn, result) in history.iter().rev() {
                ui.label(egui::RichText::new(format!("Turn {}", turn)).strong());
                ui.label(result.minimax.report_line());
                ui.label(result.alpha_beta.report_line());
                if !result.moves_agree() {
                    ui.label(
                        egui::RichText::new("Different moves of equal value")
                            .color(egui::Color32::from_rgb(200, 120, 0)),
                    );
                }
                ui.add_space(6.0);
            }
        });
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let Some(outcome) = self.session.view().outcome else {
            return;
        };

        let mut new_game_clicked = false;
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(outcome.announcement());
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("New Game").clicked() {
                        new_game_clicked = true;
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });

        if new_game_clicked {
            self.start_new_game();
        }
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = self.error.clone() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(&error);
                if ui.button("OK").clicked() {
                    self.error = None;
                }
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_due_ai_turn(ctx);

        egui::SidePanel::right("comparison_panel")
            .exact_width(Self::INFO_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.render_info_panel(ui);
            });

        let board = self.session.state().board;
        let accepts_input = self.session.state().is_human_turn()
            && self.ai_due_at.is_none()
            && self.error.is_none();

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                clicked = self.board_view.show(ui, &board, accepts_input);
            });
        });

        if let Some(position) = clicked {
            self.handle_click(position);
        }

        self.render_game_over_dialog(ctx);
        self.render_error_dialog(ctx);
    }
}
