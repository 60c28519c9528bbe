use engine::game::TILE_SIZE;
use engine::{Direction, GameCommand, GamePhase, GameSnapshot, Point, Rgb};
use tokio::sync::mpsc;

use crate::state::SharedState;

const SNAKE_HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const SNAKE_BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(192, 192, 192);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const POWER_UP_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 255);
const TEXT_COLOR: egui::Color32 = egui::Color32::WHITE;

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

// Any non-running phase shows the score overlay instead of the board,
// paused included.
fn shows_live_board(phase: GamePhase) -> bool {
    phase == GamePhase::Running
}

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<GameCommand>,
    scale: f32,
}

impl GameApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<GameCommand>,
        scale: f32,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            scale,
        }
    }

    fn handle_input(&self, ctx: &egui::Context) {
        ctx.input(|i| {
            let mut new_direction = None;

            if i.key_pressed(egui::Key::W) || i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::S) || i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::A) || i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::D) || i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::Right);
            }

            if let Some(direction) = new_direction {
                let _ = self.command_tx.send(GameCommand::Turn(direction));
            }
        });

        ctx.request_repaint();
    }

    fn tile_rect(&self, position: Point, canvas_min: egui::Pos2) -> egui::Rect {
        let tile = TILE_SIZE as f32 * self.scale;
        let min = egui::Pos2::new(
            canvas_min.x + position.x as f32 * self.scale,
            canvas_min.y + position.y as f32 * self.scale,
        );
        egui::Rect::from_min_size(min, egui::Vec2::new(tile, tile))
    }

    fn render_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let canvas_size = snapshot.board_size as f32 * self.scale;
        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_size, canvas_size),
            egui::Sense::hover(),
        );

        let rect = response.rect;
        painter.rect_filled(rect, 0.0, to_color32(snapshot.background));

        if shows_live_board(snapshot.phase) {
            let food_rect = self.tile_rect(snapshot.food, rect.min);
            painter.circle_filled(food_rect.center(), food_rect.width() / 2.0, FOOD_COLOR);

            let power_up_rect = self.tile_rect(snapshot.power_up, rect.min);
            painter.rect_filled(power_up_rect, 4.0, POWER_UP_COLOR);

            for (i, segment) in snapshot.snake.iter().enumerate() {
                let color = if i == 0 {
                    SNAKE_HEAD_COLOR
                } else {
                    SNAKE_BODY_COLOR
                };
                painter.rect_filled(self.tile_rect(*segment, rect.min), 0.0, color);
            }

            painter.text(
                rect.min + egui::Vec2::new(10.0, 10.0),
                egui::Align2::LEFT_TOP,
                format!("Score: {}", snapshot.score),
                egui::FontId::proportional(18.0),
                TEXT_COLOR,
            );
        } else {
            painter.text(
                rect.center() - egui::Vec2::new(0.0, 20.0),
                egui::Align2::CENTER_CENTER,
                "Game Over",
                egui::FontId::proportional(32.0),
                TEXT_COLOR,
            );
            painter.text(
                rect.center() + egui::Vec2::new(0.0, 20.0),
                egui::Align2::CENTER_CENTER,
                format!("Your score: {}", snapshot.score),
                egui::FontId::proportional(24.0),
                TEXT_COLOR,
            );
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shared_state.should_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.handle_input(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    let _ = self.command_tx.send(GameCommand::Start);
                }
                if ui.button("Pause").clicked() {
                    let _ = self.command_tx.send(GameCommand::Pause);
                }
                if ui.button("Finish").clicked() {
                    let _ = self.command_tx.send(GameCommand::Finish);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(snapshot) = self.shared_state.get_snapshot() {
                self.render_board(ui, &snapshot);
            } else {
                ui.heading("Waiting for the session to start...");
                ui.spinner();
            }
        });
    }
}
