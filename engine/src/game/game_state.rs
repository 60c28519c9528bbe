use std::time::Instant;

use crate::log;
use crate::session::{GameSettings, SessionRng};

use super::food::Food;
use super::power_up::{Effect, PowerUp};
use super::snake::Snake;
use super::types::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Stopped,
    Running,
    Paused,
    GameOver,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub power_up: PowerUp,
    pub score: u32,
    pub phase: GamePhase,
    pub tick_interval: std::time::Duration,
    pub active_effect: Option<Effect>,
    pub background: Rgb,
    color_toggle: bool,
    settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new();
        let spawn_bound = settings.spawn_bound();
        let food = Food::new(&snake, spawn_bound, rng);
        let power_up = PowerUp::new(&snake, spawn_bound, rng);
        Self {
            snake,
            food,
            power_up,
            score: 0,
            phase: GamePhase::Stopped,
            tick_interval: settings.tick_interval(),
            active_effect: None,
            background: Rgb::BLACK,
            color_toggle: false,
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn start(&mut self, rng: &mut SessionRng) {
        if self.phase == GamePhase::Running {
            return;
        }
        let spawn_bound = self.settings.spawn_bound();
        self.score = 0;
        self.snake.reset();
        self.food.spawn(&self.snake, spawn_bound, rng);
        self.power_up.spawn(&self.snake, spawn_bound, rng);
        self.phase = GamePhase::Running;
        log!("Game started");
    }

    // No mid-game resume; only start leaves Paused, and it resets.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
            log!("Game paused at score {}", self.score);
        }
    }

    pub fn update(&mut self, now: Instant, rng: &mut SessionRng) {
        if self.phase != GamePhase::Running {
            return;
        }

        let spawn_bound = self.settings.spawn_bound();
        self.snake.advance();

        if self.snake.head() == self.food.position {
            self.score += 1;
            self.snake.grow();
            self.food.spawn(&self.snake, spawn_bound, rng);
            log!("Ate food, score {}", self.score);
        }

        if self.snake.head() == self.power_up.position {
            self.power_up.spawn(&self.snake, spawn_bound, rng);
            let effect = PowerUp::activate(rng, now, self.settings.effect_duration());
            self.tick_interval = effect.tick_interval;
            self.active_effect = Some(effect);
            log!(
                "Power-up consumed, tick interval {} ms",
                effect.tick_interval.as_millis()
            );
        }

        match self.active_effect {
            Some(effect) if now >= effect.expires_at => {
                self.active_effect = None;
                self.tick_interval = self.settings.tick_interval();
                self.background = Rgb::BLACK;
                log!(
                    "Effect expired, tick interval back to {} ms",
                    self.tick_interval.as_millis()
                );
            }
            None => {
                self.tick_interval = self.settings.tick_interval();
            }
            Some(_) => {}
        }

        if self.snake.has_collision(self.settings.board_size) {
            self.phase = GamePhase::GameOver;
            log!("Game over, final score {}", self.score);
        }

        if let Some(effect) = self.active_effect
            && (effect.color == Rgb::PURPLE || effect.color == Rgb::DARK_GREEN)
        {
            self.color_toggle = !self.color_toggle;
            self.background = if self.color_toggle {
                effect.color
            } else {
                Rgb::BLACK
            };
        }
    }
}
