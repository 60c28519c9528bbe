use std::time::{Duration, Instant};

use crate::session::SessionRng;

use super::food::random_tile;
use super::snake::Snake;
use super::types::{Point, Rgb};

const FAST_TICK: Duration = Duration::from_millis(100);
const SLOW_TICK: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Effect {
    pub tick_interval: Duration,
    pub color: Rgb,
    pub expires_at: Instant,
}

#[derive(Clone, Copy, Debug)]
pub struct PowerUp {
    pub position: Point,
}

impl PowerUp {
    pub fn new(snake: &Snake, spawn_bound: i32, rng: &mut SessionRng) -> Self {
        let mut power_up = Self {
            position: Point::new(0, 0),
        };
        power_up.spawn(snake, spawn_bound, rng);
        power_up
    }

    // No attempt cap, unlike food; cannot terminate if the snake ever
    // covers the whole spawn region.
    pub fn spawn(&mut self, snake: &Snake, spawn_bound: i32, rng: &mut SessionRng) {
        loop {
            self.position = random_tile(spawn_bound, rng);
            if !snake.occupies(self.position) {
                return;
            }
        }
    }

    pub fn activate(rng: &mut SessionRng, now: Instant, duration: Duration) -> Effect {
        let expires_at = now + duration;
        if rng.random_bool() {
            Effect {
                tick_interval: FAST_TICK,
                color: Rgb::PURPLE,
                expires_at,
            }
        } else {
            Effect {
                tick_interval: SLOW_TICK,
                color: Rgb::DARK_GREEN,
                expires_at,
            }
        }
    }
}
