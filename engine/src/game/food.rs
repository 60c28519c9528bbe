use crate::log;
use crate::session::SessionRng;

use super::snake::Snake;
use super::types::{Point, TILE_SIZE};

// After this many occupied samples the last one is kept even on the snake.
const MAX_SPAWN_ATTEMPTS: u32 = 50;

#[derive(Clone, Copy, Debug)]
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn new(snake: &Snake, spawn_bound: i32, rng: &mut SessionRng) -> Self {
        let mut food = Self {
            position: Point::new(0, 0),
        };
        food.spawn(snake, spawn_bound, rng);
        food
    }

    pub fn spawn(&mut self, snake: &Snake, spawn_bound: i32, rng: &mut SessionRng) {
        let mut attempts = 0;
        loop {
            self.position = random_tile(spawn_bound, rng);
            attempts += 1;
            if !snake.occupies(self.position) {
                break;
            }
            if attempts >= MAX_SPAWN_ATTEMPTS {
                log!(
                    "Food spawn gave up after {} attempts, overlapping at ({}, {})",
                    attempts,
                    self.position.x,
                    self.position.y
                );
                break;
            }
        }
    }
}

pub(super) fn random_tile(spawn_bound: i32, rng: &mut SessionRng) -> Point {
    let tiles = spawn_bound / TILE_SIZE;
    Point::new(
        rng.random_range(0..tiles) * TILE_SIZE,
        rng.random_range(0..tiles) * TILE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    const SPAWN_BOUND: i32 = 550;

    #[test]
    fn test_spawn_avoids_snake() {
        let snake = Snake::new();
        let mut rng = SessionRng::new(7);
        for _ in 0..200 {
            let food = Food::new(&snake, SPAWN_BOUND, &mut rng);
            assert!(!snake.occupies(food.position));
        }
    }

    #[test]
    fn test_spawn_stays_within_bounds_and_on_grid() {
        let snake = Snake::new();
        let mut rng = SessionRng::new(11);
        for _ in 0..200 {
            let food = Food::new(&snake, SPAWN_BOUND, &mut rng);
            assert!((0..SPAWN_BOUND).contains(&food.position.x));
            assert!((0..SPAWN_BOUND).contains(&food.position.y));
            assert_eq!(food.position.x % TILE_SIZE, 0);
            assert_eq!(food.position.y % TILE_SIZE, 0);
        }
    }

    #[test]
    fn test_exhausted_attempts_accepts_overlap() {
        // Snake covering every cell of the spawn region: all samples overlap,
        // so the bounded loop must give up instead of hanging.
        let mut snake = Snake::new();
        let mut body = VecDeque::new();
        for x in (0..SPAWN_BOUND).step_by(TILE_SIZE as usize) {
            for y in (0..SPAWN_BOUND).step_by(TILE_SIZE as usize) {
                body.push_back(Point::new(x, y));
            }
        }
        snake.body = body;

        let mut rng = SessionRng::new(3);
        let food = Food::new(&snake, SPAWN_BOUND, &mut rng);
        assert!(snake.occupies(food.position));
    }
}
