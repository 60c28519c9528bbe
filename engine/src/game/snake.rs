use std::collections::VecDeque;

use super::types::{Direction, Point, TILE_SIZE};

const START: Point = Point::new(100, 100);
const INITIAL_LENGTH: usize = 3;

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new() -> Self {
        let mut snake = Self {
            body: VecDeque::new(),
            direction: Direction::Right,
            pending_direction: None,
        };
        snake.reset();
        snake
    }

    pub fn reset(&mut self) {
        self.body.clear();
        for i in 0..INITIAL_LENGTH as i32 {
            self.body.push_back(Point::new(START.x - i * TILE_SIZE, START.y));
        }
        self.direction = Direction::Right;
        self.pending_direction = None;
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, position: Point) -> bool {
        self.body.contains(&position)
    }

    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn advance(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
        let next_head = self.head().stepped(self.direction);
        self.body.push_front(next_head);
        self.body.pop_back();
    }

    pub fn grow(&mut self) {
        let tail = *self.body.back().expect("Snake body should never be empty");
        self.body.push_back(tail);
    }

    pub fn has_collision(&self, board_size: i32) -> bool {
        let head = self.head();
        if self.body.iter().skip(1).any(|segment| *segment == head) {
            return true;
        }
        head.x < 0 || head.x >= board_size || head.y < 0 || head.y >= board_size
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
