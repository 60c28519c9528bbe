use std::future::Future;
use std::time::Duration;

use crate::game::{GamePhase, Point, Rgb};

#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u32,
    // head first
    pub snake: Vec<Point>,
    pub food: Point,
    pub power_up: Point,
    pub background: Rgb,
    pub tick_interval: Duration,
    pub board_size: i32,
}

#[derive(Clone, Debug)]
pub struct GameOverNotification {
    pub final_score: u32,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
