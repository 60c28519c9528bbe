use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::game::TILE_SIZE;

// The spawn region stops this far short of the right and bottom edges;
// the top and left edges are still reachable.
const SPAWN_INSET: i32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: i32,
    pub tick_interval_ms: u64,
    pub effect_duration_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: 650,
            tick_interval_ms: 150,
            effect_duration_ms: 5000,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.board_size % TILE_SIZE != 0 {
            return Err(format!(
                "Board size must be a multiple of the tile size ({})",
                TILE_SIZE
            ));
        }
        if self.board_size < 300 || self.board_size > 2000 {
            return Err("Board size must be between 300 and 2000".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.effect_duration_ms < 500 || self.effect_duration_ms > 60000 {
            return Err("Effect duration must be between 500ms and 60000ms".to_string());
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn effect_duration(&self) -> Duration {
        Duration::from_millis(self.effect_duration_ms)
    }

    pub fn spawn_bound(&self) -> i32 {
        self.board_size - SPAWN_INSET
    }
}
