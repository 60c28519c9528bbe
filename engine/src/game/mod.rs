mod food;
mod game_state;
mod power_up;
mod snake;
mod types;

pub use food::Food;
pub use game_state::{GamePhase, GameState};
pub use power_up::{Effect, PowerUp};
pub use snake::Snake;
pub use types::{Direction, Point, Rgb, TILE_SIZE};
