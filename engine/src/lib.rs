pub mod config;
pub mod game;
pub mod logger;
pub mod session;

pub use game::{Direction, GamePhase, Point, Rgb};
pub use session::{
    GameBroadcaster, GameCommand, GameOverNotification, GameSettings, GameSnapshot, SessionRng,
    SnakeSession, SnakeSessionState,
};
