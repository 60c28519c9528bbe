mod broadcaster;
mod game_session;
mod session_rng;
mod settings;

pub use broadcaster::{GameBroadcaster, GameOverNotification, GameSnapshot};
pub use game_session::{GameCommand, SnakeSession, SnakeSessionState};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
