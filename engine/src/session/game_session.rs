use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, Notify};

use crate::game::{Direction, GameState};
use crate::log;

use super::broadcaster::{GameBroadcaster, GameOverNotification, GameSnapshot};
use super::session_rng::SessionRng;
use super::settings::GameSettings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Pause,
    Finish,
    Turn(Direction),
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<GameState>>,
    pub tick: Arc<Mutex<u64>>,
    pub rng: Arc<Mutex<SessionRng>>,
    shutdown: Arc<Notify>,
}

impl SnakeSessionState {
    pub fn create(settings: &GameSettings, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = GameState::new(settings.clone(), &mut rng);
        log!("Session created with seed {}", seed);

        Self {
            game_state: Arc::new(Mutex::new(game_state)),
            tick: Arc::new(Mutex::new(0u64)),
            rng: Arc::new(Mutex::new(rng)),
            shutdown: Arc::new(Notify::new()),
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    // Re-reads the interval every iteration; effects change it mid-game.
    pub async fn run(
        state: SnakeSessionState,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverNotification {
        loop {
            let interval = state.game_state.lock().await.tick_interval;
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = state.shutdown.notified() => break,
            }

            let mut game_state = state.game_state.lock().await;
            let mut rng = state.rng.lock().await;
            game_state.update(Instant::now(), &mut rng);
            drop(rng);

            let mut tick_value = state.tick.lock().await;
            *tick_value += 1;
            let snapshot = build_snapshot(&game_state, *tick_value);
            drop(tick_value);
            drop(game_state);

            broadcaster.broadcast_state(snapshot).await;
        }

        let final_score = state.game_state.lock().await.score;
        log!("Session finished, final score {}", final_score);
        GameOverNotification { final_score }
    }

    pub async fn handle_command(state: &SnakeSessionState, command: GameCommand) {
        match command {
            GameCommand::Turn(direction) => {
                state.game_state.lock().await.snake.set_direction(direction);
            }
            GameCommand::Start => {
                let mut game_state = state.game_state.lock().await;
                let mut rng = state.rng.lock().await;
                game_state.start(&mut rng);
            }
            GameCommand::Pause => {
                state.game_state.lock().await.pause();
            }
            GameCommand::Finish => {
                state.shutdown.notify_one();
            }
        }
    }
}

fn build_snapshot(state: &GameState, tick: u64) -> GameSnapshot {
    GameSnapshot {
        tick,
        phase: state.phase,
        score: state.score,
        snake: state.snake.body.iter().copied().collect(),
        food: state.food.position,
        power_up: state.power_up.position,
        background: state.background,
        tick_interval: state.tick_interval,
        board_size: state.settings().board_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GamePhase;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    #[derive(Clone)]
    struct CountingBroadcaster {
        ticks: Arc<AtomicU64>,
    }

    impl GameBroadcaster for CountingBroadcaster {
        async fn broadcast_state(&self, _snapshot: GameSnapshot) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }

        async fn broadcast_game_over(&self, _notification: GameOverNotification) {}
    }

    #[tokio::test]
    async fn test_start_command_enters_running() {
        let state = SnakeSessionState::create(&GameSettings::default(), 42);
        assert_eq!(state.game_state.lock().await.phase, GamePhase::Stopped);

        SnakeSession::handle_command(&state, GameCommand::Start).await;
        assert_eq!(state.game_state.lock().await.phase, GamePhase::Running);
    }

    #[tokio::test]
    async fn test_pause_only_applies_while_running() {
        let state = SnakeSessionState::create(&GameSettings::default(), 42);

        SnakeSession::handle_command(&state, GameCommand::Pause).await;
        assert_eq!(state.game_state.lock().await.phase, GamePhase::Stopped);

        SnakeSession::handle_command(&state, GameCommand::Start).await;
        SnakeSession::handle_command(&state, GameCommand::Pause).await;
        assert_eq!(state.game_state.lock().await.phase, GamePhase::Paused);
    }

    #[tokio::test]
    async fn test_turn_command_sets_pending_direction() {
        let state = SnakeSessionState::create(&GameSettings::default(), 42);
        SnakeSession::handle_command(&state, GameCommand::Start).await;

        SnakeSession::handle_command(&state, GameCommand::Turn(Direction::Up)).await;
        assert_eq!(
            state.game_state.lock().await.snake.pending_direction,
            Some(Direction::Up)
        );

        // Reversal ignored, last accepted request wins.
        SnakeSession::handle_command(&state, GameCommand::Turn(Direction::Left)).await;
        assert_eq!(
            state.game_state.lock().await.snake.pending_direction,
            Some(Direction::Up)
        );
    }

    #[tokio::test]
    async fn test_finish_before_first_tick_exits_immediately() {
        let state = SnakeSessionState::create(&GameSettings::default(), 42);
        let broadcaster = CountingBroadcaster {
            ticks: Arc::new(AtomicU64::new(0)),
        };

        SnakeSession::handle_command(&state, GameCommand::Finish).await;
        let notification = SnakeSession::run(state, broadcaster).await;
        assert_eq!(notification.final_score, 0);
    }

    #[tokio::test]
    async fn test_run_ticks_until_finish() {
        let state = SnakeSessionState::create(&GameSettings::default(), 42);
        let ticks = Arc::new(AtomicU64::new(0));
        let broadcaster = CountingBroadcaster {
            ticks: ticks.clone(),
        };

        let handle = tokio::spawn(SnakeSession::run(state.clone(), broadcaster));
        SnakeSession::handle_command(&state, GameCommand::Start).await;
        tokio::time::sleep(Duration::from_millis(700)).await;
        SnakeSession::handle_command(&state, GameCommand::Finish).await;

        let notification = handle.await.unwrap();
        assert!(ticks.load(Ordering::SeqCst) > 0);
        assert_eq!(
            notification.final_score,
            state.game_state.lock().await.score
        );
    }
}
