use engine::{GameOverNotification, GameSnapshot};
use std::sync::{Arc, Mutex};

pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    game_over: Arc<Mutex<Option<GameOverNotification>>>,
    should_close: Arc<Mutex<bool>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            game_over: Arc::new(Mutex::new(None)),
            should_close: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn get_snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_game_over(&self, notification: GameOverNotification) {
        *self.game_over.lock().unwrap() = Some(notification);
        *self.should_close.lock().unwrap() = true;
    }

    pub fn take_game_over(&self) -> Option<GameOverNotification> {
        self.game_over.lock().unwrap().take()
    }

    pub fn should_close(&self) -> bool {
        *self.should_close.lock().unwrap()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            game_over: Arc::clone(&self.game_over),
            should_close: Arc::clone(&self.should_close),
        }
    }
}
