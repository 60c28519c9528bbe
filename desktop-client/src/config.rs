use engine::GameSettings;
use engine::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "arcade_snake_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub window_scale: f32,
    pub game: GameSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            window_scale: 1.0,
            game: GameSettings::default(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.5..=3.0).contains(&self.window_scale) {
            return Err(format!(
                "Window scale must be between 0.5 and 3.0, got {}",
                self.window_scale
            ));
        }
        self.game.validate()
    }
}
