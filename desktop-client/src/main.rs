mod app;
mod broadcaster;
mod config;
mod session_task;
mod state;

use clap::Parser;
use eframe::egui;
use engine::config::YamlConfig;
use engine::logger::init_logger;
use engine::{SnakeSessionState, log};
use tokio::sync::mpsc;

use app::GameApp;
use config::{ClientConfig, DEFAULT_CONFIG_FILE};
use state::SharedState;

#[derive(Parser)]
#[command(name = "arcade_snake_client")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config = YamlConfig::<ClientConfig>::new(&args.config).load()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let session = SnakeSessionState::create(&config.game, seed);
    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let session_clone = session.clone();
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(session_task::run_session(
            session_clone,
            shared_state_clone,
            command_rx,
        ));
    });

    let window_size = config.game.board_size as f32 * config.window_scale;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window_size + 20.0, window_size + 60.0])
            .with_title("Snake Game"),
        ..Default::default()
    };

    let app_state = shared_state.clone();
    let scale = config.window_scale;
    eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(app_state, command_tx, scale)))),
    )?;

    if let Some(notification) = shared_state.take_game_over() {
        log!("Final score: {}", notification.final_score);
    }

    Ok(())
}
