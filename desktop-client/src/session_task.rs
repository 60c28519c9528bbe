use engine::{GameBroadcaster, GameCommand, SnakeSession, SnakeSessionState};
use tokio::sync::mpsc;

use crate::broadcaster::LocalBroadcaster;
use crate::state::SharedState;

pub async fn run_session(
    session: SnakeSessionState,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<GameCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let mut run_handle = tokio::spawn(SnakeSession::run(session.clone(), broadcaster.clone()));

    let notification = loop {
        tokio::select! {
            result = &mut run_handle => break result.ok(),
            command = command_rx.recv() => match command {
                Some(command) => SnakeSession::handle_command(&session, command).await,
                None => {
                    // UI thread is gone, shut the session down.
                    SnakeSession::handle_command(&session, GameCommand::Finish).await;
                    break (&mut run_handle).await.ok();
                }
            }
        }
    };

    if let Some(notification) = notification {
        broadcaster.broadcast_game_over(notification).await;
    }
}
