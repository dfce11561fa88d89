//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use loanrisk_app::config::Settings;
use loanrisk_app::message::Message;
use loanrisk_app::process::process_message;
use loanrisk_app::signals;
use loanrisk_app::state::AppState;
use loanrisk_client::Predictor;
use loanrisk_core::prelude::*;

use super::{event, render, terminal};

/// Run the interactive form against `predictor`
pub async fn run<P>(settings: Settings, predictor: Arc<P>) -> Result<()>
where
    P: Predictor + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Prediction backend: {}", settings.server.base_url);

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    // Unified message channel for prediction completions and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &predictor);

    signal_task.abort();
    ratatui::restore();

    if state.submitting {
        debug!("Exiting with a prediction request still outstanding");
    }

    result
}

/// Main event loop
fn run_loop<P>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    predictor: &Arc<P>,
) -> Result<()>
where
    P: Predictor + Sync + 'static,
{
    while !state.should_quit() {
        // Process background messages (prediction completions, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, predictor);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, predictor);
        }
    }

    Ok(())
}
