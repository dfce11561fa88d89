//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use loanrisk_core::prelude::*;

/// Signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "interrupt"),
            ShutdownSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Forward the first shutdown signal to the event loop as [`Message::Quit`].
///
/// Abort the returned handle once the loop has exited.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_shutdown_signal().await {
            Ok(signal) => {
                info!("Quitting on {} signal", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Event loop already gone");
                }
            }
            Err(e) => warn!("Signals unavailable, Ctrl+C is handled as a key: {}", e),
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind| {
        signal(kind).map_err(|e| Error::terminal(format!("signal listener: {}", e)))
    };
    let mut interrupt = listen(SignalKind::interrupt())?;
    let mut terminate = listen(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("signal listener: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
