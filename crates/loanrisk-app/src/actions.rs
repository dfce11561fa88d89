//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::UpdateAction;
use loanrisk_client::Predictor;
use loanrisk_core::prelude::*;
use loanrisk_core::ApplicationInput;

/// Execute an action by spawning a background task
pub fn handle_action<P>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, predictor: Arc<P>)
where
    P: Predictor + Sync + 'static,
{
    match action {
        UpdateAction::SubmitPrediction { input } => {
            spawn_prediction(input, predictor, msg_tx);
        }
    }
}

/// Run one prediction request in the background.
///
/// The request runs in its own task under a supervisor, so exactly one
/// `PredictionReceived` or `PredictionFailed` message is sent even if the
/// request panics.
pub fn spawn_prediction<P>(
    input: ApplicationInput,
    predictor: Arc<P>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    P: Predictor + Sync + 'static,
{
    tokio::spawn(async move {
        let request = tokio::spawn(async move { predictor.predict(&input).await });

        let message = match request.await {
            Ok(Ok(assessment)) => Message::PredictionReceived { assessment },
            Ok(Err(e)) => {
                warn!("Prediction request failed: {}", e);
                Message::PredictionFailed {
                    error: e.user_message(),
                }
            }
            Err(join_error) => {
                error!("Prediction task aborted: {}", join_error);
                Message::PredictionFailed {
                    error: Error::request("Prediction task aborted unexpectedly").user_message(),
                }
            }
        };

        if msg_tx.send(message).await.is_err() {
            debug!("Message channel closed, dropping prediction completion");
        }
    })
}
