//! Message processing

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use loanrisk_client::Predictor;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<P>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    predictor: &Arc<P>,
) where
    P: Predictor + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), predictor.clone());
        }

        msg = result.message;
    }
}
