//! Dispatcher for queueing actions back into the store
//!
//! Middleware and bound props hold a cloned [`Dispatcher`]. Actions sent through
//! it are queued on a channel and re-enter the full middleware chain when the
//! store drains its queue.

use std::sync::mpsc::Sender;

use super_actions::{Action, Dispatch};

/// Dispatcher for sending actions to the store's pending queue
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to queue action: {}", e);
        }
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, action: Action) {
        Dispatcher::dispatch(self, action);
    }
}
