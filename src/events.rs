//! Write-outcome signals for whatever renders toasts.
//!
//! Read-cycle failures are absent here on purpose: they stay silent
//! besides logging, so only the write surface emits.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::models::ControlAction;

const EVENT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ConsoleEvent {
    #[serde(rename_all = "camelCase")]
    CommandAccepted { action: ControlAction },
    #[serde(rename_all = "camelCase")]
    CommandFailed { action: ControlAction },
    #[serde(rename_all = "camelCase")]
    FeedbackAccepted { item_id: String },
    #[serde(rename_all = "camelCase")]
    FeedbackFailed { item_id: String },
}

/// Broadcast fan-out for console events. Emission is fire-and-forget:
/// an operation's outcome does not depend on anyone listening.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<ConsoleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: ConsoleEvent) {
        let _ = self.tx.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
