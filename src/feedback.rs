//! Human corrections on classification results.
//!
//! An "incorrect" vote implies a corrected label, computed as the binary
//! complement over {valuable, trash}. The item's local state is never
//! touched optimistically; the follow-up resync brings the recorded
//! feedback back from the server.

use log::{info, warn};

use crate::backend::BackendClient;
use crate::events::{ConsoleEvent, EventBus};
use crate::models::{CorrectedLabel, DetectedItem, FeedbackVote, ItemType};
use crate::sync::aggregator::SyncHandle;

const NOTE_CONFIRMED: &str = "Confirmed";
const NOTE_CORRECTION: &str = "User correction";

/// The label implied by voting "incorrect" on an item. Everything that is
/// not already valuable corrects to valuable, including unknown. That
/// mapping is load-bearing compatibility with the deployed backend; do not
/// change it without a product decision.
pub fn corrected_label(original: ItemType) -> CorrectedLabel {
    match original {
        ItemType::Valuable => CorrectedLabel::Trash,
        _ => CorrectedLabel::Valuable,
    }
}

#[derive(Clone)]
pub struct FeedbackSubmitter {
    backend: BackendClient,
    events: EventBus,
    sync: SyncHandle,
}

impl FeedbackSubmitter {
    pub fn new(backend: BackendClient, events: EventBus, sync: SyncHandle) -> Self {
        Self {
            backend,
            events,
            sync,
        }
    }

    /// Submit one vote for one item. Callers gate on
    /// [`DetectedItem::accepts_feedback`]; the submitter itself does not
    /// re-validate. Outcome lands on the event bus; success triggers an
    /// immediate resync.
    pub async fn submit(&self, item: &DetectedItem, vote: FeedbackVote) {
        let corrected_type = match vote {
            FeedbackVote::Incorrect => Some(corrected_label(item.item_type)),
            FeedbackVote::Correct => None,
        };
        let note = match vote {
            FeedbackVote::Correct => NOTE_CONFIRMED,
            FeedbackVote::Incorrect => NOTE_CORRECTION,
        };

        match self
            .backend
            .submit_feedback(&item.id, vote, corrected_type, note)
            .await
        {
            Ok(()) => {
                info!("feedback recorded for item {}", item.id);
                self.events.emit(ConsoleEvent::FeedbackAccepted {
                    item_id: item.id.clone(),
                });
                self.sync.spawn_cycle();
            }
            Err(err) => {
                warn!("feedback for item {} failed: {err:#}", item.id);
                self.events.emit(ConsoleEvent::FeedbackFailed {
                    item_id: item.id.clone(),
                });
            }
        }
    }
}
