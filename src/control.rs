//! Vacuum control commands.
//!
//! Fire-and-forget: a 2xx from the backend counts as acceptance, after
//! which the console waits out a short settle delay and resyncs instead of
//! awaiting confirmation from the appliance itself.

use log::{info, warn};
use tokio::time::Duration;

use crate::backend::BackendClient;
use crate::events::{ConsoleEvent, EventBus};
use crate::models::{ControlAction, VacuumStatus};
use crate::sync::aggregator::SyncHandle;

/// Nominal time for a command to take effect before the follow-up resync.
const COMMAND_SETTLE_DELAY_MS: u64 = 500;

#[derive(Clone)]
pub struct CommandDispatcher {
    backend: BackendClient,
    events: EventBus,
    sync: SyncHandle,
}

impl CommandDispatcher {
    pub fn new(backend: BackendClient, events: EventBus, sync: SyncHandle) -> Self {
        Self {
            backend,
            events,
            sync,
        }
    }

    /// Post one control action. The outcome is reported on the event bus;
    /// failures never propagate and trigger no resync.
    pub async fn issue(&self, action: ControlAction) {
        match self.backend.control_vacuum(action).await {
            Ok(()) => {
                info!("vacuum {action} command accepted");
                self.events.emit(ConsoleEvent::CommandAccepted { action });
                self.sync
                    .resync_after(Duration::from_millis(COMMAND_SETTLE_DELAY_MS));
            }
            Err(err) => {
                warn!("vacuum {action} command failed: {err:#}");
                self.events.emit(ConsoleEvent::CommandFailed { action });
            }
        }
    }

    /// Start or stop based on the cached activity flag. The cache may be a
    /// poll behind the appliance, so the toggle can point the wrong way;
    /// that race is accepted under the polling model. No cached status
    /// toggles to start.
    pub fn toggle_action(status: Option<&VacuumStatus>) -> ControlAction {
        if status.map_or(false, |s| s.is_active) {
            ControlAction::Stop
        } else {
            ControlAction::Start
        }
    }

    /// Issue the toggle implied by the current snapshot.
    pub async fn toggle(&self) {
        let snapshot = self.sync.store().current();
        let action = Self::toggle_action(snapshot.vacuum_status.as_ref());
        self.issue(action).await;
    }
}
