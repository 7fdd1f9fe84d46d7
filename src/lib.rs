//! Console core for the TreasureSense smart vacuum.
//!
//! Polls the appliance backend on a fixed cadence and folds six reads into
//! one atomic dashboard snapshot. The operator's write surface (vacuum
//! control, classification feedback, notification acknowledgment) reports
//! its outcomes over an event bus. Rendering sits on top: subscribe to
//! snapshots for state and to the event bus for toasts, and call the pure
//! helpers in [`view`] at render time.

mod backend;
mod config;
mod control;
mod events;
mod feedback;
mod models;
mod notifications;
mod sync;
pub mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{broadcast, watch, Mutex};

pub use backend::BackendClient;
pub use config::ConsoleConfig;
pub use control::CommandDispatcher;
pub use events::{ConsoleEvent, EventBus};
pub use feedback::{corrected_label, FeedbackSubmitter};
pub use models::{
    CategoryCount, CleaningSession, ControlAction, CorrectedLabel, DetectedItem, FeedbackVote,
    ItemChamber, ItemType, Notification, NotificationKind, SessionStatus, Stats, VacuumMode,
    VacuumStatus,
};
pub use notifications::{unread_count, NotificationTracker};
pub use sync::{DashboardSnapshot, SnapshotStore, SyncController, SyncHandle};

/// Everything wired together: one backend client, one snapshot store, one
/// event bus, the polling scheduler, and the three write dispatchers.
/// Cloning is cheap and every clone talks to the same state.
#[derive(Clone)]
pub struct Console {
    events: EventBus,
    sync: SyncHandle,
    scheduler: Arc<Mutex<SyncController>>,
    control: CommandDispatcher,
    feedback: FeedbackSubmitter,
    notifications: NotificationTracker,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        let backend = BackendClient::new(&config);
        let store = SnapshotStore::new();
        let events = EventBus::new();
        let sync = SyncHandle::new(backend.clone(), store);
        let scheduler = Arc::new(Mutex::new(SyncController::new(sync.clone())));
        let control = CommandDispatcher::new(backend.clone(), events.clone(), sync.clone());
        let feedback = FeedbackSubmitter::new(backend.clone(), events.clone(), sync.clone());
        let notifications = NotificationTracker::new(backend, sync.clone());

        Self {
            events,
            sync,
            scheduler,
            control,
            feedback,
            notifications,
        }
    }

    /// Build from `TREASURESENSE_BACKEND_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ConsoleConfig::from_env()?))
    }

    /// Start polling. Errors if the loop is already running.
    pub async fn start(&self) -> Result<()> {
        self.scheduler.lock().await.start()
    }

    /// Stop polling. Idempotent; in-flight cycles run out harmlessly.
    pub async fn stop(&self) -> Result<()> {
        self.scheduler.lock().await.stop().await
    }

    /// The current snapshot. Empty until the first successful cycle.
    pub fn snapshot(&self) -> Arc<DashboardSnapshot> {
        self.sync.store().current()
    }

    /// True until the first cycle completes, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.sync.store().is_loading()
    }

    pub fn subscribe_snapshots(&self) -> watch::Receiver<Arc<DashboardSnapshot>> {
        self.sync.store().subscribe()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.snapshot())
    }

    pub async fn control_vacuum(&self, action: ControlAction) {
        self.control.issue(action).await;
    }

    /// Start or stop cleaning based on the cached activity flag.
    pub async fn toggle_cleaning(&self) {
        self.control.toggle().await;
    }

    pub async fn submit_feedback(&self, item: &DetectedItem, vote: FeedbackVote) {
        self.feedback.submit(item, vote).await;
    }

    pub async fn mark_notification_read(&self, notification_id: &str) {
        self.notifications.mark_read(notification_id).await;
    }
}
