//! The shared snapshot cell.
//!
//! One aggregation cycle produces one `DashboardSnapshot`; the store
//! replaces the published value wholesale on commit, so readers never
//! observe a partially updated view. Commits carry the cycle number they
//! were issued under and are refused when a later-issued cycle has already
//! committed, which keeps overlapping cycles deterministic.

use std::sync::{Arc, Mutex};

use log::debug;
use serde::Serialize;
use tokio::sync::watch;

use crate::models::{CleaningSession, DetectedItem, Notification, Stats, VacuumStatus};

/// Everything the console knows, as of the last fully successful cycle.
/// The default value is the pre-first-cycle "nothing yet" state; renderers
/// must tolerate it.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub vacuum_status: Option<VacuumStatus>,
    pub detected_items: Vec<DetectedItem>,
    pub valuables: Vec<DetectedItem>,
    pub notifications: Vec<Notification>,
    pub stats: Option<Stats>,
    pub sessions: Vec<CleaningSession>,
}

struct StoreInner {
    /// Highest cycle number that has committed. 0 = nothing committed yet.
    committed_cycle: u64,
    /// True until the first cycle finishes, successfully or not.
    loading: bool,
}

#[derive(Clone)]
pub struct SnapshotStore {
    inner: Arc<Mutex<StoreInner>>,
    tx: watch::Sender<Arc<DashboardSnapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Arc::new(DashboardSnapshot::default()));
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                committed_cycle: 0,
                loading: true,
            })),
            tx,
        }
    }

    /// The currently published snapshot. Cheap: an `Arc` clone.
    pub fn current(&self) -> Arc<DashboardSnapshot> {
        self.tx.borrow().clone()
    }

    /// Watch for committed snapshots. The receiver starts at whatever is
    /// currently published.
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardSnapshot>> {
        self.tx.subscribe()
    }

    /// True until the first cycle has run to completion (either outcome).
    pub fn is_loading(&self) -> bool {
        self.inner.lock().unwrap().loading
    }

    /// Publish the result of cycle `cycle`. Returns false when a
    /// later-issued cycle already committed, in which case the snapshot is
    /// discarded unread.
    pub fn commit(&self, cycle: u64, snapshot: DashboardSnapshot) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if cycle <= inner.committed_cycle {
            debug!(
                "discarding stale snapshot from cycle {cycle} (cycle {} already committed)",
                inner.committed_cycle
            );
            return false;
        }
        inner.committed_cycle = cycle;
        inner.loading = false;
        self.tx.send_replace(Arc::new(snapshot));
        true
    }

    /// Record that a cycle finished without a snapshot. The published
    /// value is left untouched; only the loading flag clears.
    pub fn note_cycle_failure(&self) {
        self.inner.lock().unwrap().loading = false;
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
