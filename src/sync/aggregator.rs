//! One aggregation cycle: six reads fanned out concurrently, merged into a
//! snapshot, committed all-or-nothing.
//!
//! A single failed read discards the whole cycle: the dashboard degrades
//! to "stale" rather than partially blank. Recovery is the next cycle;
//! there is no backoff and no retry limit.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use tokio::time::Duration;

use crate::backend::BackendClient;
use crate::sync::snapshot::{DashboardSnapshot, SnapshotStore};

/// How many detection-feed entries one cycle pulls.
const DETECTED_ITEMS_LIMIT: u32 = 20;
/// How many recent sessions one cycle pulls.
const SESSIONS_LIMIT: u32 = 5;

/// Fetch all six sources concurrently. Fails as a unit: the first read
/// error aborts the cycle and no snapshot is produced.
pub async fn fetch_snapshot(backend: &BackendClient) -> Result<DashboardSnapshot> {
    let (vacuum_status, detected_items, valuables, notifications, stats, sessions) = tokio::try_join!(
        backend.vacuum_status(),
        backend.detected_items(DETECTED_ITEMS_LIMIT),
        backend.valuables(),
        backend.notifications(),
        backend.stats(),
        backend.sessions(SESSIONS_LIMIT),
    )?;

    Ok(DashboardSnapshot {
        vacuum_status: Some(vacuum_status),
        detected_items,
        valuables,
        notifications,
        stats: Some(stats),
        sessions,
    })
}

/// Shared entry point for running cycles, from the scheduler tick or from
/// an ad hoc resync after a write. Cycles are numbered at issue time; the
/// store uses the number to refuse stale commits.
#[derive(Clone)]
pub struct SyncHandle {
    backend: BackendClient,
    store: SnapshotStore,
    cycle_seq: Arc<AtomicU64>,
}

impl SyncHandle {
    pub fn new(backend: BackendClient, store: SnapshotStore) -> Self {
        Self {
            backend,
            store,
            cycle_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Run one cycle to completion on the current task.
    pub async fn run_cycle(&self) {
        let cycle = self.cycle_seq.fetch_add(1, Ordering::SeqCst) + 1;
        match fetch_snapshot(&self.backend).await {
            Ok(snapshot) => {
                if self.store.commit(cycle, snapshot) {
                    info!("sync cycle {cycle} committed");
                }
            }
            Err(err) => {
                warn!("sync cycle {cycle} failed, keeping previous snapshot: {err:#}");
                self.store.note_cycle_failure();
            }
        }
    }

    /// Fire a cycle without waiting for it. Used by the scheduler tick
    /// (no overlap guard between ticks) and by post-write resyncs.
    pub fn spawn_cycle(&self) {
        let handle = self.clone();
        tokio::spawn(async move {
            handle.run_cycle().await;
        });
    }

    /// Fire a cycle after `delay`. The cycle is issued (and numbered)
    /// when the delay elapses, not when it is scheduled.
    pub fn resync_after(&self, delay: Duration) {
        let handle = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            handle.run_cycle().await;
        });
    }
}
