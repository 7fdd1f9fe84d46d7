//! The timer that drives aggregation cycles.
//!
//! Each tick fires a cycle without waiting for earlier ones to resolve;
//! overlap is resolved downstream by the store's cycle-number guard.
//! Stopping cancels future ticks only; in-flight cycles run out and
//! their commits land (or are discarded as stale) harmlessly.

use anyhow::{bail, Context, Result};
use log::info;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::aggregator::SyncHandle;

const SYNC_INTERVAL_MS: u64 = 5000;

pub struct SyncController {
    sync: SyncHandle,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl SyncController {
    pub fn new(sync: SyncHandle) -> Self {
        Self {
            sync,
            handle: None,
            cancel_token: None,
        }
    }

    /// Begin the polling loop. The first cycle fires immediately, then one
    /// per interval. Exactly one loop may run at a time.
    pub fn start(&mut self) -> Result<()> {
        if self.handle.is_some() {
            bail!("sync loop already active");
        }

        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();
        let handle = tokio::spawn(sync_loop(self.sync.clone(), token_clone));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    /// Cancel future ticks and release the timer handle. Safe to call
    /// repeatedly or before `start`.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("sync loop task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

async fn sync_loop(sync: SyncHandle, cancel_token: CancellationToken) {
    let mut ticker = tokio::time::interval(Duration::from_millis(SYNC_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                // Not awaited: a slow backend must not delay the next tick.
                sync.spawn_cycle();
            }
            _ = cancel_token.cancelled() => {
                info!("sync loop shutting down");
                break;
            }
        }
    }
}
